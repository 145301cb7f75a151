//! `if` statements whose condition carries a branch hint.
//!
//! ```
//! use branch_hint::macros::{likely_if, unlikely_if};
//!
//! fn classify(len: usize) -> &'static str {
//! 	unlikely_if!(len == 0 {
//! 		"empty"
//! 	} else likely_if len == 10 {
//! 		"full"
//! 	} else {
//! 		"partial"
//! 	})
//! }
//!
//! assert_eq!(classify(0), "empty");
//! assert_eq!(classify(10), "full");
//! assert_eq!(classify(4), "partial");
//! ```

pub use branch_hint_macros::{likely_if, unlikely_if};
