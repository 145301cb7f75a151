//! Static branch prediction hints.
//!
//! [`likely`] and [`unlikely`] mark a boolean as usually `true` or usually
//! `false`. [`likely_if!`] and [`unlikely_if!`] do the same for the condition
//! of a whole `if`/`else` chain. The backend is picked once per build, see
//! [`mode::Mode`].

#![cfg_attr(hint_mode = "intrinsic", feature(core_intrinsics))]
#![cfg_attr(hint_mode = "intrinsic", allow(internal_features))]

#[cfg(feature = "log")]
pub mod log;
#[cfg(feature = "macros")]
pub mod macros;
pub mod mode;
pub mod opt;

#[cfg(test)]
#[path = "../build/detect.rs"]
mod detect;

#[cfg(feature = "macros")]
pub use macros::*;
pub use opt::hint::{likely, unlikely};

extern crate self as branch_hint;
