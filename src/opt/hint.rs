//! Static branch prediction hints.
//!
//! Every hint is value-transparent: the returned `bool` is always the one
//! passed in, the argument is evaluated exactly once by the caller, and only
//! the code layout around the branch may change.
//!
//! ```
//! use branch_hint::opt::hint::{likely, unlikely};
//!
//! let list = [1, 2, 3];
//!
//! if unlikely(list.is_empty()) {
//! 	unreachable!();
//! }
//!
//! assert!(likely(list.len() == 3));
//! ```

/// A branch prediction backend.
///
/// `EXPECTED` is the value the condition is expected to have most of the time.
/// Implementations must return `cond` unchanged.
pub trait Hint {
	fn expect<const EXPECTED: bool>(cond: bool) -> bool;
}

/// Hints through the compiler's `likely` and `unlikely` intrinsics.
#[cfg(hint_mode = "intrinsic")]
#[derive(Clone, Copy, Debug)]
pub struct Intrinsic;

#[cfg(hint_mode = "intrinsic")]
impl Hint for Intrinsic {
	#[inline(always)]
	#[allow(unused_unsafe)]
	fn expect<const EXPECTED: bool>(cond: bool) -> bool {
		if EXPECTED {
			/* Safety: the intrinsic only annotates `cond` and returns it unchanged */
			unsafe { core::intrinsics::likely(cond) }
		} else {
			/* Safety: the intrinsic only annotates `cond` and returns it unchanged */
			unsafe { core::intrinsics::unlikely(cond) }
		}
	}
}

/// Hints by routing the unexpected edge through a `#[cold]` call, which the
/// optimizer lays out away from the hot path.
#[derive(Clone, Copy, Debug)]
pub struct ColdPath;

#[inline(always)]
#[cold]
fn cold() {}

impl Hint for ColdPath {
	#[inline(always)]
	fn expect<const EXPECTED: bool>(cond: bool) -> bool {
		if cond != EXPECTED {
			cold();
		}

		cond
	}
}

/// Emits no hint at all.
#[derive(Clone, Copy, Debug)]
pub struct Passthrough;

impl Hint for Passthrough {
	#[inline(always)]
	fn expect<const EXPECTED: bool>(cond: bool) -> bool {
		cond
	}
}

/// The backend selected for this build.
#[cfg(hint_mode = "intrinsic")]
pub type Active = Intrinsic;

/// The backend selected for this build.
#[cfg(hint_mode = "cold_path")]
pub type Active = ColdPath;

/// The backend selected for this build.
#[cfg(not(any(hint_mode = "intrinsic", hint_mode = "cold_path")))]
pub type Active = Passthrough;

/// Hints that `cond` is usually `EXPECTED`.
#[inline(always)]
#[must_use]
pub fn expect<const EXPECTED: bool>(cond: bool) -> bool {
	Active::expect::<EXPECTED>(cond)
}

/// Hints that `cond` is usually `true`.
#[inline(always)]
#[must_use]
pub fn likely(cond: bool) -> bool {
	expect::<true>(cond)
}

/// Hints that `cond` is usually `false`.
#[inline(always)]
#[must_use]
pub fn unlikely(cond: bool) -> bool {
	expect::<false>(cond)
}
