//! The build-wide hint availability mode.
//!
//! Chosen once by the build script, before any annotation site is compiled,
//! so every site in a build agrees on it.

use std::fmt;

use static_assertions::{assert_impl_all, const_assert};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
	/// Compiler intrinsics (nightly).
	Intrinsic,

	/// `#[cold]` call on the unexpected edge.
	ColdPath,

	/// No hinting, every annotation is the plain expression.
	Passthrough
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FallbackReason {
	/// Turned off through the `disable-hinting` feature or `BRANCH_HINT_DISABLE`.
	Disabled,

	/// The toolchain cannot express the hint.
	Unsupported
}

assert_impl_all!(Mode: Copy, Send, Sync);
assert_impl_all!(FallbackReason: Copy, Send, Sync);

impl Mode {
	#[cfg(hint_mode = "intrinsic")]
	pub const CURRENT: Self = Self::Intrinsic;

	#[cfg(hint_mode = "cold_path")]
	pub const CURRENT: Self = Self::ColdPath;

	#[cfg(not(any(hint_mode = "intrinsic", hint_mode = "cold_path")))]
	pub const CURRENT: Self = Self::Passthrough;

	#[must_use]
	pub const fn is_enabled(self) -> bool {
		!matches!(self, Self::Passthrough)
	}

	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Intrinsic => "intrinsic",
			Self::ColdPath => "cold path",
			Self::Passthrough => "passthrough"
		}
	}

	/// Why this build fell back to [`Mode::Passthrough`], if it did.
	#[must_use]
	pub const fn fallback_reason(self) -> Option<FallbackReason> {
		if self.is_enabled() {
			return None;
		}

		if cfg!(hint_fallback = "unsupported") {
			Some(FallbackReason::Unsupported)
		} else {
			Some(FallbackReason::Disabled)
		}
	}
}

impl FallbackReason {
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Disabled => "disabled by configuration",
			Self::Unsupported => "unsupported by the toolchain"
		}
	}
}

impl fmt::Display for Mode {
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt.write_str(self.as_str())
	}
}

impl fmt::Display for FallbackReason {
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt.write_str(self.as_str())
	}
}

const_assert!(!cfg!(feature = "disable-hinting") || !Mode::CURRENT.is_enabled());
const_assert!(cfg!(feature = "nightly") || !matches!(Mode::CURRENT, Mode::Intrinsic));

/// Logs the mode this build was compiled in.
///
/// Falling back because the toolchain cannot hint is worth a warning, an
/// explicit opt-out is not.
#[cfg(feature = "log")]
pub fn report() {
	let mode = Mode::CURRENT;

	match mode.fallback_reason() {
		Some(reason @ FallbackReason::Unsupported) => {
			crate::warn!("== Branch hints {}, using {}", reason, mode);
		}

		Some(reason @ FallbackReason::Disabled) => {
			crate::debug!("== Branch hints {}, using {}", reason, mode);
		}

		None => crate::trace!("== Branch hints enabled, using {}", mode)
	}
}
