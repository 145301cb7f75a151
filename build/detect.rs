//! Toolchain capability detection shared by the build script and its tests.

/// Codegen backends that drop branch weights on the floor.
pub const UNSUPPORTED_BACKENDS: &[&str] = &["cranelift"];

/// Whether an environment switch such as `BRANCH_HINT_DISABLE` is on.
pub fn truthy(value: &str) -> bool {
	matches!(
		value.trim().to_ascii_lowercase().as_str(),
		"1" | "true" | "yes" | "on"
	)
}

/// Finds an unsupported codegen backend in `CARGO_ENCODED_RUSTFLAGS`.
///
/// Flags are separated by `0x1f`. The backend may be given as one flag
/// (`-Zcodegen-backend=cranelift`) or as `-Z` followed by
/// `codegen-backend=cranelift`.
pub fn unsupported_backend(encoded_flags: &str) -> Option<&'static str> {
	let mut after_z = false;

	for flag in encoded_flags.split('\x1f') {
		let backend = match flag.strip_prefix("-Zcodegen-backend=") {
			Some(backend) => Some(backend),
			None if after_z => flag.strip_prefix("codegen-backend="),
			None => None
		};

		after_z = flag == "-Z";

		let Some(backend) = backend else {
			continue;
		};

		if let Some(name) = UNSUPPORTED_BACKENDS
			.iter()
			.find(|name| backend.contains(**name))
		{
			return Some(name);
		}
	}

	None
}

/// Reads the channel from `rustc -vV` output. `None` if there is no
/// `release:` line.
pub fn release_is_nightly(version: &str) -> Option<bool> {
	let release = version
		.lines()
		.find_map(|line| line.strip_prefix("release: "))?;

	Some(release.contains("nightly") || release.contains("dev"))
}
