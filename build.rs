#![allow(clippy::print_stdout)]

use std::env::{var, var_os};
use std::io::{Error, ErrorKind, Result};
use std::process::Command;

#[path = "build/detect.rs"]
mod detect;

#[derive(Clone, Copy)]
enum Mode {
	Intrinsic,
	ColdPath,
	Passthrough(Fallback)
}

#[derive(Clone, Copy)]
enum Fallback {
	Disabled,
	Unsupported
}

impl Mode {
	const fn as_str(self) -> &'static str {
		match self {
			Self::Intrinsic => "intrinsic",
			Self::ColdPath => "cold_path",
			Self::Passthrough(_) => "passthrough"
		}
	}
}

impl Fallback {
	const fn as_str(self) -> &'static str {
		match self {
			Self::Disabled => "disabled",
			Self::Unsupported => "unsupported"
		}
	}
}

fn disabled_by_user() -> bool {
	if var_os("CARGO_FEATURE_DISABLE_HINTING").is_some() {
		return true;
	}

	var("BRANCH_HINT_DISABLE").is_ok_and(|value| detect::truthy(&value))
}

fn unsupported_backend() -> Option<&'static str> {
	detect::unsupported_backend(&var("CARGO_ENCODED_RUSTFLAGS").unwrap_or_default())
}

fn rustc_is_nightly() -> Result<bool> {
	let rustc = var_os("RUSTC").unwrap_or_else(|| "rustc".into());
	let output = Command::new(rustc).arg("-vV").output()?;

	if !output.status.success() {
		return Err(Error::other("`rustc -vV` exited with an error"));
	}

	let version = String::from_utf8(output.stdout)
		.map_err(|err| Error::new(ErrorKind::InvalidData, err))?;

	detect::release_is_nightly(&version)
		.ok_or_else(|| Error::new(ErrorKind::InvalidData, "missing release line"))
}

fn resolve() -> Result<Mode> {
	if disabled_by_user() {
		return Ok(Mode::Passthrough(Fallback::Disabled));
	}

	if let Some(backend) = unsupported_backend() {
		println!(
			"cargo::warning=branch hints are not supported by the {backend} backend, falling \
			 back to passthrough"
		);

		return Ok(Mode::Passthrough(Fallback::Unsupported));
	}

	if var_os("CARGO_FEATURE_NIGHTLY").is_none() {
		return Ok(Mode::ColdPath);
	}

	if rustc_is_nightly()? {
		Ok(Mode::Intrinsic)
	} else {
		println!(
			"cargo::warning=feature `nightly` requires a nightly compiler, using cold path hints"
		);

		Ok(Mode::ColdPath)
	}
}

fn main() -> Result<()> {
	println!("cargo::rerun-if-changed=build.rs");
	println!("cargo::rerun-if-changed=build/detect.rs");
	println!("cargo::rerun-if-env-changed=BRANCH_HINT_DISABLE");
	println!("cargo::rerun-if-env-changed=CARGO_ENCODED_RUSTFLAGS");
	println!(
		"cargo::rustc-check-cfg=cfg(hint_mode, values(\"intrinsic\", \"cold_path\", \
		 \"passthrough\"))"
	);
	println!("cargo::rustc-check-cfg=cfg(hint_fallback, values(\"disabled\", \"unsupported\"))");

	let mode = resolve()?;

	println!("cargo::rustc-cfg=hint_mode=\"{}\"", mode.as_str());

	if let Mode::Passthrough(fallback) = mode {
		println!("cargo::rustc-cfg=hint_fallback=\"{}\"", fallback.as_str());
	}

	Ok(())
}
