//! Build-script context for running the generator inside cargo.
//!
//! Provides the paths cargo hands to a build script and the `cargo:` output
//! lines that publish a [`Generation`] to the crate being compiled.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::generator::Generation;

/// `cfg` set on the compiled crate when the registry artifact was emitted.
pub const REGISTRY_CFG: &str = "kotfild_registry";

/// Environment variable carrying the failure reason of a degraded generation.
pub const DEGRADED_ENV: &str = "KOTFILD_REGISTRY_DEGRADED";

pub struct BuildCtx {
	pub manifest_dir: PathBuf,
	pub out_dir: PathBuf,
}

impl Default for BuildCtx {
	fn default() -> Self {
		Self::new()
	}
}

impl BuildCtx {
	pub fn new() -> Self {
		let manifest_dir =
			PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo"));
		let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
		Self { manifest_dir, out_dir }
	}

	pub fn asset(&self, rel: &str) -> PathBuf {
		self.manifest_dir.join(rel)
	}

	pub fn rerun_if_changed(&self, path: &Path) {
		println!("cargo:rerun-if-changed={}", path.display());
	}

	/// Reruns the build script when anything under `root` changes.
	pub fn rerun_tree(&self, root: &Path) {
		println!("cargo:rerun-if-changed={}", root.display());
		for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
			if entry.path().is_file() {
				self.rerun_if_changed(entry.path());
			}
		}
	}

	/// Declares the cfg names this build script may set.
	pub fn declare_cfgs(&self) {
		println!("cargo::rustc-check-cfg=cfg({REGISTRY_CFG})");
	}

	/// Publishes the generation outcome to the crate being compiled.
	///
	/// An emitted artifact enables [`REGISTRY_CFG`]. A degraded run leaves it
	/// unset, surfaces a cargo warning and exports the reason through
	/// [`DEGRADED_ENV`] so the compiled crate can report it.
	pub fn publish(&self, generation: &Generation) {
		match generation {
			Generation::Emitted { .. } => println!("cargo:rustc-cfg={REGISTRY_CFG}"),
			Generation::Degraded { reason } => {
				let reason = reason.replace(['\n', '\r'], " ");
				println!("cargo:warning=unique member registry degraded: {reason}");
				println!("cargo:rustc-env={DEGRADED_ENV}={reason}");
			}
			Generation::Empty | Generation::Skipped => {}
		}
	}
}
