//! Registry artifact rendering and output.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use quote::quote;

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::symbols::MarkedSymbol;

/// Destination for generated artifacts.
pub trait ArtifactSink {
	/// Creates the artifact `name`, recording the sources it was derived from.
	fn create_artifact(&mut self, name: &str, dependencies: &[PathBuf]) -> io::Result<Box<dyn Write + '_>>;
}

/// Writes artifacts into cargo's `OUT_DIR`.
///
/// Dependencies are aggregated into `cargo:rerun-if-changed` lines so the
/// artifact is regenerated whenever any contributing file changes.
#[derive(Debug, Clone)]
pub struct OutDir {
	dir: PathBuf,
}

impl OutDir {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	pub fn path(&self, name: &str) -> PathBuf {
		self.dir.join(name)
	}

	pub fn dir(&self) -> &Path {
		&self.dir
	}
}

impl ArtifactSink for OutDir {
	fn create_artifact(&mut self, name: &str, dependencies: &[PathBuf]) -> io::Result<Box<dyn Write + '_>> {
		for dependency in dependencies {
			println!("cargo:rerun-if-changed={}", dependency.display());
		}
		fs::create_dir_all(&self.dir)?;
		let file = File::create(self.path(name))?;
		Ok(Box::new(BufWriter::new(file)))
	}
}

/// Renders the `UNIQUE_MEMBER_TYPES` registry for `symbols`.
///
/// The artifact is meant to be `include!`d by the scanned crate, so every
/// path is resolved relative to [`GeneratorConfig::crate_root`].
pub fn render_artifact(symbols: &[MarkedSymbol], config: &GeneratorConfig) -> Result<String, GenerateError> {
	let node_type = parse_path(&config.node_type_path)?;
	let types = symbols
		.iter()
		.map(|symbol| parse_path(&symbol.qualified_path(&config.crate_root)))
		.collect::<Result<Vec<_>, _>>()?;

	let tokens = quote! {
		/// Node types marked `#[unique_member]`, discovered at build time.
		pub(crate) const UNIQUE_MEMBER_TYPES: &[fn() -> #node_type] = &[
			#(#node_type::of::<#types>,)*
		];
	};

	Ok(format!("// @generated by kotfild-registry-gen, do not edit.\n\n{tokens}\n"))
}

fn parse_path(path: &str) -> Result<syn::Path, GenerateError> {
	syn::parse_str(path).map_err(|source| GenerateError::InvalidPath {
		path: path.to_string(),
		source,
	})
}
