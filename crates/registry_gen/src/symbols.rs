//! Discovery of marker-tagged types in a crate's module tree.

use std::fs;
use std::path::{Path, PathBuf};

use syn::{Attribute, Item, Meta};
use tracing::{debug, warn};

use crate::error::GenerateError;

/// A struct or enum carrying the marker attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedSymbol {
	/// Type identifier.
	pub name: String,
	/// Module path below the crate root, outermost first.
	pub module_path: Vec<String>,
	/// File the type is declared in.
	pub source_file: PathBuf,
}

impl MarkedSymbol {
	/// Fully qualified path of the type, e.g. `crate::file::Package`.
	pub fn qualified_path(&self, crate_root: &str) -> String {
		let mut path = String::from(crate_root);
		for segment in self.module_path.iter().chain(std::iter::once(&self.name)) {
			path.push_str("::");
			path.push_str(segment);
		}
		path
	}
}

/// Source of the symbols the generator inspects.
pub trait SymbolSource {
	/// Returns every type whose attributes end in `marker`.
	fn symbols_with_marker(&self, marker: &str) -> Result<Vec<MarkedSymbol>, GenerateError>;
}

/// A crate's module tree on disk, rooted at `lib.rs` (or `main.rs`).
///
/// Modules are followed through `mod name;` declarations, resolving to
/// `name.rs` or `name/mod.rs`, and through inline `mod name { .. }` blocks.
/// `#[path = ".."]` overrides are honoured. Items and modules behind any
/// `#[cfg(..)]` are not part of the symbol space.
#[derive(Debug, Clone)]
pub struct SourceTree {
	root_file: PathBuf,
}

/// Where a module's items live and where its children resolve.
struct ModuleCtx<'a> {
	path: Vec<String>,
	file: &'a Path,
	/// Directory `mod child;` resolves against.
	child_dir: PathBuf,
	/// Directory `#[path]` attributes resolve against.
	path_attr_dir: PathBuf,
}

impl SourceTree {
	pub fn new(root_file: impl Into<PathBuf>) -> Self {
		Self { root_file: root_file.into() }
	}

	pub fn root_file(&self) -> &Path {
		&self.root_file
	}

	fn scan_file(
		&self,
		file: &Path,
		module_path: Vec<String>,
		is_mod_rs: bool,
		marker: &str,
		out: &mut Vec<MarkedSymbol>,
	) -> Result<(), GenerateError> {
		let content = fs::read_to_string(file).map_err(|source| GenerateError::Read {
			path: file.to_path_buf(),
			source,
		})?;
		let parsed = syn::parse_file(&content).map_err(|source| GenerateError::Parse {
			path: file.to_path_buf(),
			source,
		})?;

		let dir = file.parent().map(Path::to_path_buf).unwrap_or_default();
		let child_dir = if is_mod_rs {
			dir.clone()
		} else {
			let stem = file.file_stem().map(|s| s.to_os_string()).unwrap_or_default();
			dir.join(stem)
		};

		let ctx = ModuleCtx {
			path: module_path,
			file,
			child_dir,
			path_attr_dir: dir,
		};
		self.scan_items(&parsed.items, &ctx, marker, out)
	}

	fn scan_items(
		&self,
		items: &[Item],
		ctx: &ModuleCtx<'_>,
		marker: &str,
		out: &mut Vec<MarkedSymbol>,
	) -> Result<(), GenerateError> {
		for item in items {
			match item {
				Item::Struct(item) if is_marked(&item.attrs, marker) => {
					ctx.record(item.ident.to_string(), &item.attrs, out);
				}
				Item::Enum(item) if is_marked(&item.attrs, marker) => {
					ctx.record(item.ident.to_string(), &item.attrs, out);
				}
				Item::Mod(module) if is_cfg_gated(&module.attrs) => {
					debug!(module = %module.ident, "skipping cfg-gated module");
				}
				Item::Mod(module) => {
					let name = module.ident.to_string();
					let mut path = ctx.path.clone();
					path.push(name.clone());

					match &module.content {
						Some((_, items)) => {
							let inner = ModuleCtx {
								path,
								file: ctx.file,
								child_dir: ctx.child_dir.join(&name),
								path_attr_dir: ctx.child_dir.join(&name),
							};
							self.scan_items(items, &inner, marker, out)?;
						}
						None => {
							let (file, is_mod_rs) = resolve_module(ctx, &name, &module.attrs)?;
							self.scan_file(&file, path, is_mod_rs, marker, out)?;
						}
					}
				}
				_ => {}
			}
		}
		Ok(())
	}
}

impl SymbolSource for SourceTree {
	fn symbols_with_marker(&self, marker: &str) -> Result<Vec<MarkedSymbol>, GenerateError> {
		let mut out = Vec::new();
		self.scan_file(&self.root_file, Vec::new(), true, marker, &mut out)?;
		Ok(out)
	}
}

impl ModuleCtx<'_> {
	/// Records a marked type unless a `cfg` may compile it out.
	fn record(&self, name: String, attrs: &[Attribute], out: &mut Vec<MarkedSymbol>) {
		if is_cfg_gated(attrs) {
			warn!(symbol = %name, file = %self.file.display(), "skipping cfg-gated unique member");
			return;
		}
		out.push(MarkedSymbol {
			name,
			module_path: self.path.clone(),
			source_file: self.file.to_path_buf(),
		});
	}
}

/// Resolves an out-of-line `mod name;` declaration to its file.
///
/// Returns the file and whether it owns its directory (`mod.rs` semantics).
fn resolve_module(ctx: &ModuleCtx<'_>, name: &str, attrs: &[Attribute]) -> Result<(PathBuf, bool), GenerateError> {
	if let Some(rel) = path_attr(attrs) {
		let file = ctx.path_attr_dir.join(rel);
		return if file.is_file() {
			Ok((file, true))
		} else {
			Err(GenerateError::MissingModule {
				module: name.to_string(),
				candidates: vec![file],
			})
		};
	}

	let flat = ctx.child_dir.join(format!("{name}.rs"));
	if flat.is_file() {
		return Ok((flat, false));
	}
	let nested = ctx.child_dir.join(name).join("mod.rs");
	if nested.is_file() {
		return Ok((nested, true));
	}
	Err(GenerateError::MissingModule {
		module: name.to_string(),
		candidates: vec![flat, nested],
	})
}

fn is_marked(attrs: &[Attribute], marker: &str) -> bool {
	attrs
		.iter()
		.any(|attr| attr.path().segments.last().is_some_and(|segment| segment.ident == marker))
}

/// True for any `#[cfg(..)]` attribute, `cfg(test)` included.
fn is_cfg_gated(attrs: &[Attribute]) -> bool {
	attrs.iter().any(|attr| attr.path().is_ident("cfg"))
}

fn path_attr(attrs: &[Attribute]) -> Option<String> {
	attrs.iter().find_map(|attr| {
		let Meta::NameValue(meta) = &attr.meta else {
			return None;
		};
		if !meta.path.is_ident("path") {
			return None;
		}
		let syn::Expr::Lit(expr) = &meta.value else {
			return None;
		};
		let syn::Lit::Str(lit) = &expr.lit else {
			return None;
		};
		Some(lit.value())
	})
}

#[cfg(test)]
mod tests;
