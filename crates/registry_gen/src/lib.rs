//! Build-time discovery of unique member types.
//!
//! `kotfild-model`'s build script runs a [`UniqueMemberGenerator`] once per
//! build. It walks the model crate's module tree ([`SourceTree`]), collects
//! every struct or enum carrying the `#[unique_member]` marker and emits the
//! `UNIQUE_MEMBER_TYPES` registry into `OUT_DIR` ([`OutDir`]).
//!
//! Generation failures never fail the build: they are logged and reported
//! as [`Generation::Degraded`], and the model crate then falls back to an
//! empty registry.

mod compile;
mod config;
mod emit;
mod error;
mod generator;
mod symbols;

pub use compile::{BuildCtx, DEGRADED_ENV, REGISTRY_CFG};
pub use config::GeneratorConfig;
pub use emit::{ArtifactSink, OutDir, render_artifact};
pub use error::GenerateError;
pub use generator::{Generation, UniqueMemberGenerator};
pub use symbols::{MarkedSymbol, SourceTree, SymbolSource};
