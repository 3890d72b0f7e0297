use std::collections::BTreeSet;
use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, error, info};

use crate::config::GeneratorConfig;
use crate::emit::{ArtifactSink, render_artifact};
use crate::error::GenerateError;
use crate::symbols::{MarkedSymbol, SymbolSource};

/// Outcome of a [`UniqueMemberGenerator::process`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
	/// The generator already ran in this build session.
	Skipped,
	/// No marked types were found; nothing was written.
	Empty,
	/// The registry artifact was written with `count` types.
	Emitted { count: usize },
	/// Discovery or emission failed; consumers fall back to an empty registry.
	Degraded { reason: String },
}

impl Generation {
	pub fn artifact_written(&self) -> bool {
		matches!(self, Self::Emitted { .. })
	}
}

/// Collects types marked as unique members and writes the registry artifact.
///
/// A generator runs to completion at most once. Later calls to
/// [`process`](Self::process) return [`Generation::Skipped`] without touching
/// the source or the sink.
#[derive(Debug, Default)]
pub struct UniqueMemberGenerator {
	config: GeneratorConfig,
	invoked: bool,
}

impl UniqueMemberGenerator {
	pub fn new(config: GeneratorConfig) -> Self {
		Self { config, invoked: false }
	}

	pub fn config(&self) -> &GeneratorConfig {
		&self.config
	}

	pub fn process(&mut self, source: &dyn SymbolSource, sink: &mut dyn ArtifactSink) -> Generation {
		if self.invoked {
			debug!("unique member registry already generated in this session");
			return Generation::Skipped;
		}
		self.invoked = true;

		info!("Start processing unique members");

		let symbols = match source.symbols_with_marker(&self.config.marker) {
			Ok(symbols) => symbols,
			Err(err) => {
				error!(error = %err, "Error discovering unique members");
				return Generation::Degraded { reason: err.to_string() };
			}
		};

		if symbols.is_empty() {
			info!("No unique members found");
			info!("Processing unique members finished");
			return Generation::Empty;
		}

		info!(
			symbols = ?symbols.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
			"Symbols marked as unique members"
		);

		match self.emit(&symbols, sink) {
			Ok(()) => {
				info!("Processing unique members finished");
				Generation::Emitted { count: symbols.len() }
			}
			Err(err) => {
				error!(error = %err, "Error generating unique member registry");
				Generation::Degraded { reason: err.to_string() }
			}
		}
	}

	fn emit(&self, symbols: &[MarkedSymbol], sink: &mut dyn ArtifactSink) -> Result<(), GenerateError> {
		let name = self.config.artifact_name.as_str();
		let emit_err = |source| GenerateError::Emit {
			artifact: name.to_string(),
			source,
		};

		let dependencies: Vec<PathBuf> = symbols
			.iter()
			.map(|symbol| symbol.source_file.clone())
			.collect::<BTreeSet<_>>()
			.into_iter()
			.collect();
		let contents = render_artifact(symbols, &self.config)?;

		info!(artifact = name, "Writing unique member registry");
		let mut writer = sink.create_artifact(name, &dependencies).map_err(emit_err)?;
		writer.write_all(contents.as_bytes()).map_err(emit_err)?;
		writer.flush().map_err(emit_err)
	}
}
