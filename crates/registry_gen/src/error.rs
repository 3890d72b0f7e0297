use std::io;
use std::path::PathBuf;

/// Failures while discovering marked symbols or emitting the registry.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
	#[error("failed to read {}: {source}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("failed to parse {}: {source}", path.display())]
	Parse {
		path: PathBuf,
		#[source]
		source: syn::Error,
	},

	#[error("module `{module}` not found, looked for {candidates:?}")]
	MissingModule { module: String, candidates: Vec<PathBuf> },

	#[error("invalid type path `{path}`: {source}")]
	InvalidPath {
		path: String,
		#[source]
		source: syn::Error,
	},

	#[error("failed to emit {artifact}: {source}")]
	Emit {
		artifact: String,
		#[source]
		source: io::Error,
	},
}
