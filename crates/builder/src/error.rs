/// Structural misuse detected while building a declaration.
///
/// Every variant aborts the enclosing `build()`; none is retryable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
	/// A required single-assignment field was never configured.
	#[error("`{field}` is not set")]
	NotSet { field: &'static str },
	/// A single-assignment field was configured twice.
	#[error("`{field}` is already set")]
	AlreadySet { field: &'static str },
	/// A second instance of a unique member type was added to one scope.
	#[error("duplicate unique member: {type_name} may appear only once per scope")]
	DuplicateUniqueMember { type_name: &'static str },
}

pub type Result<T, E = BuildError> = std::result::Result<T, E>;
