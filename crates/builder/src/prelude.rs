//! Traits and entry points needed to drive the builders.

pub use crate::error::{BuildError, Result};
pub use crate::internal::Builder;
pub use crate::kotlin_file;
pub use crate::scope::{
	CommentsAwareBuilder, CompanionAwareBuilder, CompanionHost, DeclarationAwareBuilder, FunctionAwareBuilder, ScopeBuilder,
};
