//! Builders assembling the Kotlin declaration model.
//!
//! [`kotlin_file`] is the entry point. Each builder exposes write-once
//! setters backed by a [`Slot`](internal::Slot) and appenders backed by a
//! [`MemberCollector`](internal::MemberCollector), which rejects a second
//! member of any type registered as unique.

mod class;
mod dsl;
mod error;
mod file;
mod function;
pub mod internal;
pub mod prelude;
mod scope;
mod types;

pub use class::{ClassBuilder, CompanionObjectBuilder, InterfaceBuilder, ObjectBuilder};
pub use dsl::kotlin_file;
pub use error::{BuildError, Result};
pub use file::KotlinFileBuilder;
pub use function::{
	FunctionBodyBlockBuilder, FunctionDeclarationBuilder, FunctionWithBodyBlockBuilder, FunctionWithBodyExpressionBuilder,
};
pub use kotfild_model as model;
pub use scope::{
	CommentsAwareBuilder, CompanionAwareBuilder, CompanionHost, DeclarationAwareBuilder, FunctionAwareBuilder, ScopeBuilder,
};
pub use types::{
	DEFAULT_TYPE_PARAMETER_BOUND, FunctionParameterBuilder, FunctionParametersBuilder, ReceiverTypeBuilder,
	TypeConstraintBuilder, TypeConstraintsBuilder, TypeParameterBuilder, TypeParametersBuilder,
};
