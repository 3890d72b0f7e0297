//! Kotlin declaration model.
//!
//! Nodes are plain values grouped by the scope they may appear in
//! ([`FileMember`], [`ClassMember`], [`FunctionMember`]). Types marked
//! [`unique_member`] may occur at most once per scope; the build script
//! collects them into the [`registry`].

mod class;
mod common;
mod file;
mod function;
pub mod modifiers;
pub mod registry;
mod scope;
mod types;

pub use class::{
	ClassDeclaration, ClassKind, CompanionDeclaration, CompanionObject, InterfaceDeclaration, InterfaceKind, KotlinClass,
	KotlinInterface, KotlinObject, ObjectDeclaration,
};
pub use common::{Comment, CommentKind, EmptyLine};
pub use file::{FileAnnotation, Import, KotlinFile, Package, Shebang};
pub use function::{
	FunctionBody, FunctionDeclaration, FunctionParameter, FunctionParameters, KotlinFunction, Statement, TypeConstraint,
	TypeConstraints,
};
pub use kotfild_macros::unique_member;
pub use registry::{RegistryStatus, UniqueMemberTypes, registry_status, unique_member_types};
pub use scope::{ClassMember, CommonMember, FileMember, FunctionMember, Member, ModelNode, NodeType, ScopeSet};
pub use types::{
	Annotation, Expression, FunctionType, NullableAcceptableType, ReceiverAcceptableType, ReceiverType, Type,
	TypeParameter, TypeParameters, TypeReference,
};
