//! Classifier declarations: classes, interfaces and objects.

use kotfild_macros::unique_member;
use serde::{Deserialize, Serialize};

use crate::modifiers::{ClassModifier, InterfaceModifier};
use crate::scope::{ClassMember, ModelNode, ScopeSet};
use crate::types::{Annotation, TypeParameters};

/// Which `class` form a [`KotlinClass`] declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
	#[default]
	Regular,
	/// `data class`
	Data,
	/// `annotation class`
	Annotation,
	/// `@JvmInline value class`
	InlineValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KotlinClass {
	pub kind: ClassKind,
	pub declaration: ClassDeclaration,
	pub members: Vec<ClassMember>,
}

impl ModelNode for KotlinClass {
	const SCOPES: ScopeSet = ScopeSet::FILE.union(ScopeSet::CLASS);
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassDeclaration {
	pub annotations: Vec<Annotation>,
	pub modifiers: Vec<ClassModifier>,
	pub name: String,
	pub type_parameters: TypeParameters,
}

/// Which `interface` form a [`KotlinInterface`] declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceKind {
	#[default]
	Regular,
	/// `fun interface`
	Fun,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KotlinInterface {
	pub kind: InterfaceKind,
	pub declaration: InterfaceDeclaration,
	pub members: Vec<ClassMember>,
}

impl ModelNode for KotlinInterface {
	const SCOPES: ScopeSet = ScopeSet::FILE.union(ScopeSet::CLASS);
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InterfaceDeclaration {
	pub annotations: Vec<Annotation>,
	pub modifiers: Vec<InterfaceModifier>,
	pub name: String,
	pub type_parameters: TypeParameters,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KotlinObject {
	pub declaration: ObjectDeclaration,
	pub members: Vec<ClassMember>,
}

impl ModelNode for KotlinObject {
	const SCOPES: ScopeSet = ScopeSet::FILE.union(ScopeSet::CLASS);
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ObjectDeclaration {
	pub annotations: Vec<Annotation>,
	pub modifiers: Vec<ClassModifier>,
	pub name: String,
}

/// `companion object`; a classifier body holds at most one.
#[unique_member]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanionObject {
	pub declaration: CompanionDeclaration,
	pub members: Vec<ClassMember>,
}

impl ModelNode for CompanionObject {
	const SCOPES: ScopeSet = ScopeSet::CLASS;
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompanionDeclaration {
	pub annotations: Vec<Annotation>,
	pub modifiers: Vec<ClassModifier>,
	/// Explicit name; `None` for the implicit `Companion`.
	pub name: Option<String>,
}
