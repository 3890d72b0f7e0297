//! Function declarations and function-scope nodes.

use serde::{Deserialize, Serialize};

use crate::modifiers::{FunctionModifier, FunctionParameterModifier};
use crate::scope::{FunctionMember, ModelNode, ScopeSet};
use crate::types::{Annotation, Expression, ReceiverType, Type, TypeParameters};

/// A function together with its body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KotlinFunction {
	pub declaration: FunctionDeclaration,
	pub body: FunctionBody,
}

impl ModelNode for KotlinFunction {
	const SCOPES: ScopeSet = ScopeSet::FILE.union(ScopeSet::CLASS);
}

/// Everything in a function header up to the body.
///
/// Unset parts default to their empty form: no annotations or modifiers, no
/// receiver, an empty name, no parameters and [`Type::Empty`] as the return
/// type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FunctionDeclaration {
	pub annotations: Vec<Annotation>,
	pub modifiers: Vec<FunctionModifier>,
	pub type_parameters: TypeParameters,
	pub receiver_type: ReceiverType,
	pub name: String,
	pub parameters: FunctionParameters,
	pub return_type: Type,
	pub type_constraints: TypeConstraints,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FunctionParameters(pub Vec<FunctionParameter>);

impl FunctionParameters {
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionParameter {
	pub annotations: Vec<Annotation>,
	pub modifiers: Vec<FunctionParameterModifier>,
	pub name: String,
	pub parameter_type: Type,
	/// Default value; empty when the parameter has none.
	pub default_value: Expression,
}

/// `where` clause.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeConstraints(pub Vec<TypeConstraint>);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeConstraint {
	pub annotations: Vec<Annotation>,
	pub name: String,
	pub bound: Type,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionBody {
	/// `{ ... }`
	Block(Vec<FunctionMember>),
	/// `= expression`
	Expression(String),
	/// Abstract or external function without a body.
	Empty,
}

/// Raw statement inside a function body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Statement {
	pub code: String,
}

impl Statement {
	pub fn new(code: impl Into<String>) -> Self {
		Self { code: code.into() }
	}
}

impl ModelNode for Statement {
	const SCOPES: ScopeSet = ScopeSet::FUNCTION;
}
