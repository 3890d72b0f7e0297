//! Types and the small value objects shared by declarations.

use serde::{Deserialize, Serialize};

use crate::modifiers::TypeParameterModifier;

/// Annotation usage without the leading `@`, e.g. `JvmStatic`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotation(pub String);

impl From<String> for Annotation {
	fn from(annotation: String) -> Self {
		Self(annotation)
	}
}

impl From<&str> for Annotation {
	fn from(annotation: &str) -> Self {
		Self(annotation.to_string())
	}
}

/// Kotlin type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
	/// Type left unspecified, e.g. an omitted return type.
	#[default]
	Empty,
	Reference(TypeReference),
	Parenthesized(Box<Type>),
	Function(FunctionType),
	Nullable(NullableAcceptableType),
	DefinitelyNonNullable(NullableAcceptableType),
}

impl Type {
	pub fn reference(name: impl Into<String>) -> Self {
		Self::Reference(TypeReference::new(name))
	}

	pub fn parenthesized(inner: Type) -> Self {
		Self::Parenthesized(Box::new(inner))
	}

	pub fn nullable(inner: impl Into<NullableAcceptableType>) -> Self {
		Self::Nullable(inner.into())
	}

	pub fn definitely_non_nullable(inner: impl Into<NullableAcceptableType>) -> Self {
		Self::DefinitelyNonNullable(inner.into())
	}

	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}
}

/// Named type reference, e.g. `String` or `List<Int>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeReference {
	pub name: String,
}

impl TypeReference {
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}
}

/// Types that may be made nullable (`T?`) or definitely non-nullable (`T & Any`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullableAcceptableType {
	Reference(TypeReference),
	Parenthesized(Box<Type>),
}

impl From<TypeReference> for NullableAcceptableType {
	fn from(reference: TypeReference) -> Self {
		Self::Reference(reference)
	}
}

/// Types that may serve as an extension receiver.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiverAcceptableType {
	/// No receiver.
	#[default]
	Empty,
	Reference(TypeReference),
	Parenthesized(Box<Type>),
}

impl From<TypeReference> for ReceiverAcceptableType {
	fn from(reference: TypeReference) -> Self {
		Self::Reference(reference)
	}
}

/// Function type, `Receiver.(A, B) -> R`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionType {
	pub receiver: Option<ReceiverAcceptableType>,
	pub parameters: Vec<Type>,
	pub return_type: Box<Type>,
}

/// Receiver of an extension function.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReceiverType {
	pub annotations: Vec<Annotation>,
	pub is_suspendable: bool,
	pub receiver: ReceiverAcceptableType,
}

impl ReceiverType {
	pub fn is_empty(&self) -> bool {
		self.receiver == ReceiverAcceptableType::Empty
	}
}

/// Declared type parameters, `<T : Any, reified R>`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeParameters(pub Vec<TypeParameter>);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParameter {
	pub annotations: Vec<Annotation>,
	pub modifiers: Vec<TypeParameterModifier>,
	pub identifier: String,
	pub bound: Type,
}

/// Unparsed source expression.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expression(pub String);

impl Expression {
	pub fn new(expression: impl Into<String>) -> Self {
		Self(expression.into())
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn test_nullable_reference() {
		let ty = Type::nullable(TypeReference::new("String"));
		assert_eq!(ty, Type::Nullable(NullableAcceptableType::Reference(TypeReference::new("String"))));
		assert!(!ty.is_empty());
	}

	/// `(() -> Unit)?` goes through a parenthesized type.
	#[test]
	fn test_nullable_parenthesized_function() {
		let function = Type::Function(FunctionType {
			receiver: None,
			parameters: Vec::new(),
			return_type: Box::new(Type::reference("Unit")),
		});
		let ty = Type::nullable(NullableAcceptableType::Parenthesized(Box::new(function.clone())));

		let Type::Nullable(NullableAcceptableType::Parenthesized(inner)) = &ty else {
			panic!("expected nullable parenthesized type, got {ty:?}");
		};
		assert_eq!(**inner, function);
	}

	#[test]
	fn test_definitely_non_nullable() {
		let ty = Type::definitely_non_nullable(TypeReference::new("T"));
		assert_eq!(
			ty,
			Type::DefinitelyNonNullable(NullableAcceptableType::Reference(TypeReference::new("T")))
		);
	}

	#[test]
	fn test_serialized_shape() {
		let json = serde_json::to_string(&Type::nullable(TypeReference::new("Int"))).unwrap();
		assert_eq!(json, r#"{"nullable":{"reference":"Int"}}"#);
		assert_eq!(serde_json::to_string(&Type::Empty).unwrap(), r#""empty""#);
	}
}
