//! Builders for the parts of a function header.

use kotfild_model::modifiers::{FunctionParameterModifier, TypeParameterModifier};
use kotfild_model::{
	Annotation, Expression, FunctionParameter, ReceiverAcceptableType, ReceiverType, Type, TypeConstraint, TypeParameter,
};

use crate::error::Result;
use crate::internal::{Builder, Slot, TypedSequenceBuilder, init_builder, init_typed_sequence, init_typed_sequence_with};

/// Bound of a type parameter declared without one.
pub const DEFAULT_TYPE_PARAMETER_BOUND: &str = "Any";

/// `<T, reified R : Any>`
#[derive(Debug, Clone, Default)]
pub struct TypeParametersBuilder {
	parameters: TypedSequenceBuilder<TypeParameter>,
}

impl TypeParametersBuilder {
	pub fn type_parameter(
		&mut self,
		identifier: impl Into<String>,
		init: impl FnOnce(&mut TypeParameterBuilder) -> Result<()>,
	) -> Result<()> {
		self.parameters.push(init_builder(TypeParameterBuilder::new(identifier), init)?);
		Ok(())
	}
}

impl Builder for TypeParametersBuilder {
	type Output = Vec<TypeParameter>;

	fn build(&self) -> Result<Vec<TypeParameter>> {
		self.parameters.build()
	}
}

#[derive(Debug, Clone)]
pub struct TypeParameterBuilder {
	identifier: String,
	annotations: Vec<Annotation>,
	modifiers: Vec<TypeParameterModifier>,
	bound: Slot<Type>,
}

impl TypeParameterBuilder {
	pub fn new(identifier: impl Into<String>) -> Self {
		Self {
			identifier: identifier.into(),
			annotations: Vec::new(),
			modifiers: Vec::new(),
			bound: Slot::new("type"),
		}
	}

	pub fn annotations(&mut self, init: impl FnOnce(&mut TypedSequenceBuilder<String>)) {
		self.annotations.extend(init_typed_sequence_with(init, Annotation::from));
	}

	pub fn modifiers(&mut self, init: impl FnOnce(&mut TypedSequenceBuilder<TypeParameterModifier>)) {
		self.modifiers.extend(init_typed_sequence(init));
	}

	/// Upper bound, `Any` when unset.
	pub fn bound(&mut self, bound: Type) -> Result<()> {
		self.bound.set(bound)
	}
}

impl Builder for TypeParameterBuilder {
	type Output = TypeParameter;

	fn build(&self) -> Result<TypeParameter> {
		Ok(TypeParameter {
			annotations: self.annotations.clone(),
			modifiers: self.modifiers.clone(),
			identifier: self.identifier.clone(),
			bound: self.bound.get_or_default(|| Type::reference(DEFAULT_TYPE_PARAMETER_BOUND)),
		})
	}
}

/// Extension receiver, `suspend @Ann String.`
#[derive(Debug, Clone)]
pub struct ReceiverTypeBuilder {
	annotations: Vec<Annotation>,
	suspendable: Slot<bool>,
	receiver: Slot<ReceiverAcceptableType>,
}

impl ReceiverTypeBuilder {
	pub fn new() -> Self {
		Self {
			annotations: Vec::new(),
			suspendable: Slot::new("suspendable"),
			receiver: Slot::new("receiver_type"),
		}
	}

	pub fn annotations(&mut self, init: impl FnOnce(&mut TypedSequenceBuilder<String>)) {
		self.annotations.extend(init_typed_sequence_with(init, Annotation::from));
	}

	pub fn suspendable(&mut self, suspendable: bool) -> Result<()> {
		self.suspendable.set(suspendable)
	}

	pub fn receiver_type(&mut self, receiver: impl Into<ReceiverAcceptableType>) -> Result<()> {
		self.receiver.set(receiver.into())
	}
}

impl Default for ReceiverTypeBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl Builder for ReceiverTypeBuilder {
	type Output = ReceiverType;

	fn build(&self) -> Result<ReceiverType> {
		Ok(ReceiverType {
			annotations: self.annotations.clone(),
			is_suspendable: self.suspendable.get_or_default(|| false),
			receiver: self.receiver.get_or_default(ReceiverAcceptableType::default),
		})
	}
}

/// Value parameter list.
#[derive(Debug, Clone, Default)]
pub struct FunctionParametersBuilder {
	parameters: TypedSequenceBuilder<FunctionParameter>,
}

impl FunctionParametersBuilder {
	pub fn parameter(
		&mut self,
		name: impl Into<String>,
		init: impl FnOnce(&mut FunctionParameterBuilder) -> Result<()>,
	) -> Result<()> {
		self.parameters.push(init_builder(FunctionParameterBuilder::new(name), init)?);
		Ok(())
	}
}

impl Builder for FunctionParametersBuilder {
	type Output = Vec<FunctionParameter>;

	fn build(&self) -> Result<Vec<FunctionParameter>> {
		self.parameters.build()
	}
}

#[derive(Debug, Clone)]
pub struct FunctionParameterBuilder {
	name: String,
	annotations: Vec<Annotation>,
	modifiers: Vec<FunctionParameterModifier>,
	parameter_type: Slot<Type>,
	default_value: Slot<Expression>,
}

impl FunctionParameterBuilder {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			annotations: Vec::new(),
			modifiers: Vec::new(),
			parameter_type: Slot::new("type"),
			default_value: Slot::new("expression"),
		}
	}

	pub fn annotations(&mut self, init: impl FnOnce(&mut TypedSequenceBuilder<String>)) {
		self.annotations.extend(init_typed_sequence_with(init, Annotation::from));
	}

	pub fn modifiers(&mut self, init: impl FnOnce(&mut TypedSequenceBuilder<FunctionParameterModifier>)) {
		self.modifiers.extend(init_typed_sequence(init));
	}

	pub fn parameter_type(&mut self, parameter_type: Type) -> Result<()> {
		self.parameter_type.set(parameter_type)
	}

	/// Default value expression.
	pub fn expression(&mut self, expression: impl Into<String>) -> Result<()> {
		self.default_value.set(Expression::new(expression))
	}
}

impl Builder for FunctionParameterBuilder {
	type Output = FunctionParameter;

	fn build(&self) -> Result<FunctionParameter> {
		Ok(FunctionParameter {
			annotations: self.annotations.clone(),
			modifiers: self.modifiers.clone(),
			name: self.name.clone(),
			parameter_type: self.parameter_type.get_or_default(Type::default),
			default_value: self.default_value.get_or_default(Expression::default),
		})
	}
}

/// `where` clause.
#[derive(Debug, Clone, Default)]
pub struct TypeConstraintsBuilder {
	constraints: TypedSequenceBuilder<TypeConstraint>,
}

impl TypeConstraintsBuilder {
	pub fn type_constraint(
		&mut self,
		name: impl Into<String>,
		init: impl FnOnce(&mut TypeConstraintBuilder) -> Result<()>,
	) -> Result<()> {
		self.constraints.push(init_builder(TypeConstraintBuilder::new(name), init)?);
		Ok(())
	}
}

impl Builder for TypeConstraintsBuilder {
	type Output = Vec<TypeConstraint>;

	fn build(&self) -> Result<Vec<TypeConstraint>> {
		self.constraints.build()
	}
}

#[derive(Debug, Clone)]
pub struct TypeConstraintBuilder {
	name: String,
	annotations: Vec<Annotation>,
	bound: Slot<Type>,
}

impl TypeConstraintBuilder {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			annotations: Vec::new(),
			bound: Slot::new("type"),
		}
	}

	pub fn annotations(&mut self, init: impl FnOnce(&mut TypedSequenceBuilder<String>)) {
		self.annotations.extend(init_typed_sequence_with(init, Annotation::from));
	}

	pub fn bound(&mut self, bound: Type) -> Result<()> {
		self.bound.set(bound)
	}
}

impl Builder for TypeConstraintBuilder {
	type Output = TypeConstraint;

	fn build(&self) -> Result<TypeConstraint> {
		Ok(TypeConstraint {
			annotations: self.annotations.clone(),
			name: self.name.clone(),
			bound: self.bound.get_or_default(Type::default),
		})
	}
}
