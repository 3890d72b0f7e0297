//! Function builders.

use kotfild_model::modifiers::FunctionModifier;
use kotfild_model::{
	Annotation, FunctionBody, FunctionDeclaration, FunctionMember, FunctionParameter, FunctionParameters, KotlinFunction,
	ReceiverType, Statement, Type, TypeConstraint, TypeConstraints, TypeParameter, TypeParameters,
};

use crate::error::Result;
use crate::internal::{
	Builder, MemberCollector, Slot, TypedSequenceBuilder, init_builder, init_typed_sequence, init_typed_sequence_with,
};
use crate::scope::ScopeBuilder;
use crate::types::{FunctionParametersBuilder, ReceiverTypeBuilder, TypeConstraintsBuilder, TypeParametersBuilder};

/// State shared by both function forms.
#[derive(Debug, Clone)]
struct FunctionParts {
	declaration: Slot<FunctionDeclaration>,
	body: Slot<FunctionBody>,
}

impl FunctionParts {
	fn new() -> Self {
		Self {
			declaration: Slot::new("declaration"),
			body: Slot::new("body"),
		}
	}

	fn declaration(&mut self, init: impl FnOnce(&mut FunctionDeclarationBuilder) -> Result<()>) -> Result<()> {
		let declaration = init_builder(FunctionDeclarationBuilder::new(), init)?;
		self.declaration.set(declaration)
	}

	fn build(&self) -> Result<KotlinFunction> {
		Ok(KotlinFunction {
			declaration: self.declaration.get_or_default(FunctionDeclaration::default),
			body: self.body.value()?.clone(),
		})
	}
}

/// Function with a `{ ... }` body.
#[derive(Debug, Clone)]
pub struct FunctionWithBodyBlockBuilder {
	parts: FunctionParts,
}

impl FunctionWithBodyBlockBuilder {
	pub fn new() -> Self {
		Self { parts: FunctionParts::new() }
	}

	pub fn declaration(&mut self, init: impl FnOnce(&mut FunctionDeclarationBuilder) -> Result<()>) -> Result<()> {
		self.parts.declaration(init)
	}

	pub fn body_block(&mut self, init: impl FnOnce(&mut FunctionBodyBlockBuilder) -> Result<()>) -> Result<()> {
		let members = init_builder(FunctionBodyBlockBuilder::new(), init)?;
		self.parts.body.set(FunctionBody::Block(members))
	}
}

impl Default for FunctionWithBodyBlockBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl Builder for FunctionWithBodyBlockBuilder {
	type Output = KotlinFunction;

	fn build(&self) -> Result<KotlinFunction> {
		self.parts.build()
	}
}

/// Function with an `= expression` body.
#[derive(Debug, Clone)]
pub struct FunctionWithBodyExpressionBuilder {
	parts: FunctionParts,
}

impl FunctionWithBodyExpressionBuilder {
	pub fn new() -> Self {
		Self { parts: FunctionParts::new() }
	}

	pub fn declaration(&mut self, init: impl FnOnce(&mut FunctionDeclarationBuilder) -> Result<()>) -> Result<()> {
		self.parts.declaration(init)
	}

	pub fn body_expression(&mut self, expression: impl Into<String>) -> Result<()> {
		self.parts.body.set(FunctionBody::Expression(expression.into()))
	}
}

impl Default for FunctionWithBodyExpressionBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl Builder for FunctionWithBodyExpressionBuilder {
	type Output = KotlinFunction;

	fn build(&self) -> Result<KotlinFunction> {
		self.parts.build()
	}
}

/// Function header.
///
/// List-valued parts accumulate across calls; the others may be set once.
/// Nothing is required: an unconfigured header builds into
/// [`FunctionDeclaration::default`].
#[derive(Debug, Clone)]
pub struct FunctionDeclarationBuilder {
	annotations: Vec<Annotation>,
	modifiers: Vec<FunctionModifier>,
	type_parameters: Vec<TypeParameter>,
	receiver_type: Slot<ReceiverType>,
	name: Slot<String>,
	parameters: Vec<FunctionParameter>,
	return_type: Slot<Type>,
	type_constraints: Vec<TypeConstraint>,
}

impl FunctionDeclarationBuilder {
	pub fn new() -> Self {
		Self {
			annotations: Vec::new(),
			modifiers: Vec::new(),
			type_parameters: Vec::new(),
			receiver_type: Slot::new("receiver_type"),
			name: Slot::new("name"),
			parameters: Vec::new(),
			return_type: Slot::new("return_type"),
			type_constraints: Vec::new(),
		}
	}

	pub fn annotations(&mut self, init: impl FnOnce(&mut TypedSequenceBuilder<String>)) {
		self.annotations.extend(init_typed_sequence_with(init, Annotation::from));
	}

	pub fn modifiers(&mut self, init: impl FnOnce(&mut TypedSequenceBuilder<FunctionModifier>)) {
		self.modifiers.extend(init_typed_sequence(init));
	}

	pub fn type_parameters(&mut self, init: impl FnOnce(&mut TypeParametersBuilder) -> Result<()>) -> Result<()> {
		self.type_parameters.extend(init_builder(TypeParametersBuilder::default(), init)?);
		Ok(())
	}

	pub fn receiver_type(&mut self, init: impl FnOnce(&mut ReceiverTypeBuilder) -> Result<()>) -> Result<()> {
		let receiver = init_builder(ReceiverTypeBuilder::new(), init)?;
		self.receiver_type.set(receiver)
	}

	pub fn name(&mut self, name: impl Into<String>) -> Result<()> {
		self.name.set(name.into())
	}

	pub fn parameters(&mut self, init: impl FnOnce(&mut FunctionParametersBuilder) -> Result<()>) -> Result<()> {
		self.parameters.extend(init_builder(FunctionParametersBuilder::default(), init)?);
		Ok(())
	}

	pub fn return_type(&mut self, return_type: Type) -> Result<()> {
		self.return_type.set(return_type)
	}

	pub fn type_constraints(&mut self, init: impl FnOnce(&mut TypeConstraintsBuilder) -> Result<()>) -> Result<()> {
		self.type_constraints.extend(init_builder(TypeConstraintsBuilder::default(), init)?);
		Ok(())
	}
}

impl Default for FunctionDeclarationBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl Builder for FunctionDeclarationBuilder {
	type Output = FunctionDeclaration;

	fn build(&self) -> Result<FunctionDeclaration> {
		Ok(FunctionDeclaration {
			annotations: self.annotations.clone(),
			modifiers: self.modifiers.clone(),
			type_parameters: TypeParameters(self.type_parameters.clone()),
			receiver_type: self.receiver_type.get_or_default(ReceiverType::default),
			name: self.name.get_or_default(String::new),
			parameters: FunctionParameters(self.parameters.clone()),
			return_type: self.return_type.get_or_default(Type::default),
			type_constraints: TypeConstraints(self.type_constraints.clone()),
		})
	}
}

/// Statements and comments of a `{ ... }` body.
#[derive(Debug, Clone)]
pub struct FunctionBodyBlockBuilder {
	members: MemberCollector<FunctionMember>,
}

impl FunctionBodyBlockBuilder {
	pub fn new() -> Self {
		Self {
			members: MemberCollector::new(),
		}
	}

	pub fn statement(&mut self, code: impl Into<String>) -> Result<()> {
		self.members.add(Statement::new(code))
	}
}

impl Default for FunctionBodyBlockBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl ScopeBuilder for FunctionBodyBlockBuilder {
	type Member = FunctionMember;

	fn collector(&mut self) -> &mut MemberCollector<FunctionMember> {
		&mut self.members
	}
}

impl Builder for FunctionBodyBlockBuilder {
	type Output = Vec<FunctionMember>;

	fn build(&self) -> Result<Vec<FunctionMember>> {
		Ok(self.members.members())
	}
}
