//! Classifier builders. Their bodies are class scopes.

use kotfild_model::modifiers::{ClassModifier, InterfaceModifier};
use kotfild_model::{
	Annotation, ClassDeclaration, ClassKind, ClassMember, CompanionDeclaration, CompanionObject, InterfaceDeclaration,
	InterfaceKind, KotlinClass, KotlinInterface, KotlinObject, ObjectDeclaration, TypeParameter, TypeParameters,
};

use crate::error::Result;
use crate::internal::{
	Builder, MemberCollector, Slot, TypedSequenceBuilder, init_builder, init_typed_sequence, init_typed_sequence_with,
};
use crate::scope::{CompanionHost, ScopeBuilder};
use crate::types::TypeParametersBuilder;

/// Class of any [`ClassKind`].
#[derive(Debug, Clone)]
pub struct ClassBuilder {
	kind: ClassKind,
	name: String,
	annotations: Vec<Annotation>,
	modifiers: Vec<ClassModifier>,
	type_parameters: Vec<TypeParameter>,
	members: MemberCollector<ClassMember>,
}

impl ClassBuilder {
	pub fn new(kind: ClassKind, name: impl Into<String>) -> Self {
		Self {
			kind,
			name: name.into(),
			annotations: Vec::new(),
			modifiers: Vec::new(),
			type_parameters: Vec::new(),
			members: MemberCollector::new(),
		}
	}

	pub fn annotations(&mut self, init: impl FnOnce(&mut TypedSequenceBuilder<String>)) {
		self.annotations.extend(init_typed_sequence_with(init, Annotation::from));
	}

	pub fn modifiers(&mut self, init: impl FnOnce(&mut TypedSequenceBuilder<ClassModifier>)) {
		self.modifiers.extend(init_typed_sequence(init));
	}

	pub fn type_parameters(&mut self, init: impl FnOnce(&mut TypeParametersBuilder) -> Result<()>) -> Result<()> {
		self.type_parameters.extend(init_builder(TypeParametersBuilder::default(), init)?);
		Ok(())
	}
}

impl ScopeBuilder for ClassBuilder {
	type Member = ClassMember;

	fn collector(&mut self) -> &mut MemberCollector<ClassMember> {
		&mut self.members
	}
}

impl CompanionHost for ClassBuilder {}

impl Builder for ClassBuilder {
	type Output = KotlinClass;

	fn build(&self) -> Result<KotlinClass> {
		Ok(KotlinClass {
			kind: self.kind,
			declaration: ClassDeclaration {
				annotations: self.annotations.clone(),
				modifiers: self.modifiers.clone(),
				name: self.name.clone(),
				type_parameters: TypeParameters(self.type_parameters.clone()),
			},
			members: self.members.members(),
		})
	}
}

#[derive(Debug, Clone)]
pub struct InterfaceBuilder {
	kind: InterfaceKind,
	name: String,
	annotations: Vec<Annotation>,
	modifiers: Vec<InterfaceModifier>,
	type_parameters: Vec<TypeParameter>,
	members: MemberCollector<ClassMember>,
}

impl InterfaceBuilder {
	pub fn new(kind: InterfaceKind, name: impl Into<String>) -> Self {
		Self {
			kind,
			name: name.into(),
			annotations: Vec::new(),
			modifiers: Vec::new(),
			type_parameters: Vec::new(),
			members: MemberCollector::new(),
		}
	}

	pub fn annotations(&mut self, init: impl FnOnce(&mut TypedSequenceBuilder<String>)) {
		self.annotations.extend(init_typed_sequence_with(init, Annotation::from));
	}

	pub fn modifiers(&mut self, init: impl FnOnce(&mut TypedSequenceBuilder<InterfaceModifier>)) {
		self.modifiers.extend(init_typed_sequence(init));
	}

	pub fn type_parameters(&mut self, init: impl FnOnce(&mut TypeParametersBuilder) -> Result<()>) -> Result<()> {
		self.type_parameters.extend(init_builder(TypeParametersBuilder::default(), init)?);
		Ok(())
	}
}

impl ScopeBuilder for InterfaceBuilder {
	type Member = ClassMember;

	fn collector(&mut self) -> &mut MemberCollector<ClassMember> {
		&mut self.members
	}
}

impl CompanionHost for InterfaceBuilder {}

impl Builder for InterfaceBuilder {
	type Output = KotlinInterface;

	fn build(&self) -> Result<KotlinInterface> {
		Ok(KotlinInterface {
			kind: self.kind,
			declaration: InterfaceDeclaration {
				annotations: self.annotations.clone(),
				modifiers: self.modifiers.clone(),
				name: self.name.clone(),
				type_parameters: TypeParameters(self.type_parameters.clone()),
			},
			members: self.members.members(),
		})
	}
}

/// `object Name`
#[derive(Debug, Clone)]
pub struct ObjectBuilder {
	name: String,
	annotations: Vec<Annotation>,
	modifiers: Vec<ClassModifier>,
	members: MemberCollector<ClassMember>,
}

impl ObjectBuilder {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			annotations: Vec::new(),
			modifiers: Vec::new(),
			members: MemberCollector::new(),
		}
	}

	pub fn annotations(&mut self, init: impl FnOnce(&mut TypedSequenceBuilder<String>)) {
		self.annotations.extend(init_typed_sequence_with(init, Annotation::from));
	}

	pub fn modifiers(&mut self, init: impl FnOnce(&mut TypedSequenceBuilder<ClassModifier>)) {
		self.modifiers.extend(init_typed_sequence(init));
	}
}

impl ScopeBuilder for ObjectBuilder {
	type Member = ClassMember;

	fn collector(&mut self) -> &mut MemberCollector<ClassMember> {
		&mut self.members
	}
}

impl Builder for ObjectBuilder {
	type Output = KotlinObject;

	fn build(&self) -> Result<KotlinObject> {
		Ok(KotlinObject {
			declaration: ObjectDeclaration {
				annotations: self.annotations.clone(),
				modifiers: self.modifiers.clone(),
				name: self.name.clone(),
			},
			members: self.members.members(),
		})
	}
}

/// `companion object`, optionally named.
#[derive(Debug, Clone)]
pub struct CompanionObjectBuilder {
	name: Slot<String>,
	annotations: Vec<Annotation>,
	modifiers: Vec<ClassModifier>,
	members: MemberCollector<ClassMember>,
}

impl CompanionObjectBuilder {
	pub fn new() -> Self {
		Self {
			name: Slot::new("name"),
			annotations: Vec::new(),
			modifiers: Vec::new(),
			members: MemberCollector::new(),
		}
	}

	pub fn name(&mut self, name: impl Into<String>) -> Result<()> {
		self.name.set(name.into())
	}

	pub fn annotations(&mut self, init: impl FnOnce(&mut TypedSequenceBuilder<String>)) {
		self.annotations.extend(init_typed_sequence_with(init, Annotation::from));
	}

	pub fn modifiers(&mut self, init: impl FnOnce(&mut TypedSequenceBuilder<ClassModifier>)) {
		self.modifiers.extend(init_typed_sequence(init));
	}
}

impl Default for CompanionObjectBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl ScopeBuilder for CompanionObjectBuilder {
	type Member = ClassMember;

	fn collector(&mut self) -> &mut MemberCollector<ClassMember> {
		&mut self.members
	}
}

impl Builder for CompanionObjectBuilder {
	type Output = CompanionObject;

	fn build(&self) -> Result<CompanionObject> {
		Ok(CompanionObject {
			declaration: CompanionDeclaration {
				annotations: self.annotations.clone(),
				modifiers: self.modifiers.clone(),
				name: self.name.value().ok().cloned(),
			},
			members: self.members.members(),
		})
	}
}

#[cfg(test)]
mod tests;
