use kotfild_model::{ClassMember, FunctionBody, KotlinFunction};
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use crate::error::BuildError;
use crate::scope::{CommentsAwareBuilder, CompanionAwareBuilder, DeclarationAwareBuilder, FunctionAwareBuilder};

fn build_class(init: impl FnOnce(&mut ClassBuilder) -> Result<()>) -> Result<KotlinClass> {
	init_builder(ClassBuilder::new(ClassKind::Regular, "Sample"), init)
}

#[test]
fn test_class_header() {
	let class = build_class(|class| {
		class.annotations(|a| {
			a.push("Serializable");
		});
		class.modifiers(|m| {
			m.push(ClassModifier::Open);
		});
		class.type_parameters(|params| params.type_parameter("T", |_| Ok(())))
	})
	.unwrap();

	assert_eq!(class.declaration.name, "Sample");
	assert_eq!(class.declaration.annotations, vec![Annotation::from("Serializable")]);
	assert_eq!(class.declaration.modifiers, vec![ClassModifier::Open]);
	assert_eq!(class.declaration.type_parameters.0.len(), 1);
	assert!(class.members.is_empty());
}

/// A classifier body holds at most one companion object.
#[test]
fn test_two_companions_fail() {
	let result = build_class(|class| {
		class.companion_object(|_| Ok(()))?;
		class.companion_object(|companion| companion.name("Factory"))
	});

	assert_eq!(
		result,
		Err(BuildError::DuplicateUniqueMember {
			type_name: "CompanionObject"
		})
	);
}

/// Nested classes each own a body, so each may hold a companion.
#[test]
fn test_nested_companions() {
	let class = build_class(|class| {
		class.companion_object(|_| Ok(()))?;
		class.class("Inner", |inner| inner.companion_object(|_| Ok(())))
	})
	.unwrap();

	assert_eq!(class.members.len(), 2);
	let ClassMember::Class(inner) = &class.members[1] else {
		panic!("expected nested class, got {:?}", class.members[1]);
	};
	assert!(matches!(inner.members[..], [ClassMember::CompanionObject(_)]));
}

#[test]
fn test_companion_name() {
	let class = build_class(|class| {
		class.companion_object(|companion| {
			companion.name("Factory")?;
			companion.function_expression(|function| {
				function.declaration(|declaration| declaration.name("create"))?;
				function.body_expression("Sample()")
			})
		})
	})
	.unwrap();

	let ClassMember::CompanionObject(companion) = &class.members[0] else {
		panic!("expected companion object");
	};
	assert_eq!(companion.declaration.name.as_deref(), Some("Factory"));
	assert_eq!(companion.members.len(), 1);
}

#[test]
fn test_unnamed_companion() {
	let companion = init_builder(CompanionObjectBuilder::new(), |_| Ok(())).unwrap();
	assert_eq!(companion.declaration.name, None);
}

#[rstest]
#[case::regular(ClassKind::Regular)]
#[case::data(ClassKind::Data)]
#[case::annotation(ClassKind::Annotation)]
#[case::value(ClassKind::InlineValue)]
fn test_class_kinds(#[case] kind: ClassKind) {
	let outer = build_class(|class| match kind {
		ClassKind::Regular => class.class("Nested", |_| Ok(())),
		ClassKind::Data => class.data_class("Nested", |_| Ok(())),
		ClassKind::Annotation => class.annotation_class("Nested", |_| Ok(())),
		ClassKind::InlineValue => class.value_class("Nested", |_| Ok(())),
	})
	.unwrap();

	let ClassMember::Class(nested) = &outer.members[0] else {
		panic!("expected nested class");
	};
	assert_eq!(nested.kind, kind);
	assert_eq!(nested.declaration.name, "Nested");
}

#[test]
fn test_interface_and_object_members() {
	let interface = init_builder(InterfaceBuilder::new(InterfaceKind::Fun, "Handler"), |interface| {
		interface.modifiers(|m| {
			m.push(InterfaceModifier::Internal);
		});
		interface.comment_kdoc_line("Handles events.")?;
		interface.function_block(|function| {
			function.declaration(|declaration| declaration.name("handle"))?;
			function.body_block(|_| Ok(()))
		})?;
		interface.object("Default", |object| object.empty_line())
	})
	.unwrap();

	assert_eq!(interface.kind, InterfaceKind::Fun);
	assert_eq!(interface.declaration.modifiers, vec![InterfaceModifier::Internal]);
	assert_eq!(interface.members.len(), 3);
	let ClassMember::Function(KotlinFunction { body, .. }) = &interface.members[1] else {
		panic!("expected function");
	};
	assert_eq!(body, &FunctionBody::Block(Vec::new()));
	let ClassMember::Object(object) = &interface.members[2] else {
		panic!("expected object");
	};
	assert_eq!(object.declaration.name, "Default");
	assert_eq!(object.members.len(), 1);
}

#[test]
fn test_interface_companion() {
	let interface = init_builder(InterfaceBuilder::new(InterfaceKind::Regular, "Codec"), |interface| {
		interface.companion_object(|companion| companion.name("Defaults"))
	})
	.unwrap();

	let [ClassMember::CompanionObject(companion)] = &interface.members[..] else {
		panic!("expected a single companion, got {:?}", interface.members);
	};
	assert_eq!(companion.declaration.name.as_deref(), Some("Defaults"));
}

#[test]
fn test_interface_two_companions_fail() {
	let result = init_builder(InterfaceBuilder::new(InterfaceKind::Regular, "Codec"), |interface| {
		interface.companion_object(|_| Ok(()))?;
		interface.companion_object(|_| Ok(()))
	});

	assert_eq!(
		result,
		Err(BuildError::DuplicateUniqueMember {
			type_name: "CompanionObject"
		})
	);
}
