use kotfild_model::{
	ClassKind, Comment, CommentKind, EmptyLine, FileAnnotation, FileMember, Import, InterfaceKind, Package, Shebang, Type,
};
use pretty_assertions::assert_eq;

use super::*;
use crate::error::BuildError;
use crate::scope::{CommentsAwareBuilder, CompanionAwareBuilder, DeclarationAwareBuilder, FunctionAwareBuilder};

#[test]
fn test_two_package_headers_fail() {
	let result = kotlin_file("Main.kt", |file| {
		file.package_header("com.example")?;
		file.package_header("com.other")
	});

	assert_eq!(result, Err(BuildError::DuplicateUniqueMember { type_name: "Package" }));
}

#[test]
fn test_package_imports_and_empty_line() {
	let file = kotlin_file("Main.kt", |file| {
		file.package_header("com.example")?;
		file.imports(|imports| {
			imports.push("kotlin.math.max").push("kotlin.math.min");
		})?;
		file.empty_line()
	})
	.unwrap();

	assert_eq!(file.name, "Main.kt");
	assert_eq!(
		file.members,
		vec![
			FileMember::Package(Package::new("com.example")),
			FileMember::Import(Import::new("kotlin.math.max")),
			FileMember::Import(Import::new("kotlin.math.min")),
			FileMember::from(EmptyLine),
		]
	);
}

#[test]
fn test_function_without_parameters_or_return_type() {
	let file = kotlin_file("Main.kt", |file| {
		file.function_block(|function| {
			function.declaration(|declaration| declaration.name("main"))?;
			function.body_block(|body| body.statement("println()"))
		})
	})
	.unwrap();

	let FileMember::Function(function) = &file.members[0] else {
		panic!("expected function, got {:?}", file.members[0]);
	};
	assert!(function.declaration.parameters.is_empty());
	assert_eq!(function.declaration.return_type, Type::Empty);
}

#[test]
fn test_shebang() {
	let file = kotlin_file("script.main.kts", |file| {
		file.shebang_line_default()?;
		file.file_annotations(|annotations| {
			annotations.push("JvmName(\"Script\")");
		})
	})
	.unwrap();

	assert_eq!(
		file.members,
		vec![
			FileMember::Shebang(Shebang::new("/usr/bin/env kotlin")),
			FileMember::FileAnnotation(FileAnnotation::new("JvmName(\"Script\")")),
		]
	);
}

#[test]
fn test_two_shebangs_fail() {
	let result = kotlin_file("script.main.kts", |file| {
		file.shebang_line("/usr/bin/kotlin")?;
		file.shebang_line_default()
	});
	assert_eq!(result, Err(BuildError::DuplicateUniqueMember { type_name: "Shebang" }));
}

#[test]
fn test_comments() {
	let file = kotlin_file("Main.kt", |file| {
		file.comment_line("line")?;
		file.comment_block_line("block line")?;
		file.comment_block(|lines| {
			lines.push("multi").push("line");
		})?;
		file.comment_kdoc_line("kdoc")?;
		file.comment_kdoc_block(|lines| {
			lines.push("kdoc").push("block");
		})
	})
	.unwrap();

	assert_eq!(
		file.members,
		vec![
			FileMember::from(Comment::single(CommentKind::Line, "line")),
			FileMember::from(Comment::single(CommentKind::BlockLine, "block line")),
			FileMember::from(Comment::new(CommentKind::Block, vec!["multi".into(), "line".into()])),
			FileMember::from(Comment::single(CommentKind::KdocLine, "kdoc")),
			FileMember::from(Comment::new(CommentKind::KdocBlock, vec!["kdoc".into(), "block".into()])),
		]
	);
}

/// A failing nested builder aborts the whole file.
#[test]
fn test_nested_failure_propagates() {
	let result = kotlin_file("Main.kt", |file| {
		file.class("Outer", |class| {
			class.companion_object(|_| Ok(()))?;
			class.companion_object(|_| Ok(()))
		})
	});
	assert_eq!(
		result,
		Err(BuildError::DuplicateUniqueMember {
			type_name: "CompanionObject"
		})
	);
}

#[test]
fn test_declarations() {
	let file = kotlin_file("Model.kt", |file| {
		file.package_header("com.example.model")?;
		file.data_class("Point", |_| Ok(()))?;
		file.fun_interface("Listener", |_| Ok(()))?;
		file.interface("Shape", |_| Ok(()))?;
		file.object("Registry", |_| Ok(()))
	})
	.unwrap();

	assert_eq!(file.members.len(), 5);
	assert!(matches!(&file.members[1], FileMember::Class(class) if class.kind == ClassKind::Data));
	assert!(matches!(&file.members[2], FileMember::Interface(interface) if interface.kind == InterfaceKind::Fun));
	assert!(matches!(&file.members[3], FileMember::Interface(interface) if interface.kind == InterfaceKind::Regular));
	assert!(matches!(&file.members[4], FileMember::Object(_)));
}

/// A rejected member fails the whole file, not only the offending call.
#[test]
fn test_failed_build_returns_no_value() {
	let result = kotlin_file("Main.kt", |file| {
		file.package_header("a")?;
		file.imports(|imports| {
			imports.push("x.Y");
		})?;
		file.package_header("b")
	});
	assert!(result.is_err());
}
