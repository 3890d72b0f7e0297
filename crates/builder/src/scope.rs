//! Member-appending capabilities shared by scope builders.
//!
//! A builder opts in by implementing [`ScopeBuilder`]. Every other trait here
//! is implemented for it automatically when its member type can hold the
//! nodes the trait appends, so a scope only gains the methods that are legal
//! in it.

use kotfild_model::{
	ClassKind, Comment, CommentKind, CommonMember, CompanionObject, EmptyLine, InterfaceKind, KotlinClass, KotlinFunction,
	KotlinInterface, KotlinObject, Member,
};

use crate::class::{ClassBuilder, CompanionObjectBuilder, InterfaceBuilder, ObjectBuilder};
use crate::error::Result;
use crate::function::{FunctionWithBodyBlockBuilder, FunctionWithBodyExpressionBuilder};
use crate::internal::{MemberCollector, TypedSequenceBuilder, init_builder, init_typed_sequence};

/// A builder owning the member list of one scope.
pub trait ScopeBuilder {
	type Member: Member;

	fn collector(&mut self) -> &mut MemberCollector<Self::Member>;
}

/// Blank lines and comments, legal in every scope.
pub trait CommentsAwareBuilder: ScopeBuilder<Member: From<CommonMember>> {
	fn empty_line(&mut self) -> Result<()> {
		self.collector().add(CommonMember::from(EmptyLine))
	}

	/// `// text`
	fn comment_line(&mut self, text: impl Into<String>) -> Result<()> {
		add_comment(self, Comment::single(CommentKind::Line, text))
	}

	/// `/* text */`
	fn comment_block_line(&mut self, text: impl Into<String>) -> Result<()> {
		add_comment(self, Comment::single(CommentKind::BlockLine, text))
	}

	/// Multi-line `/* ... */` comment, one pushed item per line.
	fn comment_block(&mut self, init: impl FnOnce(&mut TypedSequenceBuilder<String>)) -> Result<()> {
		add_comment(self, Comment::new(CommentKind::Block, init_typed_sequence(init)))
	}

	/// `/** text */`
	fn comment_kdoc_line(&mut self, text: impl Into<String>) -> Result<()> {
		add_comment(self, Comment::single(CommentKind::KdocLine, text))
	}

	/// Multi-line KDoc comment, one pushed item per line.
	fn comment_kdoc_block(&mut self, init: impl FnOnce(&mut TypedSequenceBuilder<String>)) -> Result<()> {
		add_comment(self, Comment::new(CommentKind::KdocBlock, init_typed_sequence(init)))
	}
}

impl<B: ScopeBuilder<Member: From<CommonMember>>> CommentsAwareBuilder for B {}

fn add_comment<B: ScopeBuilder<Member: From<CommonMember>> + ?Sized>(builder: &mut B, comment: Comment) -> Result<()> {
	builder.collector().add(CommonMember::from(comment))
}

/// Function declarations.
pub trait FunctionAwareBuilder: ScopeBuilder<Member: From<KotlinFunction>> {
	/// Function with a `{ ... }` body.
	fn function_block(&mut self, init: impl FnOnce(&mut FunctionWithBodyBlockBuilder) -> Result<()>) -> Result<()> {
		let function = init_builder(FunctionWithBodyBlockBuilder::new(), init)?;
		self.collector().add(function)
	}

	/// Function with an `= expression` body.
	fn function_expression(
		&mut self,
		init: impl FnOnce(&mut FunctionWithBodyExpressionBuilder) -> Result<()>,
	) -> Result<()> {
		let function = init_builder(FunctionWithBodyExpressionBuilder::new(), init)?;
		self.collector().add(function)
	}
}

impl<B: ScopeBuilder<Member: From<KotlinFunction>>> FunctionAwareBuilder for B {}

/// Classes, interfaces and objects.
pub trait DeclarationAwareBuilder:
	ScopeBuilder<Member: From<KotlinClass> + From<KotlinInterface> + From<KotlinObject>>
{
	fn class(&mut self, name: impl Into<String>, init: impl FnOnce(&mut ClassBuilder) -> Result<()>) -> Result<()> {
		add_class(self, ClassKind::Regular, name.into(), init)
	}

	/// `data class`
	fn data_class(&mut self, name: impl Into<String>, init: impl FnOnce(&mut ClassBuilder) -> Result<()>) -> Result<()> {
		add_class(self, ClassKind::Data, name.into(), init)
	}

	/// `annotation class`
	fn annotation_class(
		&mut self,
		name: impl Into<String>,
		init: impl FnOnce(&mut ClassBuilder) -> Result<()>,
	) -> Result<()> {
		add_class(self, ClassKind::Annotation, name.into(), init)
	}

	/// `@JvmInline value class`
	fn value_class(&mut self, name: impl Into<String>, init: impl FnOnce(&mut ClassBuilder) -> Result<()>) -> Result<()> {
		add_class(self, ClassKind::InlineValue, name.into(), init)
	}

	fn interface(
		&mut self,
		name: impl Into<String>,
		init: impl FnOnce(&mut InterfaceBuilder) -> Result<()>,
	) -> Result<()> {
		let interface = init_builder(InterfaceBuilder::new(InterfaceKind::Regular, name), init)?;
		self.collector().add(interface)
	}

	/// `fun interface`
	fn fun_interface(
		&mut self,
		name: impl Into<String>,
		init: impl FnOnce(&mut InterfaceBuilder) -> Result<()>,
	) -> Result<()> {
		let interface = init_builder(InterfaceBuilder::new(InterfaceKind::Fun, name), init)?;
		self.collector().add(interface)
	}

	fn object(&mut self, name: impl Into<String>, init: impl FnOnce(&mut ObjectBuilder) -> Result<()>) -> Result<()> {
		let object = init_builder(ObjectBuilder::new(name), init)?;
		self.collector().add(object)
	}
}

impl<B> DeclarationAwareBuilder for B where
	B: ScopeBuilder<Member: From<KotlinClass> + From<KotlinInterface> + From<KotlinObject>>
{
}

fn add_class<B>(
	builder: &mut B,
	kind: ClassKind,
	name: String,
	init: impl FnOnce(&mut ClassBuilder) -> Result<()>,
) -> Result<()>
where
	B: ScopeBuilder<Member: From<KotlinClass>> + ?Sized,
{
	let class = init_builder(ClassBuilder::new(kind, name), init)?;
	builder.collector().add(class)
}

/// Classifier bodies that may declare a `companion object`: classes and
/// interfaces, but not objects.
pub trait CompanionHost: ScopeBuilder {}

/// The `companion object`, at most one per body.
///
/// Objects cannot host one:
///
/// ```compile_fail
/// use kotfild_builder::prelude::*;
///
/// let _ = kotlin_file("Main.kt", |file| {
/// 	file.object("Registry", |object| object.companion_object(|_| Ok(())))
/// });
/// ```
pub trait CompanionAwareBuilder: CompanionHost + ScopeBuilder<Member: From<CompanionObject>> {
	fn companion_object(&mut self, init: impl FnOnce(&mut CompanionObjectBuilder) -> Result<()>) -> Result<()> {
		let companion = init_builder(CompanionObjectBuilder::new(), init)?;
		self.collector().add(companion)
	}
}

impl<B: CompanionHost + ScopeBuilder<Member: From<CompanionObject>>> CompanionAwareBuilder for B {}
