use kotfild_model::KotlinFile;

use crate::error::Result;
use crate::file::KotlinFileBuilder;
use crate::internal::init_builder;

/// Builds the Kotlin file `name`.
///
/// ```
/// use kotfild_builder::prelude::*;
///
/// let file = kotlin_file("Main.kt", |file| {
/// 	file.package_header("com.example")?;
/// 	file.empty_line()?;
/// 	file.function_expression(|function| {
/// 		function.declaration(|declaration| declaration.name("answer"))?;
/// 		function.body_expression("42")
/// 	})
/// })?;
/// assert_eq!(file.members.len(), 3);
/// # Ok::<(), BuildError>(())
/// ```
///
/// Nodes are only accepted by scopes they belong to; a statement cannot be
/// placed at the top level of a file:
///
/// ```compile_fail
/// use kotfild_builder::model::Statement;
/// use kotfild_builder::prelude::*;
///
/// let _ = kotlin_file("Main.kt", |file| file.collector().add(Statement::new("return")));
/// ```
pub fn kotlin_file(
	name: impl Into<String>,
	init: impl FnOnce(&mut KotlinFileBuilder) -> Result<()>,
) -> Result<KotlinFile> {
	init_builder(KotlinFileBuilder::new(name), init)
}

#[cfg(test)]
mod tests;
