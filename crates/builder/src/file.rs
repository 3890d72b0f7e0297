use kotfild_model::{FileAnnotation, FileMember, Import, KotlinFile, Package, Shebang};

use crate::error::Result;
use crate::internal::{Builder, MemberCollector, TypedSequenceBuilder, init_typed_sequence_with};
use crate::scope::ScopeBuilder;

/// Top level of a Kotlin file.
#[derive(Debug, Clone)]
pub struct KotlinFileBuilder {
	name: String,
	members: MemberCollector<FileMember>,
}

impl KotlinFileBuilder {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			members: MemberCollector::new(),
		}
	}

	/// `#!path`
	pub fn shebang_line(&mut self, path: impl Into<String>) -> Result<()> {
		self.members.add(Shebang::new(path))
	}

	/// `#!/usr/bin/env kotlin`
	pub fn shebang_line_default(&mut self) -> Result<()> {
		self.members.add(Shebang::default())
	}

	/// `@file:` annotations, one per pushed item.
	pub fn file_annotations(&mut self, init: impl FnOnce(&mut TypedSequenceBuilder<String>)) -> Result<()> {
		self.members.add_all(init_typed_sequence_with(init, FileAnnotation::new))
	}

	/// `package path`
	pub fn package_header(&mut self, path: impl Into<String>) -> Result<()> {
		self.members.add(Package::new(path))
	}

	/// `import` directives, one per pushed item.
	pub fn imports(&mut self, init: impl FnOnce(&mut TypedSequenceBuilder<String>)) -> Result<()> {
		self.members.add_all(init_typed_sequence_with(init, Import::new))
	}
}

impl ScopeBuilder for KotlinFileBuilder {
	type Member = FileMember;

	fn collector(&mut self) -> &mut MemberCollector<FileMember> {
		&mut self.members
	}
}

impl Builder for KotlinFileBuilder {
	type Output = KotlinFile;

	fn build(&self) -> Result<KotlinFile> {
		Ok(KotlinFile {
			name: self.name.clone(),
			members: self.members.members(),
		})
	}
}
