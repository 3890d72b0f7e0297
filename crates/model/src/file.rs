//! File-level nodes.

use kotfild_macros::unique_member;
use serde::{Deserialize, Serialize};

use crate::scope::{FileMember, ModelNode, ScopeSet};

/// A Kotlin source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KotlinFile {
	pub name: String,
	pub members: Vec<FileMember>,
}

/// Interpreter line, `#!/usr/bin/env kotlin`.
#[unique_member]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shebang {
	pub path: String,
}

impl Shebang {
	pub const DEFAULT_SHEBANG_LINE: &'static str = "/usr/bin/env kotlin";

	pub fn new(path: impl Into<String>) -> Self {
		Self { path: path.into() }
	}
}

impl Default for Shebang {
	fn default() -> Self {
		Self::new(Self::DEFAULT_SHEBANG_LINE)
	}
}

impl ModelNode for Shebang {
	const SCOPES: ScopeSet = ScopeSet::FILE;
}

/// File-targeted annotation, `@file:JvmName("Foo")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAnnotation {
	pub annotation: String,
}

impl FileAnnotation {
	pub fn new(annotation: impl Into<String>) -> Self {
		Self { annotation: annotation.into() }
	}
}

impl ModelNode for FileAnnotation {
	const SCOPES: ScopeSet = ScopeSet::FILE;
}

/// Package header, `package com.example`.
#[unique_member]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
	pub path: String,
}

impl Package {
	pub fn new(path: impl Into<String>) -> Self {
		Self { path: path.into() }
	}
}

impl ModelNode for Package {
	const SCOPES: ScopeSet = ScopeSet::FILE;
}

/// Import directive, `import com.example.Foo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
	pub path: String,
}

impl Import {
	pub fn new(path: impl Into<String>) -> Self {
		Self { path: path.into() }
	}
}

impl ModelNode for Import {
	const SCOPES: ScopeSet = ScopeSet::FILE;
}
