//! Nodes shared by every scope.

use serde::{Deserialize, Serialize};

use crate::scope::{ModelNode, ScopeSet};

/// Blank line separating declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmptyLine;

impl ModelNode for EmptyLine {
	const SCOPES: ScopeSet = ScopeSet::all();
}

/// Source comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
	pub kind: CommentKind,
	pub lines: Vec<String>,
}

impl Comment {
	pub fn new(kind: CommentKind, lines: Vec<String>) -> Self {
		Self { kind, lines }
	}

	/// Single-line comment of the given kind.
	pub fn single(kind: CommentKind, line: impl Into<String>) -> Self {
		Self::new(kind, vec![line.into()])
	}
}

impl ModelNode for Comment {
	const SCOPES: ScopeSet = ScopeSet::all();
}

/// Comment flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentKind {
	/// `// comment`
	Line,
	/// `/* comment */`
	BlockLine,
	/// Multi-line block comment.
	///
	/// ```text
	/// /*
	///   block comment
	/// */
	/// ```
	Block,
	/// `/** KDoc comment. */`
	KdocLine,
	/// Multi-line KDoc comment.
	///
	/// ```text
	/// /**
	///  * Multi line kdoc comment.
	///  */
	/// ```
	KdocBlock,
}
