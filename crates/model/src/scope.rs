//! Node taxonomy and scope capabilities.
//!
//! Every concrete node is a struct implementing [`ModelNode`]. Its
//! [`ModelNode::SCOPES`] mirror the `From` conversions into the scope enums
//! ([`FileMember`], [`ClassMember`], [`FunctionMember`]): a node converts into
//! exactly the scopes it may legally appear in, so placing it anywhere else
//! fails to type-check.

use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::class::{CompanionObject, KotlinClass, KotlinInterface, KotlinObject};
use crate::common::{Comment, EmptyLine};
use crate::file::{FileAnnotation, Import, Package, Shebang};
use crate::function::{KotlinFunction, Statement};

bitflags::bitflags! {
	/// Set of scopes a node may be attached to.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
	pub struct ScopeSet: u8 {
		/// Top level of a file.
		const FILE = 1 << 0;
		/// Body of a class, interface or object.
		const CLASS = 1 << 1;
		/// Body of a function.
		const FUNCTION = 1 << 2;
	}
}

/// Opaque runtime identifier of a concrete node type.
///
/// Equality and hashing use the [`TypeId`] only; the name is kept for
/// diagnostics.
#[derive(Clone, Copy)]
pub struct NodeType {
	id: TypeId,
	name: &'static str,
}

impl NodeType {
	pub fn of<T: ?Sized + 'static>() -> Self {
		let full = type_name::<T>();
		let name = full.rsplit("::").next().unwrap_or(full);
		Self { id: TypeId::of::<T>(), name }
	}

	pub fn id(&self) -> TypeId {
		self.id
	}

	/// Unqualified type name.
	pub fn name(&self) -> &'static str {
		self.name
	}
}

impl PartialEq for NodeType {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for NodeType {}

impl Hash for NodeType {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl fmt::Debug for NodeType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "NodeType({})", self.name)
	}
}

impl fmt::Display for NodeType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

/// A concrete model node.
pub trait ModelNode: 'static {
	/// Scopes the node may appear in.
	const SCOPES: ScopeSet;

	fn node_type(&self) -> NodeType
	where
		Self: Sized,
	{
		NodeType::of::<Self>()
	}
}

/// Member list element of one scope kind.
pub trait Member: Clone + fmt::Debug + 'static {
	/// The scope this member list serves.
	const SCOPE: ScopeSet;

	/// Concrete type of the wrapped node.
	fn node_type(&self) -> NodeType;
}

/// Nodes legal in every scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommonMember {
	EmptyLine(EmptyLine),
	Comment(Comment),
}

/// Nodes legal at the top level of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileMember {
	Shebang(Shebang),
	FileAnnotation(FileAnnotation),
	Package(Package),
	Import(Import),
	Function(KotlinFunction),
	Class(KotlinClass),
	Interface(KotlinInterface),
	Object(KotlinObject),
	Common(CommonMember),
}

/// Nodes legal in the body of a class, interface or object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassMember {
	Function(KotlinFunction),
	Class(KotlinClass),
	Interface(KotlinInterface),
	Object(KotlinObject),
	CompanionObject(CompanionObject),
	Common(CommonMember),
}

/// Nodes legal in a function body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionMember {
	Statement(Statement),
	Common(CommonMember),
}

impl CommonMember {
	pub fn node_type(&self) -> NodeType {
		match self {
			Self::EmptyLine(node) => node.node_type(),
			Self::Comment(node) => node.node_type(),
		}
	}
}

impl Member for FileMember {
	const SCOPE: ScopeSet = ScopeSet::FILE;

	fn node_type(&self) -> NodeType {
		match self {
			Self::Shebang(node) => node.node_type(),
			Self::FileAnnotation(node) => node.node_type(),
			Self::Package(node) => node.node_type(),
			Self::Import(node) => node.node_type(),
			Self::Function(node) => node.node_type(),
			Self::Class(node) => node.node_type(),
			Self::Interface(node) => node.node_type(),
			Self::Object(node) => node.node_type(),
			Self::Common(node) => node.node_type(),
		}
	}
}

impl Member for ClassMember {
	const SCOPE: ScopeSet = ScopeSet::CLASS;

	fn node_type(&self) -> NodeType {
		match self {
			Self::Function(node) => node.node_type(),
			Self::Class(node) => node.node_type(),
			Self::Interface(node) => node.node_type(),
			Self::Object(node) => node.node_type(),
			Self::CompanionObject(node) => node.node_type(),
			Self::Common(node) => node.node_type(),
		}
	}
}

impl Member for FunctionMember {
	const SCOPE: ScopeSet = ScopeSet::FUNCTION;

	fn node_type(&self) -> NodeType {
		match self {
			Self::Statement(node) => node.node_type(),
			Self::Common(node) => node.node_type(),
		}
	}
}

/// Wires a node into the scopes it may appear in.
macro_rules! scope_member {
	($node:ident => $($scope:ident :: $variant:ident),+ $(,)?) => {
		$(
			impl From<$node> for $scope {
				fn from(node: $node) -> Self {
					$scope::$variant(node)
				}
			}
		)+
	};
}

scope_member!(EmptyLine => CommonMember::EmptyLine);
scope_member!(Comment => CommonMember::Comment);
scope_member!(CommonMember => FileMember::Common, ClassMember::Common, FunctionMember::Common);
scope_member!(Shebang => FileMember::Shebang);
scope_member!(FileAnnotation => FileMember::FileAnnotation);
scope_member!(Package => FileMember::Package);
scope_member!(Import => FileMember::Import);
scope_member!(KotlinFunction => FileMember::Function, ClassMember::Function);
scope_member!(KotlinClass => FileMember::Class, ClassMember::Class);
scope_member!(KotlinInterface => FileMember::Interface, ClassMember::Interface);
scope_member!(KotlinObject => FileMember::Object, ClassMember::Object);
scope_member!(CompanionObject => ClassMember::CompanionObject);
scope_member!(Statement => FunctionMember::Statement);

/// Common nodes convert straight into every scope.
macro_rules! common_member {
	($($node:ident),+) => {
		$(
			impl From<$node> for FileMember {
				fn from(node: $node) -> Self {
					Self::Common(node.into())
				}
			}

			impl From<$node> for ClassMember {
				fn from(node: $node) -> Self {
					Self::Common(node.into())
				}
			}

			impl From<$node> for FunctionMember {
				fn from(node: $node) -> Self {
					Self::Common(node.into())
				}
			}
		)+
	};
}

common_member!(EmptyLine, Comment);
