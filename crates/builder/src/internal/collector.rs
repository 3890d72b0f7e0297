use kotfild_model::{Member, NodeType, UniqueMemberTypes, unique_member_types};
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::error::{BuildError, Result};

/// Ordered, append-only member list of one scope.
///
/// Types listed in the registry may be appended at most once; any other type
/// may repeat freely.
#[derive(Debug, Clone)]
pub struct MemberCollector<M: Member> {
	registry: &'static UniqueMemberTypes,
	members: Vec<M>,
	seen: FxHashSet<NodeType>,
}

impl<M: Member> MemberCollector<M> {
	/// Collector checked against the build-time registry.
	pub fn new() -> Self {
		Self::with_registry(unique_member_types())
	}

	pub fn with_registry(registry: &'static UniqueMemberTypes) -> Self {
		Self {
			registry,
			members: Vec::new(),
			seen: FxHashSet::default(),
		}
	}

	/// Appends `node`.
	///
	/// Fails with [`BuildError::DuplicateUniqueMember`] if its type is unique
	/// and already present.
	pub fn add(&mut self, node: impl Into<M>) -> Result<()> {
		let member = node.into();
		let node_type = member.node_type();

		if self.registry.contains(&node_type) && !self.seen.insert(node_type) {
			debug!(node = %node_type, scope = ?M::SCOPE, "rejected duplicate unique member");
			return Err(BuildError::DuplicateUniqueMember {
				type_name: node_type.name(),
			});
		}

		trace!(node = %node_type, index = self.members.len(), "member appended");
		self.members.push(member);
		Ok(())
	}

	/// Appends `nodes` in order.
	///
	/// Stops at the first failure. Nodes appended before it stay.
	pub fn add_all<I>(&mut self, nodes: I) -> Result<()>
	where
		I: IntoIterator,
		I::Item: Into<M>,
	{
		nodes.into_iter().try_for_each(|node| self.add(node))
	}

	/// Copy of the members appended so far.
	pub fn members(&self) -> Vec<M> {
		self.members.clone()
	}

	pub fn len(&self) -> usize {
		self.members.len()
	}

	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}
}

impl<M: Member> Default for MemberCollector<M> {
	fn default() -> Self {
		Self::new()
	}
}
