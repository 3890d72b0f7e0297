//! Runtime view of the unique member registry.
//!
//! The build script scans this crate for `#[unique_member]` types and emits
//! `UNIQUE_MEMBER_TYPES` into `OUT_DIR`. When it does, it also sets the
//! `kotfild_registry` cfg; without that cfg the registry is empty.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;
use tracing::warn;

use crate::NodeType;

#[cfg(kotfild_registry)]
mod generated {
	include!(concat!(env!("OUT_DIR"), "/unique_member_types.rs"));
}

#[cfg(kotfild_registry)]
const ENTRIES: &[fn() -> NodeType] = generated::UNIQUE_MEMBER_TYPES;

#[cfg(not(kotfild_registry))]
const ENTRIES: &[fn() -> NodeType] = &[];

/// Reason the build script recorded when generation failed.
const DEGRADED: Option<&str> = option_env!("KOTFILD_REGISTRY_DEGRADED");

static UNIQUE_MEMBER_TYPES: LazyLock<UniqueMemberTypes> = LazyLock::new(|| {
	if let Some(reason) = DEGRADED {
		warn!(%reason, "unique member registry generation failed; uniqueness is not enforced");
	}
	ENTRIES.iter().map(|entry| entry()).collect()
});

/// Set of node types that may appear at most once per scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueMemberTypes {
	types: FxHashSet<NodeType>,
}

impl UniqueMemberTypes {
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn contains(&self, node_type: &NodeType) -> bool {
		self.types.contains(node_type)
	}

	pub fn len(&self) -> usize {
		self.types.len()
	}

	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = NodeType> + '_ {
		self.types.iter().copied()
	}
}

impl FromIterator<NodeType> for UniqueMemberTypes {
	fn from_iter<I: IntoIterator<Item = NodeType>>(iter: I) -> Self {
		Self { types: iter.into_iter().collect() }
	}
}

/// The process-wide registry generated at build time.
pub fn unique_member_types() -> &'static UniqueMemberTypes {
	&UNIQUE_MEMBER_TYPES
}

/// Outcome of registry generation as seen by the compiled crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryStatus {
	/// The generated artifact is linked in.
	Generated,
	/// No marked types were found, so no artifact was emitted.
	Empty,
	/// Generation failed and the registry is empty.
	Degraded { reason: &'static str },
}

impl RegistryStatus {
	pub fn is_degraded(self) -> bool {
		matches!(self, Self::Degraded { .. })
	}
}

/// How the registry of this build came to be.
pub fn registry_status() -> RegistryStatus {
	status(DEGRADED, ENTRIES.len())
}

fn status(degraded: Option<&'static str>, entries: usize) -> RegistryStatus {
	match degraded {
		Some(reason) => RegistryStatus::Degraded { reason },
		None if entries == 0 => RegistryStatus::Empty,
		None => RegistryStatus::Generated,
	}
}
