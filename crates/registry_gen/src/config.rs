/// Default marker attribute name.
pub const DEFAULT_MARKER: &str = "unique_member";

/// Default file name of the emitted registry artifact.
pub const DEFAULT_ARTIFACT: &str = "unique_member_types.rs";

/// Settings for a [`UniqueMemberGenerator`](crate::UniqueMemberGenerator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
	/// Last path segment of the marker attribute, `unique_member` matches both
	/// `#[unique_member]` and `#[kotfild_macros::unique_member]`.
	pub marker: String,
	/// File name the artifact is written under.
	pub artifact_name: String,
	/// Path prefix for discovered types as seen from the artifact.
	pub crate_root: String,
	/// Path of the runtime node type identifier.
	pub node_type_path: String,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			marker: DEFAULT_MARKER.to_string(),
			artifact_name: DEFAULT_ARTIFACT.to_string(),
			crate_root: "crate".to_string(),
			node_type_path: "crate::NodeType".to_string(),
		}
	}
}
