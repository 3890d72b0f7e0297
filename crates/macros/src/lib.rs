//! Procedural macros for the kotfild model.
//!
//! Provides attribute macros:
//! * `#[unique_member]` - marks a model node as allowed at most once per scope

use proc_macro::TokenStream;

/// Unique member marker implementation.
mod unique;

/// Marks a model node type as unique within a scope.
///
/// The attribute has no runtime behavior and returns the item unchanged. The
/// registry generator in `kotfild-model`'s build script discovers marked types
/// and emits them into the `UNIQUE_MEMBER_TYPES` registry, which member
/// collectors consult when members are appended.
///
/// ```ignore
/// #[unique_member]
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// pub struct Package {
///     pub path: String,
/// }
/// ```
///
/// Only structs and enums may be marked; the attribute takes no arguments.
#[proc_macro_attribute]
pub fn unique_member(attr: TokenStream, item: TokenStream) -> TokenStream {
	match unique::expand(attr.into(), item.into()) {
		Ok(tokens) => tokens.into(),
		Err(err) => err.to_compile_error().into(),
	}
}
