use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::Item;

/// Validates the marked item and returns it untouched.
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
	if !attr.is_empty() {
		return Err(syn::Error::new_spanned(attr, "#[unique_member] takes no arguments"));
	}

	let item: Item = syn::parse2(item)?;
	match &item {
		Item::Struct(_) | Item::Enum(_) => Ok(item.into_token_stream()),
		other => Err(syn::Error::new_spanned(
			other,
			"#[unique_member] can only be applied to structs and enums",
		)),
	}
}

#[cfg(test)]
mod tests {
	use proc_macro2::TokenStream;
	use quote::quote;

	use super::expand;

	#[test]
	fn struct_passes_through_unchanged() {
		let item = quote! {
			#[derive(Debug)]
			pub struct Package {
				pub path: String,
			}
		};
		let expanded = expand(TokenStream::new(), item.clone()).unwrap();
		assert_eq!(expanded.to_string(), item.to_string());
	}

	#[test]
	fn enum_is_accepted() {
		let item = quote! { enum Marker { A, B } };
		assert!(expand(TokenStream::new(), item).is_ok());
	}

	#[test]
	fn arguments_are_rejected() {
		let err = expand(quote!(scope = file), quote! { struct Package; }).unwrap_err();
		assert!(err.to_string().contains("takes no arguments"));
	}

	#[test]
	fn functions_are_rejected() {
		let err = expand(TokenStream::new(), quote! { fn package() {} }).unwrap_err();
		assert!(err.to_string().contains("structs and enums"));
	}
}
