modifier_family! {
	/// Modifiers of value parameters.
	pub enum FunctionParameterModifier {
		Vararg,
		/// Only meaningful on parameters of function type in an `inline` function.
		Noinline,
		Crossinline,
	}
}

modifier_family! {
	/// Modifiers of type parameters.
	pub enum TypeParameterModifier {
		In,
		Out,
		/// Requires an `inline` function.
		Reified,
	}
}
