modifier_family! {
	pub enum InterfaceModifier {
		Public,
		Private,
		Internal,
		Sealed,
	}
}
