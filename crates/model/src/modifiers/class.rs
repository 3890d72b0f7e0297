modifier_family! {
	/// Modifiers of classes, objects and companion objects.
	pub enum ClassModifier {
		Public,
		Protected,
		Private,
		Internal,
		Final,
		Open,
		Abstract,
		Sealed,
		Inner,
		Data,
	}
}
