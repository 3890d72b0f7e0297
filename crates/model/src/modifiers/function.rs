modifier_family! {
	/// Modifiers of function declarations.
	pub enum FunctionModifier {
		Public,
		Protected,
		Private,
		Internal,
		Expect,
		Actual,
		Final,
		Open,
		Abstract,
		Override,
		External,
		Tailrec,
		Suspend,
		Inline,
		Infix,
		Operator,
	}
}
