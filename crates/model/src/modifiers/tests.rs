use pretty_assertions::assert_eq;
use rstest::rstest;
use strum::IntoEnumIterator;

use super::*;

/// Ranks follow declaration order with no gaps or ties.
#[test]
fn test_order_table_strictly_increasing() {
	let ranks: Vec<u8> = ModifierOrder::iter().map(ModifierOrder::rank).collect();
	assert!(ranks.windows(2).all(|pair| pair[0] < pair[1]));
	assert_eq!(ranks.first(), Some(&0));
}

/// Group boundaries of the canonical order.
#[rstest]
#[case(ModifierOrder::Internal, ModifierOrder::Expect)]
#[case(ModifierOrder::Actual, ModifierOrder::Final)]
#[case(ModifierOrder::Const, ModifierOrder::External)]
#[case(ModifierOrder::External, ModifierOrder::Lateinit)]
#[case(ModifierOrder::Lateinit, ModifierOrder::Tailrec)]
#[case(ModifierOrder::Tailrec, ModifierOrder::Vararg)]
#[case(ModifierOrder::Vararg, ModifierOrder::Suspend)]
#[case(ModifierOrder::Suspend, ModifierOrder::Inner)]
#[case(ModifierOrder::Inner, ModifierOrder::Companion)]
#[case(ModifierOrder::Companion, ModifierOrder::Inline)]
#[case(ModifierOrder::Value, ModifierOrder::Infix)]
#[case(ModifierOrder::Infix, ModifierOrder::Operator)]
#[case(ModifierOrder::Operator, ModifierOrder::Data)]
#[case(ModifierOrder::Data, ModifierOrder::In)]
fn test_group_boundaries(#[case] before: ModifierOrder, #[case] after: ModifierOrder) {
	assert!(before < after, "{before:?} should rank before {after:?}");
}

#[rstest]
#[case(ModifierOrder::Public, "public")]
#[case(ModifierOrder::Lateinit, "lateinit")]
#[case(ModifierOrder::Crossinline, "crossinline")]
#[case(ModifierOrder::Reified, "reified")]
fn test_keyword(#[case] order: ModifierOrder, #[case] keyword: &str) {
	assert_eq!(order.keyword(), keyword);
	assert_eq!(keyword.parse::<ModifierOrder>().ok(), Some(order));
}

/// Every family variant maps onto the table entry with the same keyword.
#[test]
fn test_family_keywords_match_table() {
	for modifier in FunctionModifier::iter() {
		assert_eq!(modifier.to_string(), modifier.order().keyword());
	}
	for modifier in ClassModifier::iter() {
		assert_eq!(modifier.to_string(), modifier.order().keyword());
	}
}

#[test]
fn test_sort_canonical() {
	let mut modifiers = vec![
		FunctionModifier::Operator,
		FunctionModifier::Suspend,
		FunctionModifier::Override,
		FunctionModifier::Inline,
		FunctionModifier::Public,
	];
	sort_canonical(&mut modifiers);
	assert_eq!(
		modifiers,
		vec![
			FunctionModifier::Public,
			FunctionModifier::Override,
			FunctionModifier::Suspend,
			FunctionModifier::Inline,
			FunctionModifier::Operator,
		]
	);
}

/// `Ord` on a family agrees with the table.
#[test]
fn test_family_ord() {
	let mut modifiers = vec![ClassModifier::Data, ClassModifier::Inner, ClassModifier::Private];
	modifiers.sort();
	assert_eq!(modifiers, vec![ClassModifier::Private, ClassModifier::Inner, ClassModifier::Data]);
}

#[test]
fn test_compare_across_families() {
	use std::cmp::Ordering;

	assert_eq!(
		compare_modifiers(FunctionParameterModifier::Vararg, FunctionModifier::Suspend),
		Ordering::Less
	);
	assert_eq!(
		compare_modifiers(TypeParameterModifier::Reified, ClassModifier::Data),
		Ordering::Greater
	);
	assert_eq!(
		compare_modifiers(InterfaceModifier::Sealed, ClassModifier::Sealed),
		Ordering::Equal
	);
}

#[test]
fn test_serializes_as_keyword() {
	let json = serde_json::to_string(&vec![FunctionModifier::Tailrec, FunctionModifier::Infix]).unwrap();
	assert_eq!(json, r#"["tailrec","infix"]"#);

	let parsed: Vec<TypeParameterModifier> = serde_json::from_str(r#"["reified","out"]"#).unwrap();
	assert_eq!(parsed, vec![TypeParameterModifier::Reified, TypeParameterModifier::Out]);
}
