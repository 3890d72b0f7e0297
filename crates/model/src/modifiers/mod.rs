//! Declaration modifiers and their canonical order.
//!
//! [`ModifierOrder`] is the single keyword table. Every modifier family maps
//! its variants onto it and compares by rank only, so a list mixing any
//! modifiers sorts into the conventional Kotlin order:
//!
//! * `public` / `protected` / `private` / `internal`
//! * `expect` / `actual`
//! * `final` / `open` / `abstract` / `override` / `sealed` / `const`
//! * `external`
//! * `lateinit`
//! * `tailrec`
//! * `vararg`
//! * `suspend`
//! * `inner`
//! * `companion`
//! * `inline` / `noinline` / `crossinline` / `value`
//! * `infix`
//! * `operator`
//! * `data`
//! * `in` / `out` / `reified` (type parameters)
//!
//! The table is maintained by hand: a new modifier kind needs a variant here
//! before any family can use it.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Declares a modifier family whose variants are named after
/// [`ModifierOrder`] entries.
macro_rules! modifier_family {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$(
				$(#[$variant_meta:meta])*
				$variant:ident,
			)+
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize, ::strum::EnumIter)]
		#[serde(rename_all = "lowercase")]
		$vis enum $name {
			$(
				$(#[$variant_meta])*
				$variant,
			)+
		}

		impl $crate::modifiers::Modifier for $name {
			fn order(self) -> $crate::modifiers::ModifierOrder {
				match self {
					$(Self::$variant => $crate::modifiers::ModifierOrder::$variant,)+
				}
			}
		}

		impl PartialOrd for $name {
			fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
				Some(self.cmp(other))
			}
		}

		impl Ord for $name {
			fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
				$crate::modifiers::compare_modifiers(*self, *other)
			}
		}

		impl ::std::fmt::Display for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				f.write_str($crate::modifiers::Modifier::keyword(*self))
			}
		}
	};
}

mod class;
mod function;
mod interface;
mod parameter;

pub use class::ClassModifier;
pub use function::FunctionModifier;
pub use interface::InterfaceModifier;
pub use parameter::{FunctionParameterModifier, TypeParameterModifier};

/// Modifier keywords in canonical order. Declaration order is the rank.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModifierOrder {
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
	Sealed,
	Const,

	External,

	Lateinit,

	Tailrec,

	Vararg,

	Suspend,

	Inner,

	Companion,

	Inline,
	Noinline,
	Crossinline,
	Value,

	Infix,

	Operator,

	Data,

	In,
	Out,
	Reified,
}

impl ModifierOrder {
	/// Kotlin keyword.
	pub fn keyword(self) -> &'static str {
		self.into()
	}

	pub fn rank(self) -> u8 {
		self as u8
	}
}

/// A modifier of some declaration family.
pub trait Modifier: Copy + Eq + 'static {
	/// Position in the canonical order.
	fn order(self) -> ModifierOrder;

	fn keyword(self) -> &'static str {
		self.order().keyword()
	}
}

/// Sorts `modifiers` into canonical order. The sort is stable.
pub fn sort_canonical<M: Modifier>(modifiers: &mut [M]) {
	modifiers.sort_by_key(|modifier| modifier.order());
}

/// Orders two modifiers of possibly different families.
pub fn compare_modifiers<A: Modifier, B: Modifier>(a: A, b: B) -> Ordering {
	a.order().cmp(&b.order())
}

#[cfg(test)]
mod tests;
