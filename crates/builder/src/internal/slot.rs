use crate::error::{BuildError, Result};

/// Write-once field of a builder.
///
/// A slot moves from empty to occupied exactly once and is never
/// overwritten. It carries the name of the field it backs for error
/// reporting.
#[derive(Debug, Clone)]
pub struct Slot<T> {
	field: &'static str,
	value: Option<T>,
}

impl<T> Slot<T> {
	pub const fn new(field: &'static str) -> Self {
		Self { field, value: None }
	}

	pub fn field(&self) -> &'static str {
		self.field
	}

	/// Stores `value`, failing with [`BuildError::AlreadySet`] if occupied.
	pub fn set(&mut self, value: T) -> Result<()> {
		if self.value.is_some() {
			return Err(BuildError::AlreadySet { field: self.field });
		}
		self.value = Some(value);
		Ok(())
	}

	/// The held value, or [`BuildError::NotSet`].
	pub fn value(&self) -> Result<&T> {
		self.value.as_ref().ok_or(BuildError::NotSet { field: self.field })
	}

	pub fn is_set(&self) -> bool {
		self.value.is_some()
	}
}

impl<T: Clone> Slot<T> {
	/// The held value, or whatever `default` supplies.
	///
	/// `default` is only called when the slot is empty, and its result is
	/// not stored.
	pub fn get_or_default(&self, default: impl FnOnce() -> T) -> T {
		match &self.value {
			Some(value) => value.clone(),
			None => default(),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn test_set_once() {
		let mut slot = Slot::new("name");
		assert!(!slot.is_set());
		slot.set("main").unwrap();
		assert!(slot.is_set());
		assert_eq!(slot.value(), Ok(&"main"));
	}

	/// A second `set` fails and keeps the first value.
	#[test]
	fn test_set_twice_fails() {
		let mut slot = Slot::new("name");
		slot.set(1).unwrap();
		assert_eq!(slot.set(2), Err(BuildError::AlreadySet { field: "name" }));
		assert_eq!(slot.value(), Ok(&1));
	}

	#[test]
	fn test_value_unset() {
		let slot: Slot<u8> = Slot::new("body");
		assert_eq!(slot.value(), Err(BuildError::NotSet { field: "body" }));
	}

	#[test]
	fn test_get_or_default_skips_supplier_when_set() {
		let calls = Cell::new(0);
		let mut slot = Slot::new("return_type");
		slot.set("Int".to_string()).unwrap();

		let value = slot.get_or_default(|| {
			calls.set(calls.get() + 1);
			"Unit".to_string()
		});

		assert_eq!(value, "Int");
		assert_eq!(calls.get(), 0);
	}

	/// The default is handed out but never stored.
	#[test]
	fn test_get_or_default_does_not_store() {
		let slot = Slot::new("return_type");
		assert_eq!(slot.get_or_default(|| 7), 7);
		assert!(!slot.is_set());
		assert_eq!(slot.get_or_default(|| 9), 9);
	}
}
