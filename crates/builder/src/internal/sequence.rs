use super::Builder;
use crate::error::Result;

/// Accumulates an ordered list of plain values.
#[derive(Debug, Clone)]
pub struct TypedSequenceBuilder<T> {
	items: Vec<T>,
}

impl<T> TypedSequenceBuilder<T> {
	pub fn new() -> Self {
		Self { items: Vec::new() }
	}

	pub fn push(&mut self, item: impl Into<T>) -> &mut Self {
		self.items.push(item.into());
		self
	}

	pub fn extend<I>(&mut self, items: I) -> &mut Self
	where
		I: IntoIterator,
		I::Item: Into<T>,
	{
		self.items.extend(items.into_iter().map(Into::into));
		self
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn into_items(self) -> Vec<T> {
		self.items
	}
}

impl<T> Default for TypedSequenceBuilder<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Clone> Builder for TypedSequenceBuilder<T> {
	type Output = Vec<T>;

	fn build(&self) -> Result<Vec<T>> {
		Ok(self.items.clone())
	}
}

/// Collects the items pushed by `init`.
pub fn init_typed_sequence<T>(init: impl FnOnce(&mut TypedSequenceBuilder<T>)) -> Vec<T> {
	let mut builder = TypedSequenceBuilder::new();
	init(&mut builder);
	builder.into_items()
}

/// Collects the items pushed by `init` and maps each through `converter`.
pub fn init_typed_sequence_with<S, T>(
	init: impl FnOnce(&mut TypedSequenceBuilder<S>),
	converter: impl FnMut(S) -> T,
) -> Vec<T> {
	init_typed_sequence(init).into_iter().map(converter).collect()
}
