//! Building blocks shared by every declaration builder.

mod collector;
mod sequence;
mod slot;

pub use collector::MemberCollector;
pub use sequence::{TypedSequenceBuilder, init_typed_sequence, init_typed_sequence_with};
pub use slot::Slot;

use crate::error::Result;

/// Produces an immutable value from accumulated configuration.
///
/// `build` only reads state, so calling it twice yields equal values.
pub trait Builder {
	type Output;

	fn build(&self) -> Result<Self::Output>;
}

/// Runs `init` against `builder`, then builds.
pub fn init_builder<B: Builder>(mut builder: B, init: impl FnOnce(&mut B) -> Result<()>) -> Result<B::Output> {
	init(&mut builder)?;
	builder.build()
}
