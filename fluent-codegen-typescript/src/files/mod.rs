//! TypeScript output units.

mod builder_ts;
mod deep_partial_ts;
mod index_ts;

pub use builder_ts::BuilderTs;
pub use deep_partial_ts::DeepPartialTs;
pub use index_ts::IndexTs;
