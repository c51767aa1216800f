//! Builder synthesis.
//!
//! [`Synthesizer::synthesize`] turns one [`Declaration`] into a
//! [`BuilderSpec`] or a skip. It is pure: every declaration can be
//! processed independently.
//!
//! [`Declaration`]: fluentgen_ir::Declaration

mod spec;
mod synthesizer;

pub use spec::{
    AcceptedType, AccessorSpec, BuilderSpec, FactorySpec, SetterSpec, TagMethodSpec,
    TypeAlternative,
};
pub use synthesizer::{Synthesis, Synthesizer};
