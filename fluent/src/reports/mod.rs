//! Report data structures for the command line.
//!
//! Reports collect what happened during a run, then render to an Output target.

mod generate;
mod output;

pub use generate::GenerateReport;
pub use output::{Report, TerminalOutput};
