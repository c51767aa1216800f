// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Reads TypeScript declaration files and extracts the structural shapes
//! the builder generator works from.

mod config;
mod error;
mod file;
mod lexer;
mod parser;
mod resolve;
mod syntax;

pub use config::discover_config;
pub use error::{Error, Result, SourceContext};
pub use file::SourceFile;
pub use parser::parse;
pub use resolve::Resolver;
pub use syntax::{AliasDecl, InterfaceDecl, Keyword, Member, Module, TypeExpr};
