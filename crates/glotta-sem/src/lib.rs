//! Symbol table construction: a depth-first walk of the AST that records
//! every declaration into a scope arena.

pub mod builder;
pub mod scope;

pub use builder::build;
pub use scope::{Entity, EntityKind, Scope, ScopeId, SymbolTable};
