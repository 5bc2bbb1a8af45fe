//! Shared foundation types for the glotta compiler: source spans, an
//! interner for identifier/keyword text, structured diagnostics, and the
//! typed-arena index pattern used by the scope tree and quadruple list.

pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use error::InternalError;
pub use index_vec::{define_idx, Idx, IndexVec};
pub use span::Span;
pub use symbol::{Interner, Symbol};

pub use rustc_hash::{FxHashMap, FxHashSet};
