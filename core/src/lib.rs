//! Type-safe graph traversal builder with AST-native design.
//!
//! Build traversals as typed steps, not strings. Zero malformed payloads.
//!
//! ```
//! use grove_core::prelude::*;
//!
//! let query = Query::new()
//!     .has("symbol", "BRAF")
//!     .incoming("variantInGene")
//!     .outgoing("variantInBiosample")
//!     .mark("sample")
//!     .count();
//! let wire = query.render().unwrap();
//! assert!(wire.starts_with('['));
//! ```

pub mod ast;
pub mod error;
pub mod wire;

/// Ergonomic alias for the primary builder type.
pub use ast::Query;

pub mod prelude {
    pub use crate::Query;
    pub use crate::ast::builders::*;
    pub use crate::ast::*;
    pub use crate::error::*;
    pub use crate::wire::ToWire;
}
