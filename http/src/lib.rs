//! HTTP driver for Grove graph servers.
//!
//! Composes traversals with `grove-core` and dispatches them as JSON over
//! a single synchronous POST per query.
//!
//! # Example
//! ```ignore
//! use grove_http::prelude::*;
//!
//! let client = Client::connect("http://bmeg.io")?;
//!
//! let results = client.execute(
//!     &client.query()
//!         .has("gid", "cohort:CCLE")
//!         .outgoing("hasSample")
//!         .count(),
//! )?;
//! ```

pub mod client;
pub mod decoder;
pub mod error;

pub use client::{Client, ClientConfig};
pub use error::{HttpError, HttpResult};

/// Re-export grove-core prelude for convenience.
pub mod prelude {
    pub use crate::{Client, ClientConfig, HttpError, HttpResult};
    pub use grove_core::prelude::*;
}
