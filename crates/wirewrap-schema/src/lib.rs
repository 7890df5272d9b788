//! Model descriptors consumed by the wrapper generator.
//!
//! A [`node::ModelClass`] describes one domain model type: its identity,
//! its direct superclass, the public interfaces it implements, the wire
//! directive attached to it, and its declared fields. Descriptors are
//! read-only inputs; the generator never mutates them.

pub mod error;
pub mod node;
pub mod types;

/// Maximum length for model type identifiers.
pub const MAX_MODEL_NAME_LEN: usize = 64;

/// Maximum length for field identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::*,
        types::{BasicType, Cardinality},
    };
    pub use serde::{Deserialize, Serialize};
}
