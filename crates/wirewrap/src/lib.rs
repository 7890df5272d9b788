//! ## Crate layout
//! - `build`: the generator — naming resolution, field plans, unit
//!   emission, output-root persistence.
//! - `core`: runtime support for generated wrappers — base wrapper,
//!   capability traits, implementation registry, wire value types.
//! - `schema`: model descriptors and the wire-type vocabulary.
//!
//! Generated units reference this facade (`::wirewrap::...`) so consuming
//! crates only carry a single dependency.

pub use wirewrap_build as build;
pub use wirewrap_core as core;
pub use wirewrap_schema as schema;

/// re-exports
///
/// generated code references these through the facade, which stops the
/// consuming crate having to name every dependency in its own Cargo.toml
pub mod __reexports {
    pub use serde;
}

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Runtime surface referenced by generated units
//

pub use wirewrap_core::types;
pub use wirewrap_core::{
    ApiUnwrapper, ApiWrapper, BaseWrapper, BoxError, UnwrapError, WireModel, WireRegistry,
    WireRequest, WrapError, WrapperBase,
};

pub use wirewrap_build::emit_wrappers;

///
/// Runtime Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        ApiUnwrapper as _, ApiWrapper as _, BaseWrapper, UnwrapError, WireModel as _,
        WireRegistry, WireRequest, WrapError, WrapperBase as _,
        types::{Date, Decimal, Money, Text, Timestamp},
    };
}

//
// Design Prelude
// For descriptor/build code (build scripts, fixtures crates).
//

/// Descriptor-facing helpers (separate from the runtime prelude).
pub mod design {
    pub mod prelude {
        pub use crate::build::{GenerateError, emit_wrapper, generate};
        pub use crate::schema::prelude::*;
    }
}
