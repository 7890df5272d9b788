//! Runtime support for generated wire wrappers.
//!
//! Generated units depend on this crate for the base wrapper, the two
//! capability contracts ([`ApiWrapper`]/[`ApiUnwrapper`]), the
//! implementation-type registry, and the wire value types. Nothing here
//! performs generation; see `wirewrap-build` for that.

pub mod error;
pub mod registry;
pub mod request;
pub mod types;
pub mod wrapper;

pub use error::{BoxError, UnwrapError, WrapError};
pub use registry::WireRegistry;
pub use request::WireRequest;
pub use wrapper::{ApiUnwrapper, ApiWrapper, BaseWrapper, WireModel, WrapperBase};
