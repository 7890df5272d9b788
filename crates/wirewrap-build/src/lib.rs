//! Wrapper generation: descriptor in, compilation unit out.
//!
//! [`generate`] renders a model descriptor to source text; [`emit_wrapper`]
//! additionally persists the unit under an output root following the
//! model's module path. Each invocation is an independent, side-effect-free
//! computation over one descriptor — the only external effect is the final
//! write. Descriptors for distinct models can therefore be processed in
//! parallel with no coordination; the naming convention keeps their output
//! paths disjoint.

pub mod emit;
pub mod naming;
pub mod plan;
pub mod unit;

mod macros;

pub use plan::{FieldCopy, FieldPlan, SuperWrapper, WrapperPlan};
pub use unit::GeneratedUnit;

use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;
use wirewrap_schema::{error::ErrorTree, node::ModelClass};

///
/// GenerateError
///
/// Generation-time taxonomy. Every variant is fatal for the one model
/// being processed and guarantees no output file was produced.
///

#[derive(Debug, ThisError)]
pub enum GenerateError {
    /// The model carries no wire directive.
    #[error("model '{model}' has no wire directive; unable to emit a wrapper")]
    MissingDirective { model: String },

    #[error("model '{model}' failed validation")]
    InvalidModel {
        model: String,
        #[source]
        source: ErrorTree,
    },

    /// Known limitation: collection and map fields get no differentiated
    /// per-element wrapping.
    #[error("field '{field}' on '{model}': collection fields are not supported")]
    UnsupportedCollection { model: String, field: String },

    #[error("generated unit for '{model}' did not re-parse: {message}")]
    Render { model: String, message: String },

    #[error("failed to write generated unit at '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Render the wrapper unit for one model descriptor as source text.
pub fn generate(model: &ModelClass) -> Result<String, GenerateError> {
    let plan = WrapperPlan::resolve(model)?;
    let unit = GeneratedUnit::render(&plan)?;

    Ok(unit.source)
}

/// Render and persist the wrapper unit for one model descriptor under
/// `out_root`, following the model's module path. Returns the written
/// path. On failure nothing is written.
pub fn emit_wrapper(model: &ModelClass, out_root: &Path) -> Result<PathBuf, GenerateError> {
    let plan = WrapperPlan::resolve(model)?;
    let unit = GeneratedUnit::render(&plan)?;

    unit.persist(out_root)
}
