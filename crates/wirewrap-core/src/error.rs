use thiserror::Error as ThisError;

/// Boxed cause carried by the opaque copy failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

///
/// WrapError
///
/// Raised by a generated `wrap`. Deliberately opaque: the original cause
/// is preserved as the source, not as a structured field-level diagnostic.
///

#[derive(Debug, ThisError)]
pub enum WrapError {
    #[error("wrap failed for '{wrapper}'")]
    Failed {
        wrapper: &'static str,
        #[source]
        source: BoxError,
    },
}

impl WrapError {
    #[must_use]
    pub fn failed(wrapper: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Failed {
            wrapper,
            source: source.into(),
        }
    }
}

///
/// UnwrapError
///

#[derive(Debug, ThisError)]
pub enum UnwrapError {
    /// `unwrap` reached the base level without a prior `wrap` having
    /// recorded the concrete implementation type.
    #[error("cannot unwrap: no implementation type recorded; wrap must run first")]
    MissingImplementationType,

    /// The recorded implementation type has no registered factory.
    #[error("no implementation factory registered for '{type_name}'")]
    UnknownImplementation { type_name: String },

    #[error("unwrap failed for '{wrapper}'")]
    Failed {
        wrapper: &'static str,
        #[source]
        source: BoxError,
    },
}

impl UnwrapError {
    #[must_use]
    pub fn failed(wrapper: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Failed {
            wrapper,
            source: source.into(),
        }
    }
}

///
/// TESTS
///
