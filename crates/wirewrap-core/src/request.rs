use std::collections::HashMap;

///
/// WireRequest
///
/// Opaque per-call context handed through `wrap`/`unwrap` untouched by
/// generated code. Hosts stash whatever they need here (locale, caller
/// identity) and read it back from their own accessors.
///

#[derive(Clone, Debug, Default)]
pub struct WireRequest {
    attributes: HashMap<String, String>,
}

impl WireRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

///
/// TESTS
///
