use convert_case::{Case, Casing};

/// Implementation-suffix token stripped from model type names.
pub const IMPL_SUFFIX: &str = "Impl";

/// Suffix appended to a stripped name to form the wrapper name.
pub const WRAPPER_SUFFIX: &str = "Wrapper";

/// Strip one trailing implementation-suffix token, exactly once.
#[must_use]
pub fn strip_impl(name: &str) -> &str {
    name.strip_suffix(IMPL_SUFFIX).unwrap_or(name)
}

/// The wrapper type name for a model type name. Applied to the model
/// itself, to its direct superclass, and to nested model field types;
/// purely conventional, never checked against an actual type.
#[must_use]
pub fn wrapper_ident(name: &str) -> String {
    format!("{}{WRAPPER_SUFFIX}", strip_impl(name))
}

/// The wire root-element name: the lowercased stripped name.
#[must_use]
pub fn root_element(name: &str) -> String {
    strip_impl(name).to_lowercase()
}

/// File name of the generated compilation unit.
#[must_use]
pub fn unit_file_name(wrapper_ident: &str) -> String {
    format!("{}.rs", wrapper_ident.to_case(Case::Snake))
}

///
/// TESTS
///
