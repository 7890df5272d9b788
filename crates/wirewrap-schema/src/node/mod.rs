mod field;
mod model;

pub use field::{Field, FieldList};
pub use model::{ModelClass, WireDirective};

use crate::{MAX_MODEL_NAME_LEN, err, error::ErrorTree};
use serde::{Deserialize, Serialize};

///
/// Def
///
/// Identity of a described model type: simple name plus the module path
/// the type (and its generated wrapper) lives under.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Def {
    pub ident: String,
    pub module: String,
}

impl Def {
    #[must_use]
    pub fn new(ident: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            module: module.into(),
        }
    }

    /// Fully qualified path of the described type.
    #[must_use]
    pub fn path(&self) -> String {
        format!("{}::{}", self.module, self.ident)
    }
}

impl ValidateNode for Def {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.ident.is_empty() {
            err!(errs, "model ident must not be empty");
        } else if !is_type_ident(&self.ident) {
            err!(errs, "model ident '{}' must be a PascalCase type name", self.ident);
        }
        if self.ident.len() > MAX_MODEL_NAME_LEN {
            err!(
                errs,
                "model ident '{}' exceeds max length {MAX_MODEL_NAME_LEN}",
                self.ident
            );
        }

        if self.module.is_empty() {
            err!(errs, "module path must not be empty");
        } else if self.module.split("::").any(|seg| !is_module_segment(seg)) {
            err!(errs, "module path '{}' has an invalid segment", self.module);
        }

        errs.result()
    }
}

///
/// ValidateNode
///

pub trait ValidateNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        Ok(())
    }
}

// A type name: leading uppercase, alphanumeric tail.
pub(crate) fn is_type_ident(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

fn is_module_segment(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase() || c == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn def_path_joins_module_and_ident() {
        let def = Def::new("ProductImpl", "catalog::product");
        assert_eq!(def.path(), "catalog::product::ProductImpl");
    }

    #[test]
    fn def_rejects_bad_ident_and_module() {
        assert!(Def::new("productImpl", "catalog").validate().is_err());
        assert!(Def::new("Product", "Catalog::Product").validate().is_err());
        assert!(Def::new("Product", "").validate().is_err());
        assert!(Def::new("Product", "catalog::offer").validate().is_ok());
    }
}
