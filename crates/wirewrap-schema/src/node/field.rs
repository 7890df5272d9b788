use crate::{MAX_FIELD_NAME_LEN, err, error::ErrorTree, node::ValidateNode, types::Cardinality};
use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};
use std::slice::Iter;

///
/// FieldList
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FieldList {
    pub fields: Vec<Field>,
}

impl FieldList {
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.ident == ident)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Field> {
        self.fields.iter()
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Fields carrying the wire-element marker, in declaration order.
    pub fn iter_elements(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.element)
    }
}

impl ValidateNode for FieldList {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        for field in &self.fields {
            if let Err(inner) = field.validate() {
                errs.merge(&field.ident, inner);
            }
        }

        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.ident == field.ident) {
                err!(errs, "duplicate field ident '{}'", field.ident);
            }
        }

        errs.result()
    }
}

impl From<Vec<Field>> for FieldList {
    fn from(fields: Vec<Field>) -> Self {
        Self { fields }
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

///
/// Field
///
/// One declared field: ident, declared wire-type name, cardinality, and
/// the wire-element marker. Fields without the marker are invisible to
/// the generator.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Field {
    pub ident: String,
    pub ty: String,
    pub cardinality: Cardinality,
    pub element: bool,
}

impl Field {
    /// A field outside the wire representation.
    #[must_use]
    pub fn new(ident: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            ty: ty.into(),
            cardinality: Cardinality::One,
            element: false,
        }
    }

    /// A required wire element.
    #[must_use]
    pub fn element(ident: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            element: true,
            ..Self::new(ident, ty)
        }
    }

    /// A wire element with explicit cardinality.
    #[must_use]
    pub fn element_with(
        ident: impl Into<String>,
        ty: impl Into<String>,
        cardinality: Cardinality,
    ) -> Self {
        Self {
            cardinality,
            ..Self::element(ident, ty)
        }
    }
}

impl ValidateNode for Field {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();
        let ident = self.ident.as_str();

        if ident.is_empty() {
            err!(errs, "field ident must not be empty");
        } else {
            if ident.len() > MAX_FIELD_NAME_LEN {
                err!(errs, "field ident '{ident}' exceeds max length {MAX_FIELD_NAME_LEN}");
            }
            if !ident.is_case(Case::Snake) {
                err!(errs, "field ident '{ident}' must be snake_case");
            }
        }

        if self.ty.is_empty() {
            err!(errs, "field '{ident}' has an empty declared type");
        } else if !super::is_type_ident(&self.ty) {
            err!(errs, "field '{ident}' declared type '{}' must be a type name", self.ty);
        }

        errs.result()
    }
}

///
/// TESTS
///
