use crate::{
    err,
    error::ErrorTree,
    node::{Def, FieldList, ValidateNode, is_type_ident},
};
use serde::{Deserialize, Serialize};

///
/// ModelClass
///
/// Descriptor of one domain model type, supplied per generator
/// invocation. `extends` names the direct superclass model; `None` means
/// the type sits at the root of its hierarchy.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ModelClass {
    pub def: Def,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directive: Option<WireDirective>,

    pub fields: FieldList,
}

impl ModelClass {
    /// The public interface the wrapper is typed over: the directive's
    /// explicit override, else the first implemented interface whose name
    /// prefixes the model's, else the model type itself.
    #[must_use]
    pub fn resolved_interface(&self) -> &str {
        if let Some(directive) = &self.directive
            && let Some(interface) = &directive.interface
        {
            return interface;
        }

        self.interfaces
            .iter()
            .find(|iface| self.def.ident.starts_with(iface.as_str()))
            .map_or(self.def.ident.as_str(), String::as_str)
    }
}

impl ValidateNode for ModelClass {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(inner) = self.def.validate() {
            errs.merge("def", inner);
        }
        if let Err(inner) = self.fields.validate() {
            errs.merge("fields", inner);
        }

        if let Some(extends) = &self.extends
            && !is_type_ident(extends)
        {
            err!(errs, "superclass '{extends}' must be a type name");
        }

        for iface in &self.interfaces {
            if !is_type_ident(iface) {
                err!(errs, "interface '{iface}' must be a type name");
            }
        }

        if let Some(directive) = &self.directive
            && let Err(inner) = directive.validate()
        {
            errs.merge("directive", inner);
        }

        errs.result()
    }
}

///
/// WireDirective
///
/// The generation directive attached to a model. Absence of a directive
/// is fatal for that model; the generator reports it, emits nothing.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct WireDirective {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suppressed: Vec<String>,
}

impl WireDirective {
    /// Directive typing the wrapper over an explicit public interface.
    #[must_use]
    pub fn for_interface(interface: impl Into<String>) -> Self {
        Self {
            interface: Some(interface.into()),
            suppressed: Vec::new(),
        }
    }
}

impl ValidateNode for WireDirective {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Some(interface) = &self.interface
            && !is_type_ident(interface)
        {
            err!(errs, "interface override '{interface}' must be a type name");
        }

        for (i, name) in self.suppressed.iter().enumerate() {
            if self.suppressed[..i].contains(name) {
                err!(errs, "suppressed field '{name}' listed twice");
            }
        }

        errs.result()
    }
}

///
/// TESTS
///
