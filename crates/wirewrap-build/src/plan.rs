use crate::{GenerateError, naming};
use wirewrap_schema::{
    node::{Field, ModelClass, ValidateNode},
    types::{BasicType, Cardinality},
};

///
/// SuperWrapper
///
/// Resolved superclass wrapper: the well-known base wrapper when the
/// model sits at the root of its hierarchy, otherwise the conventional
/// name derived from the direct superclass.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SuperWrapper {
    Base,
    Wrapper(String),
}

impl SuperWrapper {
    #[must_use]
    pub const fn is_base(&self) -> bool {
        matches!(self, Self::Base)
    }
}

///
/// WrapperPlan
///
/// Everything the emitter needs, derived once per model descriptor.
///

#[derive(Clone, Debug)]
pub struct WrapperPlan {
    pub wrapper_ident: String,
    pub module: String,
    pub root_element: String,
    pub superclass: SuperWrapper,
    pub interface: String,
    pub suppressed: Vec<String>,
    pub fields: Vec<FieldPlan>,
}

impl WrapperPlan {
    pub fn resolve(model: &ModelClass) -> Result<Self, GenerateError> {
        model
            .validate()
            .map_err(|source| GenerateError::InvalidModel {
                model: model.def.ident.clone(),
                source,
            })?;

        let directive = model
            .directive
            .as_ref()
            .ok_or_else(|| GenerateError::MissingDirective {
                model: model.def.ident.clone(),
            })?;

        let superclass = match &model.extends {
            None => SuperWrapper::Base,
            Some(name) => SuperWrapper::Wrapper(naming::wrapper_ident(name)),
        };

        // Suppression only has an inherited slot to clear under a real
        // superclass wrapper.
        let suppressed = if superclass.is_base() {
            Vec::new()
        } else {
            directive.suppressed.clone()
        };

        let mut fields = Vec::new();
        for field in model.fields.iter_elements() {
            fields.push(FieldPlan::resolve(model, field)?);
        }

        Ok(Self {
            wrapper_ident: naming::wrapper_ident(&model.def.ident),
            module: model.def.module.clone(),
            root_element: naming::root_element(&model.def.ident),
            superclass,
            interface: model.resolved_interface().to_owned(),
            suppressed,
            fields,
        })
    }
}

///
/// FieldPlan
///

#[derive(Clone, Debug)]
pub struct FieldPlan {
    pub ident: String,
    pub cardinality: Cardinality,
    pub copy: FieldCopy,
}

#[derive(Clone, Debug)]
pub enum FieldCopy {
    /// Copied directly; the declared type is in the basic reference set.
    Basic(BasicType),
    /// Boxed into its own wrapper and wrapped recursively.
    Nested { wrapper: String, interface: String },
}

impl FieldPlan {
    fn resolve(model: &ModelClass, field: &Field) -> Result<Self, GenerateError> {
        // TODO differentiated per-element wrapping for collection fields;
        // needs a wire representation decision first.
        if field.cardinality == Cardinality::Many {
            return Err(GenerateError::UnsupportedCollection {
                model: model.def.ident.clone(),
                field: field.ident.clone(),
            });
        }

        let copy = match BasicType::classify(&field.ty) {
            Some(basic) => FieldCopy::Basic(basic),
            None => FieldCopy::Nested {
                wrapper: naming::wrapper_ident(&field.ty),
                interface: naming::strip_impl(&field.ty).to_owned(),
            },
        };

        Ok(Self {
            ident: field.ident.clone(),
            cardinality: field.cardinality,
            copy,
        })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use wirewrap_schema::node::{Def, FieldList, WireDirective};

    fn gift_card() -> ModelClass {
        ModelClass {
            def: Def::new("GiftCardImpl", "catalog::offer"),
            extends: Some("WidgetImpl".into()),
            interfaces: vec!["GiftCard".into()],
            directive: Some(WireDirective {
                interface: None,
                suppressed: vec!["discount_code".into()],
            }),
            fields: FieldList::from(vec![
                Field::element("balance", "Money"),
                Field::element_with("recipient", "Text", Cardinality::Opt),
                Field::element("category", "CategoryImpl"),
                Field::new("audit_token", "Text"),
            ]),
        }
    }

    #[test]
    fn plan_resolves_names_and_hierarchy() {
        let plan = WrapperPlan::resolve(&gift_card()).unwrap();

        assert_eq!(plan.wrapper_ident, "GiftCardWrapper");
        assert_eq!(plan.root_element, "giftcard");
        assert_eq!(plan.interface, "GiftCard");
        assert_eq!(
            plan.superclass,
            SuperWrapper::Wrapper("WidgetWrapper".into())
        );
        assert_eq!(plan.suppressed, ["discount_code"]);
    }

    #[test]
    fn root_model_resolves_to_the_base_wrapper() {
        let mut model = gift_card();
        model.extends = None;

        let plan = WrapperPlan::resolve(&model).unwrap();
        assert!(plan.superclass.is_base());
        // suppression has no inherited slot without a superclass wrapper
        assert!(plan.suppressed.is_empty());
    }

    #[test]
    fn unmarked_fields_are_invisible() {
        let plan = WrapperPlan::resolve(&gift_card()).unwrap();
        assert_eq!(plan.fields.len(), 3);
        assert!(plan.fields.iter().all(|f| f.ident != "audit_token"));
    }

    #[test]
    fn fields_classify_basic_vs_nested() {
        let plan = WrapperPlan::resolve(&gift_card()).unwrap();

        assert!(matches!(
            plan.fields[0].copy,
            FieldCopy::Basic(BasicType::Money)
        ));
        match &plan.fields[2].copy {
            FieldCopy::Nested { wrapper, interface } => {
                assert_eq!(wrapper, "CategoryWrapper");
                assert_eq!(interface, "Category");
            }
            FieldCopy::Basic(_) => panic!("category must be nested"),
        }
    }

    #[test]
    fn missing_directive_is_fatal() {
        let mut model = gift_card();
        model.directive = None;

        let err = WrapperPlan::resolve(&model).unwrap_err();
        assert!(matches!(err, GenerateError::MissingDirective { .. }));
    }

    #[test]
    fn collection_fields_are_rejected() {
        let mut model = gift_card();
        model
            .fields
            .push(Field::element_with("tags", "Text", Cardinality::Many));

        let err = WrapperPlan::resolve(&model).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::UnsupportedCollection { field, .. } if field == "tags"
        ));
    }

    #[test]
    fn invalid_descriptor_aborts_planning() {
        let mut model = gift_card();
        model.fields.push(Field::element("BadIdent", "Text"));

        let err = WrapperPlan::resolve(&model).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidModel { .. }));
    }
}
