//! Generation-output tests over a small e-commerce fixture set: a root
//! widget model, a gift card extending it, and a product with a nested
//! category field.

use std::fs;
use wirewrap_build::{GenerateError, emit_wrapper, generate};
use wirewrap_schema::{
    node::{Def, Field, FieldList, ModelClass, WireDirective},
    types::Cardinality,
};

fn widget() -> ModelClass {
    ModelClass {
        def: Def::new("WidgetImpl", "catalog"),
        extends: None,
        interfaces: vec!["Widget".into()],
        directive: Some(WireDirective::default()),
        fields: FieldList::from(vec![
            Field::element("name", "Text"),
            Field::element("retail_price", "Money"),
            Field::element_with("discount_code", "Text", Cardinality::Opt),
            Field::new("version", "Int64"),
        ]),
    }
}

fn gift_card() -> ModelClass {
    ModelClass {
        def: Def::new("GiftCardImpl", "catalog"),
        extends: Some("WidgetImpl".into()),
        interfaces: vec!["GiftCard".into()],
        directive: Some(WireDirective {
            interface: None,
            suppressed: vec!["discount_code".into()],
        }),
        fields: FieldList::from(vec![
            Field::element("balance", "Money"),
            Field::element_with("recipient", "Text", Cardinality::Opt),
        ]),
    }
}

fn product() -> ModelClass {
    ModelClass {
        def: Def::new("ProductImpl", "catalog::product"),
        extends: None,
        interfaces: vec!["Product".into()],
        directive: Some(WireDirective::default()),
        fields: FieldList::from(vec![
            Field::element("name", "Text"),
            Field::element("weight", "Decimal"),
            Field::element_with("category", "CategoryImpl", Cardinality::Opt),
        ]),
    }
}

#[test]
fn root_model_gets_base_wrapper_and_lowercase_root_element() {
    let source = generate(&widget()).unwrap();

    assert!(source.contains("pub struct WidgetWrapper {"));
    assert!(source.contains(r#"rename = "widget""#));
    assert!(source.contains("pub base: ::wirewrap::BaseWrapper,"));
    assert!(!source.contains("pub parent:"));
}

#[test]
fn generated_unit_implements_both_capabilities_over_the_interface() {
    let source = generate(&widget()).unwrap();

    assert!(source.contains("impl ::wirewrap::ApiWrapper<dyn Widget> for WidgetWrapper {"));
    assert!(source.contains("impl ::wirewrap::ApiUnwrapper<dyn Widget> for WidgetWrapper {"));
    assert!(source.contains("impl ::wirewrap::WrapperBase for WidgetWrapper {"));
}

#[test]
fn subclass_extends_the_conventional_superclass_wrapper() {
    let source = generate(&gift_card()).unwrap();

    assert!(source.contains("pub struct GiftCardWrapper {"));
    assert!(source.contains("pub parent: WidgetWrapper,"));
    assert!(source.contains(r#"rename = "giftcard""#));
}

#[test]
fn wrap_records_type_then_delegates_then_clears_then_copies() {
    let source = generate(&gift_card()).unwrap();

    let record = source.find("record_implementation").unwrap();
    let delegate = source
        .find("::wirewrap::ApiWrapper::wrap(&mut self.parent, model, request)?;")
        .unwrap();
    let clear = source.find("self.parent.discount_code = None;").unwrap();
    let own_copy = source.find("self.balance = Some(model.balance());").unwrap();

    assert!(record < delegate, "implementation type is recorded first");
    assert!(delegate < clear, "suppression clears after delegation");
    assert!(clear < own_copy, "own fields copy last");
}

#[test]
fn unwrap_delegates_to_the_parent_chain_before_own_writes() {
    let source = generate(&gift_card()).unwrap();

    let delegate = source
        .find("self.parent.unwrap_onto(model, request, registry)?;")
        .unwrap();
    let own_write = source.find("model.set_balance(*value);").unwrap();
    assert!(delegate < own_write);
}

#[test]
fn base_level_unwrap_instantiates_from_the_recorded_type() {
    let source = generate(&widget()).unwrap();

    assert!(
        source.contains("let implementation = ::wirewrap::WrapperBase::base(self).implementation()?;")
    );
    assert!(source.contains("registry.instantiate::<dyn Widget>(implementation)?;"));
}

#[test]
fn decimal_fields_copy_directly_while_model_fields_nest() {
    let source = generate(&product()).unwrap();

    // arbitrary-precision decimal: direct copy, no wrapper reference
    assert!(source.contains("pub weight: Option<::wirewrap::types::Decimal>,"));
    assert!(source.contains("self.weight = Some(model.weight());"));

    // nested model type: boxed into its own conventional wrapper
    assert!(source.contains("pub category: Option<CategoryWrapper>,"));
    assert!(source.contains("let mut wrapper = CategoryWrapper::default();"));
    assert!(source.contains("::wirewrap::ApiWrapper::wrap(&mut wrapper, inner, request)?;"));
}

#[test]
fn unmarked_fields_never_reach_the_unit() {
    let source = generate(&widget()).unwrap();
    assert!(!source.contains("version"));
}

#[test]
fn interface_override_beats_the_prefix_convention() {
    let mut model = widget();
    model.directive = Some(WireDirective::for_interface("Sellable"));

    let source = generate(&model).unwrap();
    assert!(source.contains("impl ::wirewrap::ApiWrapper<dyn Sellable> for WidgetWrapper {"));
}

#[test]
fn generation_is_idempotent() {
    assert_eq!(generate(&gift_card()).unwrap(), generate(&gift_card()).unwrap());
    assert_eq!(generate(&product()).unwrap(), generate(&product()).unwrap());
}

#[test]
fn generated_source_re_parses() {
    for model in [widget(), gift_card(), product()] {
        let source = generate(&model).unwrap();
        syn::parse_file(&source).expect("generated unit must be valid Rust");
    }
}

#[test]
fn missing_directive_is_fatal_and_produces_no_output() {
    let mut model = widget();
    model.directive = None;

    let out_root = tempfile::tempdir().unwrap();
    let err = emit_wrapper(&model, out_root.path()).unwrap_err();

    assert!(matches!(err, GenerateError::MissingDirective { .. }));
    assert!(
        fs::read_dir(out_root.path()).unwrap().next().is_none(),
        "output root must stay untouched"
    );
}

#[test]
fn collection_fields_fail_generation() {
    let mut model = widget();
    model
        .fields
        .push(Field::element_with("images", "MediaImpl", Cardinality::Many));

    let err = generate(&model).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::UnsupportedCollection { field, .. } if field == "images"
    ));
}

#[test]
fn emitted_unit_lands_under_the_module_path() {
    let out_root = tempfile::tempdir().unwrap();
    let written = emit_wrapper(&product(), out_root.path()).unwrap();

    assert_eq!(
        written,
        out_root.path().join("catalog/product/product_wrapper.rs")
    );

    let on_disk = fs::read_to_string(&written).unwrap();
    assert_eq!(on_disk, generate(&product()).unwrap());
    assert!(on_disk.starts_with("// @generated by wirewrap"));
}

#[test]
fn sibling_models_emit_to_disjoint_paths() {
    let out_root = tempfile::tempdir().unwrap();

    let widget_path = emit_wrapper(&widget(), out_root.path()).unwrap();
    let gift_card_path = emit_wrapper(&gift_card(), out_root.path()).unwrap();

    assert_ne!(widget_path, gift_card_path);
    assert!(widget_path.ends_with("catalog/widget_wrapper.rs"));
    assert!(gift_card_path.ends_with("catalog/gift_card_wrapper.rs"));
}
