use crate::plan::{FieldCopy, FieldPlan, SuperWrapper, WrapperPlan};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use wirewrap_schema::types::Cardinality;

/// Render the full wrapper unit for a resolved plan.
#[must_use]
pub fn generate(plan: &WrapperPlan) -> TokenStream {
    let declaration = declaration(plan);
    let base_access = base_access(plan);
    let unwrap_onto = unwrap_onto(plan);
    let wrap = wrap(plan);
    let unwrap = unwrap(plan);

    quote! {
        #declaration
        #base_access
        #unwrap_onto
        #wrap
        #unwrap
    }
}

fn wrapper_ident(plan: &WrapperPlan) -> Ident {
    format_ident!("{}", plan.wrapper_ident)
}

fn interface_ident(plan: &WrapperPlan) -> Ident {
    format_ident!("{}", plan.interface)
}

// Delegation and nested copies are the only consumers of the context
// parameters; underscore the names otherwise so consuming builds stay
// warning-free.
fn uses_context(plan: &WrapperPlan) -> bool {
    !plan.superclass.is_base()
        || plan
            .fields
            .iter()
            .any(|f| matches!(f.copy, FieldCopy::Nested { .. }))
}

fn context_param(plan: &WrapperPlan, name: &str) -> Ident {
    if uses_context(plan) {
        format_ident!("{name}")
    } else {
        format_ident!("_{name}")
    }
}

// -------------------------
// Declaration
// -------------------------

fn declaration(plan: &WrapperPlan) -> TokenStream {
    let ident = wrapper_ident(plan);
    let root_element = plan.root_element.as_str();

    let parent_slot = match &plan.superclass {
        SuperWrapper::Base => quote! {
            #[serde(flatten)]
            pub base: ::wirewrap::BaseWrapper,
        },
        SuperWrapper::Wrapper(name) => {
            let parent = format_ident!("{name}");
            quote! {
                #[serde(flatten)]
                pub parent: #parent,
            }
        }
    };

    let fields = plan.fields.iter().map(field_slot);

    quote! {
        #[derive(
            Clone,
            Debug,
            Default,
            ::wirewrap::__reexports::serde::Deserialize,
            ::wirewrap::__reexports::serde::Serialize
        )]
        #[serde(
            crate = "::wirewrap::__reexports::serde",
            default,
            rename = #root_element,
            rename_all = "camelCase"
        )]
        pub struct #ident {
            #parent_slot
            #(#fields)*
        }
    }
}

fn field_slot(field: &FieldPlan) -> TokenStream {
    let ident = format_ident!("{}", field.ident);
    let ty = match &field.copy {
        FieldCopy::Basic(basic) => basic.as_type(),
        FieldCopy::Nested { wrapper, .. } => {
            let wrapper = format_ident!("{wrapper}");
            quote!(#wrapper)
        }
    };

    quote! {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub #ident: Option<#ty>,
    }
}

// -------------------------
// Base-slot access
// -------------------------

fn base_access(plan: &WrapperPlan) -> TokenStream {
    let ident = wrapper_ident(plan);

    let (base, base_mut) = if plan.superclass.is_base() {
        (quote!(&self.base), quote!(&mut self.base))
    } else {
        (
            quote!(::wirewrap::WrapperBase::base(&self.parent)),
            quote!(::wirewrap::WrapperBase::base_mut(&mut self.parent)),
        )
    };

    quote! {
        impl ::wirewrap::WrapperBase for #ident {
            fn base(&self) -> &::wirewrap::BaseWrapper {
                #base
            }

            fn base_mut(&mut self) -> &mut ::wirewrap::BaseWrapper {
                #base_mut
            }
        }
    }
}

// -------------------------
// wrap
// -------------------------

fn wrap(plan: &WrapperPlan) -> TokenStream {
    let ident = wrapper_ident(plan);
    let interface = interface_ident(plan);

    let delegate = match &plan.superclass {
        SuperWrapper::Base => quote!(),
        SuperWrapper::Wrapper(_) => {
            let clears = plan.suppressed.iter().map(|name| {
                let slot = format_ident!("{name}");
                quote! { self.parent.#slot = None; }
            });
            quote! {
                ::wirewrap::ApiWrapper::wrap(&mut self.parent, model, request)?;
                #(#clears)*
            }
        }
    };

    let copies = plan.fields.iter().map(wrap_copy);
    let request = context_param(plan, "request");

    quote! {
        impl ::wirewrap::ApiWrapper<dyn #interface> for #ident {
            fn wrap(
                &mut self,
                model: &dyn #interface,
                #request: &::wirewrap::WireRequest,
            ) -> Result<(), ::wirewrap::WrapError> {
                ::wirewrap::WrapperBase::base_mut(self)
                    .record_implementation(::wirewrap::WireModel::implementation_name(model));
                #delegate
                #(#copies)*
                Ok(())
            }
        }
    }
}

fn wrap_copy(field: &FieldPlan) -> TokenStream {
    let ident = format_ident!("{}", field.ident);

    match (&field.copy, field.cardinality) {
        (FieldCopy::Basic(_), Cardinality::One) => quote! {
            self.#ident = Some(model.#ident());
        },
        (FieldCopy::Basic(_), Cardinality::Opt) => quote! {
            self.#ident = model.#ident();
        },
        (FieldCopy::Nested { wrapper, .. }, Cardinality::One) => {
            let wrapper = format_ident!("{wrapper}");
            quote! {
                let mut #ident = #wrapper::default();
                ::wirewrap::ApiWrapper::wrap(&mut #ident, model.#ident(), request)?;
                self.#ident = Some(#ident);
            }
        }
        (FieldCopy::Nested { wrapper, .. }, Cardinality::Opt) => {
            let wrapper = format_ident!("{wrapper}");
            quote! {
                self.#ident = match model.#ident() {
                    Some(inner) => {
                        let mut wrapper = #wrapper::default();
                        ::wirewrap::ApiWrapper::wrap(&mut wrapper, inner, request)?;
                        Some(wrapper)
                    }
                    None => None,
                };
            }
        }
        (_, Cardinality::Many) => {
            unreachable!("collection fields are rejected while planning")
        }
    }
}

// -------------------------
// unwrap
// -------------------------

fn unwrap_onto(plan: &WrapperPlan) -> TokenStream {
    let ident = wrapper_ident(plan);
    let interface = interface_ident(plan);

    let delegate = match &plan.superclass {
        SuperWrapper::Base => quote!(),
        SuperWrapper::Wrapper(_) => quote! {
            self.parent.unwrap_onto(model, request, registry)?;
        },
    };

    let writes = plan.fields.iter().map(unwrap_write);
    let request = context_param(plan, "request");
    let registry = context_param(plan, "registry");

    quote! {
        impl #ident {
            /// Write this wrapper's state (parent chain first) onto an
            /// already-instantiated model.
            pub fn unwrap_onto(
                &self,
                model: &mut dyn #interface,
                #request: &::wirewrap::WireRequest,
                #registry: &::wirewrap::WireRegistry,
            ) -> Result<(), ::wirewrap::UnwrapError> {
                #delegate
                #(#writes)*
                Ok(())
            }
        }
    }
}

fn unwrap_write(field: &FieldPlan) -> TokenStream {
    let ident = format_ident!("{}", field.ident);
    let setter = format_ident!("set_{}", field.ident);

    match (&field.copy, field.cardinality) {
        (FieldCopy::Basic(basic), Cardinality::One) => {
            if basic.supports_copy() {
                quote! {
                    if let Some(value) = &self.#ident {
                        model.#setter(*value);
                    }
                }
            } else {
                quote! {
                    if let Some(value) = &self.#ident {
                        model.#setter(value.clone());
                    }
                }
            }
        }
        (FieldCopy::Basic(basic), Cardinality::Opt) => {
            if basic.supports_copy() {
                quote! { model.#setter(self.#ident); }
            } else {
                quote! { model.#setter(self.#ident.clone()); }
            }
        }
        (FieldCopy::Nested { .. }, Cardinality::One) => quote! {
            if let Some(wrapper) = &self.#ident {
                model.#setter(::wirewrap::ApiUnwrapper::unwrap(wrapper, request, registry)?);
            }
        },
        (FieldCopy::Nested { .. }, Cardinality::Opt) => quote! {
            model.#setter(match &self.#ident {
                Some(wrapper) => {
                    Some(::wirewrap::ApiUnwrapper::unwrap(wrapper, request, registry)?)
                }
                None => None,
            });
        },
        (_, Cardinality::Many) => {
            unreachable!("collection fields are rejected while planning")
        }
    }
}

fn unwrap(plan: &WrapperPlan) -> TokenStream {
    let ident = wrapper_ident(plan);
    let interface = interface_ident(plan);

    quote! {
        impl ::wirewrap::ApiUnwrapper<dyn #interface> for #ident {
            fn unwrap(
                &self,
                request: &::wirewrap::WireRequest,
                registry: &::wirewrap::WireRegistry,
            ) -> Result<Box<dyn #interface>, ::wirewrap::UnwrapError> {
                let implementation = ::wirewrap::WrapperBase::base(self).implementation()?;
                let mut unwrapped = registry.instantiate::<dyn #interface>(implementation)?;
                self.unwrap_onto(unwrapped.as_mut(), request, registry)?;
                Ok(unwrapped)
            }
        }
    }
}

///
/// TESTS
///
