use crate::{
    error::{UnwrapError, WrapError},
    registry::WireRegistry,
    request::WireRequest,
};
use serde::{Deserialize, Serialize};

///
/// BaseWrapper
///
/// Root of every generated wrapper chain. Owns the one bookkeeping slot
/// the chain shares: the concrete runtime type name recorded by `wrap`,
/// which is what lets `unwrap` rebuild an instance of the right concrete
/// type even though wrappers only ever see the public interface.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BaseWrapper {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation_class: Option<String>,
}

impl BaseWrapper {
    pub fn record_implementation(&mut self, type_name: &str) {
        self.implementation_class = Some(type_name.to_owned());
    }

    /// The recorded implementation name; fatal when `wrap` never ran.
    pub fn implementation(&self) -> Result<&str, UnwrapError> {
        self.implementation_class
            .as_deref()
            .ok_or(UnwrapError::MissingImplementationType)
    }
}

impl WrapperBase for BaseWrapper {
    fn base(&self) -> &BaseWrapper {
        self
    }

    fn base_mut(&mut self) -> &mut BaseWrapper {
        self
    }
}

///
/// WrapperBase
///
/// Access to the single [`BaseWrapper`] slot at the bottom of a wrapper's
/// embedding chain. Generated impls delegate through their parent.
///

pub trait WrapperBase {
    fn base(&self) -> &BaseWrapper;
    fn base_mut(&mut self) -> &mut BaseWrapper;
}

///
/// WireModel
///
/// Supertrait of every public model interface: the stable identifier a
/// concrete model type is registered under in the [`WireRegistry`].
///

pub trait WireModel {
    fn implementation_name(&self) -> &'static str;
}

///
/// ApiWrapper
///
/// Capability: copy a model instance's included state into self.
///

pub trait ApiWrapper<M: ?Sized> {
    fn wrap(&mut self, model: &M, request: &WireRequest) -> Result<(), WrapError>;
}

///
/// ApiUnwrapper
///
/// Capability: reconstruct (or update) a model instance from self. The
/// registry is used only to resolve the recorded concrete type.
///

pub trait ApiUnwrapper<M: ?Sized> {
    fn unwrap(&self, request: &WireRequest, registry: &WireRegistry) -> Result<Box<M>, UnwrapError>;
}

///
/// TESTS
///
