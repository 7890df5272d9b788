use crate::error::UnwrapError;
use std::{
    any::{Any, TypeId},
    collections::HashMap,
    fmt,
};

///
/// WireRegistry
///
/// Factory map standing in for reflective instantiation: the recorded
/// implementation name resolves to a no-argument constructor viewed
/// through a public model interface. Hosts populate it once at startup
/// for every concrete model type that may come back off the wire.
///
/// Keys pair the interface with the implementation name, so one concrete
/// type can be registered under every interface it is exposed through.
///

#[derive(Default)]
pub struct WireRegistry {
    factories: HashMap<(TypeId, String), Box<dyn Any + Send + Sync>>,
}

impl WireRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a no-argument factory for `type_name`, viewed as `M`.
    pub fn register<M: ?Sized + 'static>(
        &mut self,
        type_name: impl Into<String>,
        factory: fn() -> Box<M>,
    ) {
        self.factories
            .insert((TypeId::of::<M>(), type_name.into()), Box::new(factory));
    }

    /// Instantiate the concrete type recorded under `type_name`, viewed
    /// as `M`. A name registered only under a different interface is a
    /// miss, same as an unknown name.
    pub fn instantiate<M: ?Sized + 'static>(&self, type_name: &str) -> Result<Box<M>, UnwrapError> {
        self.factories
            .get(&(TypeId::of::<M>(), type_name.to_owned()))
            .and_then(|factory| factory.downcast_ref::<fn() -> Box<M>>())
            .map(|factory| factory())
            .ok_or_else(|| UnwrapError::UnknownImplementation {
                type_name: type_name.to_owned(),
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for WireRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WireRegistry")
            .field("factories", &self.factories.len())
            .finish()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    trait Widget {
        fn kind(&self) -> &'static str;
    }

    #[derive(Default)]
    struct WidgetImpl;

    impl Widget for WidgetImpl {
        fn kind(&self) -> &'static str {
            "widget"
        }
    }

    #[test]
    fn registered_factory_instantiates_through_the_interface() {
        let mut registry = WireRegistry::new();
        registry.register::<dyn Widget>("WidgetImpl", || Box::new(WidgetImpl));

        let widget = registry.instantiate::<dyn Widget>("WidgetImpl").unwrap();
        assert_eq!(widget.kind(), "widget");
    }

    #[test]
    fn unknown_name_is_a_miss() {
        let registry = WireRegistry::new();
        let err = registry.instantiate::<dyn Widget>("GhostImpl").unwrap_err();
        assert!(matches!(
            err,
            UnwrapError::UnknownImplementation { type_name } if type_name == "GhostImpl"
        ));
    }

    #[test]
    fn wrong_interface_is_a_miss() {
        trait Sellable {}

        let mut registry = WireRegistry::new();
        registry.register::<dyn Widget>("WidgetImpl", || Box::new(WidgetImpl));

        assert!(registry.instantiate::<dyn Sellable>("WidgetImpl").is_err());
    }
}
