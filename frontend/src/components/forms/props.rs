//! Defines the properties for the `FormManagerComponent`.

use common::registry::SchemaRegistry;
use yew::prelude::*;

/// Properties for the `FormManagerComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct FormManagerProps {
    /// Form types offered in the selector, in display order.
    ///
    /// Defaults to the built-in `userInfo`, `addressInfo` and `paymentInfo`
    /// schemas. The registry is read once, when the component is created;
    /// later changes to this property are ignored.
    #[prop_or_else(SchemaRegistry::builtin)]
    pub registry: SchemaRegistry,
}
