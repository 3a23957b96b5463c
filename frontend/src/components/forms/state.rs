//! Component state for the dynamic form.
//!
//! All form data lives in the wrapped `FormManager`: selection, draft,
//! validation error and submitted records. Progress and the "required" hints
//! are read back from it on every render instead of being cached here.

use common::forms::FormManager;
use common::registry::SchemaRegistry;

/// Main state container for the `FormManagerComponent`.
///
/// `manager` is `pub` because it is accessed by the `view` and `update` modules.
pub struct FormManagerComponent {
    pub manager: FormManager,
}

impl FormManagerComponent {
    pub fn new(registry: SchemaRegistry) -> Self {
        Self {
            manager: FormManager::new(registry),
        }
    }
}
