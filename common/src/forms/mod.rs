//! Form state: the manager, its submission store, validation and errors.

pub mod error;
pub mod manager;
pub mod store;
pub mod validation;

pub use error::FormError;
pub use manager::{FormEvent, FormManager, Outcome, Selection, SUBMIT_SUCCESS_MESSAGE};
pub use store::SubmissionStore;
