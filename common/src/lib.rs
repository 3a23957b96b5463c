//! Schema driven forms: field descriptors, the schema registry and the
//! `FormManager` state machine shared by the web frontend and the local host.

pub mod forms;
pub mod model;
pub mod registry;
