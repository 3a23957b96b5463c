//! Data types shared by the form frontend and the local host.

pub mod field;
pub mod record;
pub mod schema;
