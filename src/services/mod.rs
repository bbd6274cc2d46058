//! Application service layer.
//!
//! Services contain the business logic behind each user-facing command and
//! provide a clean boundary between the command shell and the data model.

mod contact_service;

pub use contact_service::{Change, ContactService, ContactServiceImpl};
