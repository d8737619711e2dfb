pub mod layout;
pub mod resume;
