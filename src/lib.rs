pub mod api;
pub mod errors;
pub mod layout;
pub mod scaffold;
