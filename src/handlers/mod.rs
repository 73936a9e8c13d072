pub mod consent_handlers;
pub mod input_handlers;
