pub mod chat;
pub mod info;
pub mod json_error;
