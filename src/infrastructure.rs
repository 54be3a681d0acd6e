pub mod contact_client;
pub mod content;
pub mod utils;
