pub mod client;
pub mod image_storage;
