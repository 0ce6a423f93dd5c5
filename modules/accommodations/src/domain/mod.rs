pub mod category_service;
pub mod error;
pub mod permission;
pub mod repo;
pub mod service;
pub mod user_service;
