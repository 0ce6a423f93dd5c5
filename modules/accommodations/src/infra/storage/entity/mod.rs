pub mod accommodation;
pub mod category;
pub mod user;
