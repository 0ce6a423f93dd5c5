pub mod client;
pub mod error;
pub mod model;

pub use client::AccommodationsApi;
pub use error::AccommodationsError;
pub use model::*;
