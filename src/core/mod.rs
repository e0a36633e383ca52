pub mod errors;
pub mod models;

pub use errors::AnkipixError;
pub use models::{ FetchSummary, ImageHit, SearchFields };
