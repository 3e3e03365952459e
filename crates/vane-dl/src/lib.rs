pub mod error;
pub mod fetch;
pub mod http;

pub use error::FetchError;
pub use fetch::{artifact_url, fetch_artifact};
