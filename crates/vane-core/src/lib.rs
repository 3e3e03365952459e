pub mod coordinate;
pub mod error;
pub mod pattern;
pub mod router;

pub use coordinate::Coordinate;
pub use error::{Result, VaneError};
pub use pattern::GroupPattern;
pub use router::{Credentials, RepositoryEntry, Router, RouterBuilder, ScopedRepository};
