//! Tag store: the ordered list of release tags kept in the `.rtag` file.

mod lock;
mod manager;
mod tag;

pub use manager::TagStore;
pub use tag::Tag;

/// Conventional name of the tag file in the working directory
pub const DEFAULT_STORE_FILE: &str = ".rtag";
