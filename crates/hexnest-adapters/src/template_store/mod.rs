//! Template store adapters.

pub mod directory;
pub mod embedded;

pub use directory::DirectoryStore;
pub use embedded::EmbeddedStore;
