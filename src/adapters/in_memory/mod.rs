mod error;
pub mod book_catalog;
pub mod user_registry;

pub use book_catalog::BookCatalog;
pub use error::RegistryError;
pub use user_registry::UserRegistry;
