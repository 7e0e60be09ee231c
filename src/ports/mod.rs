pub mod authorization_service;
pub mod book_service;

pub use authorization_service::AuthorizationService;
pub use book_service::BookService;
