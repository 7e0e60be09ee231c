use crate::domain::value_objects::BookId;
use crate::ports::book_service::{BookService as BookServiceTrait, Result};
use std::collections::HashSet;
use std::sync::RwLock;

use super::RegistryError;

/// Catalog-backed implementation of BookService
///
/// A book is available while it is shelved and not checked out.
#[derive(Debug, Default)]
pub struct BookCatalog {
    available_books: RwLock<HashSet<BookId>>,
}

impl BookCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a book on the shelf, making it available for loan
    pub fn shelve(&self, book_id: BookId) -> Result<()> {
        self.available_books
            .write()
            .map_err(|_| RegistryError::LockPoisoned("book catalog"))?
            .insert(book_id);
        Ok(())
    }

    /// Take a book off the shelf
    ///
    /// Returns `true` if the book was available before the call.
    pub fn withdraw(&self, book_id: BookId) -> Result<bool> {
        let removed = self
            .available_books
            .write()
            .map_err(|_| RegistryError::LockPoisoned("book catalog"))?
            .remove(&book_id);
        Ok(removed)
    }
}

impl FromIterator<BookId> for BookCatalog {
    fn from_iter<I: IntoIterator<Item = BookId>>(iter: I) -> Self {
        Self {
            available_books: RwLock::new(iter.into_iter().collect()),
        }
    }
}

impl BookServiceTrait for BookCatalog {
    fn is_available_for_loan(&self, book_id: BookId) -> Result<bool> {
        let books = self
            .available_books
            .read()
            .map_err(|_| RegistryError::LockPoisoned("book catalog"))?;
        Ok(books.contains(&book_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_book_is_unavailable() {
        let catalog = BookCatalog::new();
        assert!(!catalog.is_available_for_loan(BookId::new(2)).unwrap());
    }

    #[test]
    fn test_shelved_book_is_available_regardless_of_parity() {
        let catalog = BookCatalog::new();
        catalog.shelve(BookId::new(3)).unwrap();
        assert!(catalog.is_available_for_loan(BookId::new(3)).unwrap());
    }

    #[test]
    fn test_withdrawn_book_is_unavailable() {
        let catalog: BookCatalog = [BookId::new(8)].into_iter().collect();

        assert!(catalog.withdraw(BookId::new(8)).unwrap());
        assert!(!catalog.withdraw(BookId::new(8)).unwrap());
        assert!(!catalog.is_available_for_loan(BookId::new(8)).unwrap());
    }
}
