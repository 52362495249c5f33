pub mod pg_book_repository;
pub mod sqlite_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryError;
use crate::core::repository::Repository;

pub trait BookRepository: Repository<BookEntity> {}

// unique violations on insert can only come from the isbn primary key
pub(crate) fn map_create_error(isbn: &str, err: sqlx::Error) -> LibraryError {
    match LibraryError::from(err) {
        LibraryError::DuplicateKey { .. } => {
            LibraryError::duplicate_key(format!("A book with isbn '{}' already exists", isbn).as_str())
        }
        other => other,
    }
}
