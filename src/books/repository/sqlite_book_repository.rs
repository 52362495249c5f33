use async_trait::async_trait;
use tracing::{debug, warn};
use sqlx::sqlite::SqlitePool;

use crate::books::domain::model::BookEntity;
use crate::books::repository::{map_create_error, BookRepository};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

const INSERT_BOOK: &str = "INSERT INTO books (isbn, amazon_url, author, language, pages, publisher, title, year) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
    RETURNING isbn, amazon_url, author, language, pages, publisher, title, year";
const UPDATE_BOOK: &str = "UPDATE books SET amazon_url = ?, author = ?, language = ?, pages = ?, publisher = ?, title = ?, year = ? \
    WHERE isbn = ? \
    RETURNING isbn, amazon_url, author, language, pages, publisher, title, year";
const SELECT_BOOK: &str = "SELECT isbn, amazon_url, author, language, pages, publisher, title, year FROM books WHERE isbn = ?";
const SELECT_BOOKS: &str = "SELECT isbn, amazon_url, author, language, pages, publisher, title, year FROM books ORDER BY title";
const DELETE_BOOK: &str = "DELETE FROM books WHERE isbn = ?";

#[derive(Debug, Clone)]
pub struct SqliteBookRepository {
    pool: SqlitePool,
}

impl SqliteBookRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for SqliteBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        debug!(isbn = %entity.isbn, "inserting book");
        sqlx::query_as::<_, BookEntity>(INSERT_BOOK)
            .bind(&entity.isbn)
            .bind(&entity.amazon_url)
            .bind(&entity.author)
            .bind(&entity.language)
            .bind(entity.pages)
            .bind(&entity.publisher)
            .bind(&entity.title)
            .bind(entity.year)
            .fetch_one(&self.pool)
            .await.map_err(|err| map_create_error(entity.isbn.as_str(), err))
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        debug!(isbn = %entity.isbn, "updating book");
        sqlx::query_as::<_, BookEntity>(UPDATE_BOOK)
            .bind(&entity.amazon_url)
            .bind(&entity.author)
            .bind(&entity.language)
            .bind(entity.pages)
            .bind(&entity.publisher)
            .bind(&entity.title)
            .bind(entity.year)
            .bind(&entity.isbn)
            .fetch_optional(&self.pool)
            .await.map_err(LibraryError::from)?
            .ok_or_else(|| {
                warn!(isbn = %entity.isbn, "no book to update");
                LibraryError::book_not_found(entity.isbn.as_str())
            })
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        debug!(isbn = id, "loading book");
        sqlx::query_as::<_, BookEntity>(SELECT_BOOK)
            .bind(id)
            .fetch_optional(&self.pool)
            .await.map_err(LibraryError::from)?
            .ok_or_else(|| LibraryError::book_not_found(id))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        debug!(isbn = id, "deleting book");
        let res = sqlx::query(DELETE_BOOK)
            .bind(id)
            .execute(&self.pool)
            .await.map_err(LibraryError::from)?;
        match res.rows_affected() {
            0 => {
                warn!(isbn = id, "no book to delete");
                Err(LibraryError::book_not_found(id))
            }
            n => Ok(n as usize),
        }
    }

    async fn list(&self) -> LibraryResult<Vec<BookEntity>> {
        let books = sqlx::query_as::<_, BookEntity>(SELECT_BOOKS)
            .fetch_all(&self.pool)
            .await.map_err(LibraryError::from)?;
        debug!(count = books.len(), "listed books");
        Ok(books)
    }
}

impl BookRepository for SqliteBookRepository {}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePool;
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::sqlite_book_repository::SqliteBookRepository;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;
    use crate::utils::db::{build_sqlite_pool, create_table};

    async fn build_pool() -> SqlitePool {
        let pool = build_sqlite_pool(&Configuration::new("test")).await.expect("should build pool");
        create_table(&pool).await.expect("should create table");
        pool
    }

    #[tokio::test]
    async fn test_should_create_get_books() {
        let books_repo = SqliteBookRepository::new(build_pool().await);
        let book = BookEntity::new("1234567890", "test book", "John Doe");
        let saved = books_repo.create(&book).await.expect("should create book");
        assert_eq!(book, saved);

        let loaded = books_repo.get(book.isbn.as_str()).await.expect("should return book");
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_isbn() {
        let books_repo = SqliteBookRepository::new(build_pool().await);
        let book = BookEntity::new("1234567890", "test book", "John Doe");
        let _ = books_repo.create(&book).await.expect("should create book");

        let res = books_repo.create(&book).await;
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
    }

    #[tokio::test]
    async fn test_should_create_update_books() {
        let books_repo = SqliteBookRepository::new(build_pool().await);
        let mut book = BookEntity::new("1234567890", "test book", "John Doe");
        let _ = books_repo.create(&book).await.expect("should create book");

        book.title = "new title".to_string();
        book.pages = 412;
        let updated = books_repo.update(&book).await.expect("should update book");
        assert_eq!(book, updated);

        let loaded = books_repo.get(book.isbn.as_str()).await.expect("should return book");
        assert_eq!("new title", loaded.title.as_str());
        assert_eq!(412, loaded.pages);
    }

    #[tokio::test]
    async fn test_should_not_update_missing_book() {
        let books_repo = SqliteBookRepository::new(build_pool().await);
        let book = BookEntity::new("999", "test book", "John Doe");
        let res = books_repo.update(&book).await;
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
        assert!(books_repo.list().await.expect("should list").is_empty());
    }

    #[tokio::test]
    async fn test_should_not_delete_missing_book() {
        let books_repo = SqliteBookRepository::new(build_pool().await);
        let res = books_repo.delete("999").await;
        assert!(matches!(res, Err(LibraryError::NotFound { ref message }) if message.contains("'999'")));
    }

    #[tokio::test]
    async fn test_should_list_books_by_title() {
        let books_repo = SqliteBookRepository::new(build_pool().await);
        assert!(books_repo.list().await.expect("should list").is_empty());
        for (isbn, title) in [("3", "c"), ("1", "a"), ("2", "b")] {
            let _ = books_repo.create(&BookEntity::new(isbn, title, "author")).await.expect("should create book");
        }
        let titles: Vec<String> = books_repo.list().await.expect("should list")
            .into_iter().map(|b| b.title).collect();
        assert_eq!(vec!["a", "b", "c"], titles);
    }

    #[tokio::test]
    async fn test_should_create_delete_books() {
        let books_repo = SqliteBookRepository::new(build_pool().await);
        let book = BookEntity::new("1234567890", "test book", "John Doe");
        let _ = books_repo.create(&book).await.expect("should create book");

        let deleted = books_repo.delete(book.isbn.as_str()).await.expect("should delete book");
        assert_eq!(1, deleted);

        let loaded = books_repo.get(book.isbn.as_str()).await;
        assert!(matches!(loaded, Err(LibraryError::NotFound { .. })));
        let again = books_repo.delete(book.isbn.as_str()).await;
        assert!(matches!(again, Err(LibraryError::NotFound { .. })));
    }
}
