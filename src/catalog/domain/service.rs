use async_trait::async_trait;
use tracing::{debug, info};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let saved = self.book_repository.create(&BookEntity::from(book)).await?;
        info!(isbn = %saved.isbn, "book added");
        Ok(BookDto::from(&saved))
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<()> {
        let _ = self.book_repository.delete(isbn).await?;
        info!(isbn, "book removed");
        Ok(())
    }

    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let saved = self.book_repository.update(&BookEntity::from(book)).await?;
        info!(isbn = %saved.isbn, "book updated");
        Ok(BookDto::from(&saved))
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        debug!(isbn, "finding book");
        self.book_repository.get(isbn).await.map(|b| BookDto::from(&b))
    }

    async fn find_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.list().await?;
        debug!(count = res.len(), "listed books");
        Ok(res.iter().map(BookDto::from).collect())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            amazon_url: other.amazon_url.to_string(),
            author: other.author.to_string(),
            language: other.language.to_string(),
            pages: other.pages,
            publisher: other.publisher.to_string(),
            title: other.title.to_string(),
            year: other.year,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            amazon_url: other.amazon_url.to_string(),
            author: other.author.to_string(),
            language: other.language.to_string(),
            pages: other.pages,
            publisher: other.publisher.to_string(),
            title: other.title.to_string(),
            year: other.year,
        }
    }
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::dto::BookDto;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;

    async fn build_service() -> Arc<dyn CatalogService> {
        factory::create_catalog_service(&Configuration::new("test")).await.expect("should build service")
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let catalog_svc = build_service().await;

        let book = BookDto::new("1234567890", "test book", "John Doe");
        let saved = catalog_svc.add_book(&book).await.expect("should add book");
        assert_eq!(book, saved);

        let loaded = catalog_svc.find_book_by_isbn(book.isbn.as_str()).await.expect("should return book");
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let catalog_svc = build_service().await;

        let mut book = BookDto::new("1234567890", "test book", "John Doe");
        let _ = catalog_svc.add_book(&book).await.expect("should add book");

        book.title = "new title".to_string();
        book.year = 2020;
        let _ = catalog_svc.update_book(&book).await.expect("should update book");

        let loaded = catalog_svc.find_book_by_isbn(book.isbn.as_str()).await.expect("should return book");
        assert_eq!("new title", loaded.title.as_str());
        assert_eq!(2020, loaded.year);
    }

    #[tokio::test]
    async fn test_should_find_books() {
        let catalog_svc = build_service().await;

        let book = BookDto::new("isbn981", "test book", "John Doe");
        let _ = catalog_svc.add_book(&book).await.expect("should add book");
        let res = catalog_svc.find_books().await.expect("should return books");
        assert_eq!(vec![book], res);
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let catalog_svc = build_service().await;

        let book = BookDto::new("isbn123", "test book", "John Doe");
        let _ = catalog_svc.add_book(&book).await.expect("should add book");

        let _ = catalog_svc.remove_book(book.isbn.as_str()).await.expect("should remove book");

        let loaded = catalog_svc.find_book_by_isbn(book.isbn.as_str()).await;
        assert!(matches!(loaded, Err(LibraryError::NotFound { .. })));
        assert!(catalog_svc.find_books().await.expect("should return books").is_empty());
    }
}
