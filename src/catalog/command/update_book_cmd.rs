use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use crate::books::dto::BookDto;
use crate::books::schema::validate_book;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// isbn comes from the path; the payload still has to pass the full schema
#[derive(Debug)]
pub struct UpdateBookCommandRequest {
    pub isbn: String,
    pub payload: Value,
}

impl UpdateBookCommandRequest {
    pub fn new(isbn: &str, payload: Value) -> Self {
        Self {
            isbn: isbn.to_string(),
            payload,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let book = validate_book(&req.payload)
            .map_err(|messages| CommandError::Validation { messages })?
            .with_isbn(req.isbn.as_str());
        self.catalog_service.update_book(&book).await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::books::dto::BookDto;
    use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_update_book() {
        let svc = factory::create_catalog_service(&Configuration::new("test")).await.expect("should build service");
        let update_cmd = UpdateBookCommand::new(svc.clone());

        let mut book = BookDto::new("1234567890", "test book", "John Doe");
        let _ = svc.add_book(&book).await.expect("should add book");

        book.amazon_url = "http://exampletest2.com".to_string();
        book.author = "Jane Doe".to_string();
        let payload = serde_json::to_value(&book).expect("should serialize");
        let res = update_cmd.execute(UpdateBookCommandRequest::new(book.isbn.as_str(), payload))
            .await.expect("should update book");
        assert_eq!(book, res.book);
    }

    #[tokio::test]
    async fn test_should_keep_path_isbn() {
        let svc = factory::create_catalog_service(&Configuration::new("test")).await.expect("should build service");
        let update_cmd = UpdateBookCommand::new(svc.clone());

        let book = BookDto::new("1234567890", "test book", "John Doe");
        let _ = svc.add_book(&book).await.expect("should add book");

        let payload = serde_json::to_value(book.with_isbn("other")).expect("should serialize");
        let res = update_cmd.execute(UpdateBookCommandRequest::new("1234567890", payload))
            .await.expect("should update book");
        assert_eq!("1234567890", res.book.isbn.as_str());
        assert!(svc.find_book_by_isbn("other").await.is_err());
    }

    #[tokio::test]
    async fn test_should_not_update_missing_book() {
        let svc = factory::create_catalog_service(&Configuration::new("test")).await.expect("should build service");
        let update_cmd = UpdateBookCommand::new(svc);

        let payload = serde_json::to_value(BookDto::new("999", "test book", "John Doe")).expect("should serialize");
        let res = update_cmd.execute(UpdateBookCommandRequest::new("999", payload)).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_validate_before_update() {
        let svc = factory::create_catalog_service(&Configuration::new("test")).await.expect("should build service");
        let update_cmd = UpdateBookCommand::new(svc);

        let res = update_cmd.execute(UpdateBookCommandRequest::new("999", json!({"title": 7}))).await;
        match res {
            Err(CommandError::Validation { messages }) => assert_eq!(8, messages.len()),
            other => panic!("unexpected {:?}", other),
        }
    }
}
