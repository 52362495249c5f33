use serde::{Deserialize, Serialize};

// BookEntity is a row of the books table, keyed by isbn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct BookEntity {
    pub isbn: String,
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i32,
    pub publisher: String,
    pub title: String,
    pub year: i32,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            amazon_url: format!("http://example.com/{}", isbn),
            author: author.to_string(),
            language: "English".to_string(),
            pages: 300,
            publisher: "Publisher Inc.".to_string(),
            title: title.to_string(),
            year: 2017,
        }
    }
}
