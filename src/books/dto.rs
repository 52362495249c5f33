use serde::{Deserialize, Serialize};

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn: String,
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i32,
    pub publisher: String,
    pub title: String,
    pub year: i32,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, author: &str) -> BookDto {
        BookDto {
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

    // copy of this book stored under another isbn, used when the path isbn wins over the body
    pub fn with_isbn(&self, isbn: &str) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            ..self.clone()
        }
    }
}
