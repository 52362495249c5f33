use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

// Every method maps to exactly one SQL statement.
#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity and return the stored row
    async fn create(&self, entity: &Entity) -> LibraryResult<Entity>;

    // replaces all mutable fields of an entity and return the stored row
    async fn update(&self, entity: &Entity) -> LibraryResult<Entity>;

    // get an entity
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity
    async fn delete(&self, id: &str) -> LibraryResult<usize>;

    // list all entities
    async fn list(&self) -> LibraryResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    Postgres,
    Sqlite,
}

impl RepositoryStore {
    pub fn parse(name: &str) -> LibraryResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(RepositoryStore::Postgres),
            "sqlite" => Ok(RepositoryStore::Sqlite),
            other => Err(LibraryError::validation(vec![format!("unknown store {:?}", other)])),
        }
    }

    pub fn from_url(url: &str) -> LibraryResult<Self> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(RepositoryStore::Postgres)
        } else if url.starts_with("sqlite:") {
            Ok(RepositoryStore::Sqlite)
        } else {
            Err(LibraryError::validation(vec![format!("unsupported database url {:?}", url)]))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_parse_store() {
        assert_eq!(RepositoryStore::Postgres, RepositoryStore::parse("Postgres").expect("postgres"));
        assert_eq!(RepositoryStore::Sqlite, RepositoryStore::parse("sqlite").expect("sqlite"));
        assert!(RepositoryStore::parse("mysql").is_err());
    }

    #[tokio::test]
    async fn test_should_infer_store_from_url() {
        assert_eq!(RepositoryStore::Postgres, RepositoryStore::from_url("postgresql://db/books").expect("pg"));
        assert_eq!(RepositoryStore::Sqlite, RepositoryStore::from_url("sqlite:books.db").expect("sqlite"));
        assert!(RepositoryStore::from_url("mysql://db").is_err());
    }
}
