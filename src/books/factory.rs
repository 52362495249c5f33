use crate::books::repository::BookRepository;
use crate::books::repository::pg_book_repository::PgBookRepository;
use crate::books::repository::sqlite_book_repository::SqliteBookRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;
use crate::utils::db::{build_pg_pool, build_sqlite_pool, create_table};

pub async fn create_book_repository(config: &Configuration) -> LibraryResult<Box<dyn BookRepository>> {
    match config.store {
        RepositoryStore::Postgres => {
            let pool = build_pg_pool(config).await?;
            create_table(&pool).await?;
            Ok(Box::new(PgBookRepository::new(pool)))
        }
        RepositoryStore::Sqlite => {
            let pool = build_sqlite_pool(config).await?;
            create_table(&pool).await?;
            Ok(Box::new(SqliteBookRepository::new(pool)))
        }
    }
}
