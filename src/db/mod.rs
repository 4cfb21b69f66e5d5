mod drink_repository;
mod models;
mod trivia_repository;

use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel::RunQueryDsl;
use std::sync::Arc;

use crate::constants::DEFAULT_CATEGORIES;
use crate::errors::Error;

pub use drink_repository::*;
pub use models::*;
pub use trivia_repository::*;

#[derive(Clone, Debug)]
pub struct Database {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl Database {
    pub fn new(db_path: &str) -> Self {
        let manager = ConnectionManager::<SqliteConnection>::new(db_path);
        let pool = Pool::builder()
            .build(manager)
            .expect("Failed to create pool.");

        Database {
            pool: Arc::new(pool),
        }
    }

    /// Builds a database backed by a shared in-memory SQLite instance.
    ///
    /// The pool is capped at a single connection: every `:memory:` connection
    /// opens its own database, so a larger pool would hand out empty ones.
    pub fn new_in_memory() -> Self {
        let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
        let pool = Pool::builder()
            .max_size(1)
            .build(manager)
            .expect("Failed to create pool.");

        Database {
            pool: Arc::new(pool),
        }
    }

    pub fn get_conn(
        &self,
    ) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>, r2d2::Error> {
        self.pool.get()
    }

    /// Creates the tables if they do not exist yet and seeds the default
    /// category rows into an empty `categories` table.
    pub fn init_schema(&self) -> Result<(), Error> {
        let mut conn = self.get_conn()?;

        diesel::sql_query(
            "CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL
            )",
        )
        .execute(&mut conn)?;

        diesel::sql_query(
            "CREATE TABLE IF NOT EXISTS drinks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL UNIQUE,
                recipe TEXT NOT NULL
            )",
        )
        .execute(&mut conn)?;

        diesel::sql_query(
            "CREATE TABLE IF NOT EXISTS questions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                category INTEGER NOT NULL REFERENCES categories(id),
                difficulty INTEGER NOT NULL
            )",
        )
        .execute(&mut conn)?;

        let mut repo = TriviaRepository::new(&mut conn);
        if repo.all_categories()?.is_empty() {
            for label in DEFAULT_CATEGORIES {
                repo.insert_category(label)?;
            }
        }

        Ok(())
    }
}
