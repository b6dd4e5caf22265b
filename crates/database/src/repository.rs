use crate::DbError;
use async_trait::async_trait;
use core_types::BookRecord;
use sqlx::postgres::{PgPool, PgRow};
use sqlx::{Postgres, Row};

/// Storage abstraction consumed by the HTTP layer.
///
/// Handlers hold an `Arc<dyn BookStore>` instead of a concrete pool so that
/// tests can substitute an in-memory implementation.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Fetches every book whose rating average floors to `rating`.
    /// The result set may be empty; that is not an error at this layer.
    async fn get_by_rating(&self, rating: i32) -> Result<Vec<BookRecord>, DbError>;

    /// Deletes every book with `publication_year` in `[min, max]` inclusive
    /// and returns the number of rows removed.
    async fn delete_by_range(&self, min: i32, max: i32) -> Result<u64, DbError>;
}

/// The `BookRepository` provides a high-level, application-specific interface
/// to the database. It encapsulates all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    /// Creates a new `BookRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BookRepository {
    async fn get_by_rating(&self, rating: i32) -> Result<Vec<BookRecord>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT isbn13, authors, title, original_title, publication_year,
                   rating_avg, rating_count, rating_1_star, rating_2_star,
                   rating_3_star, rating_4_star, rating_5_star,
                   image_url, image_small_url
            FROM books
            WHERE FLOOR(rating_avg)::INT = $1
            ORDER BY isbn13 ASC
            "#,
        )
        .bind(rating)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_book_row).collect()
    }

    async fn delete_by_range(&self, min: i32, max: i32) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM books WHERE publication_year BETWEEN $1 AND $2")
            .bind(min)
            .bind(max)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

/// Maps a raw row onto a [`BookRecord`], checking every column.
///
/// A missing or mistyped column fails with `DbError::Mapping` naming the
/// offending column instead of propagating a default value.
fn map_book_row(row: &PgRow) -> Result<BookRecord, DbError> {
    Ok(BookRecord {
        isbn13: column(row, "isbn13")?,
        authors: column(row, "authors")?,
        title: column(row, "title")?,
        original_title: column(row, "original_title")?,
        publication_year: column(row, "publication_year")?,
        rating_avg: column(row, "rating_avg")?,
        rating_count: column(row, "rating_count")?,
        rating_1_star: column(row, "rating_1_star")?,
        rating_2_star: column(row, "rating_2_star")?,
        rating_3_star: column(row, "rating_3_star")?,
        rating_4_star: column(row, "rating_4_star")?,
        rating_5_star: column(row, "rating_5_star")?,
        image_url: column(row, "image_url")?,
        image_small_url: column(row, "image_small_url")?,
    })
}

fn column<'r, T>(row: &'r PgRow, column: &'static str) -> Result<T, DbError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(column)
        .map_err(|source| DbError::Mapping { column, source })
}
