use serde::{Deserialize, Serialize};

/// A single row of the `books` table, exactly as stored.
///
/// The primary identity is `isbn13`. Rows are immutable except via delete,
/// so this struct never carries partial updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub isbn13: i64,
    pub authors: String,
    pub title: String,
    pub original_title: String,
    pub publication_year: i32,
    pub rating_avg: f64,
    pub rating_count: i32,
    pub rating_1_star: i32,
    pub rating_2_star: i32,
    pub rating_3_star: i32,
    pub rating_4_star: i32,
    pub rating_5_star: i32,
    pub image_url: String,
    pub image_small_url: String,
}

/// The aggregated rating block of the public book shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ratings {
    pub average: f64,
    pub count: i32,
    pub rating_1: i32,
    pub rating_2: i32,
    pub rating_3: i32,
    pub rating_4: i32,
    pub rating_5: i32,
}

/// Cover image URLs of the public book shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icons {
    pub large: String,
    pub small: String,
}

/// The externally exposed view of a book.
///
/// A read-only projection of a [`BookRecord`]; it has no lifecycle of its
/// own and is rebuilt from the stored row on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub isbn13: i64,
    pub authors: String,
    pub publication: i32,
    pub original_title: String,
    pub title: String,
    pub ratings: Ratings,
    pub icons: Icons,
}

impl From<BookRecord> for Book {
    fn from(record: BookRecord) -> Self {
        Self {
            isbn13: record.isbn13,
            authors: record.authors,
            publication: record.publication_year,
            original_title: record.original_title,
            title: record.title,
            ratings: Ratings {
                average: record.rating_avg,
                count: record.rating_count,
                rating_1: record.rating_1_star,
                rating_2: record.rating_2_star,
                rating_3: record.rating_3_star,
                rating_4: record.rating_4_star,
                rating_5: record.rating_5_star,
            },
            icons: Icons {
                large: record.image_url,
                small: record.image_small_url,
            },
        }
    }
}
