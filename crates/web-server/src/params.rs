//! Path-parameter validation.
//!
//! Parameters are taken as raw strings and checked here so every rejection
//! produces the same `{ "message": ... }` body, instead of the framework's
//! own rejection format. Validation always happens before any database
//! access.

use crate::error::ApiError;

/// Parses the `rating` path parameter: an integer in `[1, 5]` inclusive.
pub fn parse_rating(raw: &str) -> Result<i32, ApiError> {
    let rating: i32 = raw.trim().parse().map_err(|_| {
        ApiError::InvalidParameter("rating must be an integer between 1 and 5".to_string())
    })?;

    if !(1..=5).contains(&rating) {
        return Err(ApiError::InvalidParameter(
            "rating must be an integer between 1 and 5".to_string(),
        ));
    }

    Ok(rating)
}

/// Parses the `min`/`max` path parameters: two integers with `min <= max`.
pub fn parse_year_range(min_raw: &str, max_raw: &str) -> Result<(i32, i32), ApiError> {
    let min: i32 = min_raw.trim().parse().map_err(|_| {
        ApiError::InvalidParameter("min and max must be integers".to_string())
    })?;
    let max: i32 = max_raw.trim().parse().map_err(|_| {
        ApiError::InvalidParameter("min and max must be integers".to_string())
    })?;

    if min > max {
        return Err(ApiError::InvalidParameter(
            "min must not be greater than max".to_string(),
        ));
    }

    Ok((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_rating_in_range() {
        for rating in 1..=5 {
            assert_eq!(parse_rating(&rating.to_string()).unwrap(), rating);
        }
    }

    #[test]
    fn rejects_out_of_range_ratings() {
        assert!(parse_rating("0").is_err());
        assert!(parse_rating("6").is_err());
        assert!(parse_rating("-3").is_err());
    }

    #[test]
    fn rejects_non_numeric_rating() {
        assert!(parse_rating("abc").is_err());
        assert!(parse_rating("").is_err());
        assert!(parse_rating("4.5").is_err());
    }

    #[test]
    fn accepts_ordered_year_range() {
        assert_eq!(parse_year_range("1990", "2000").unwrap(), (1990, 2000));
        // A single-year range is valid.
        assert_eq!(parse_year_range("2000", "2000").unwrap(), (2000, 2000));
    }

    #[test]
    fn rejects_inverted_year_range() {
        assert!(parse_year_range("2000", "1990").is_err());
    }

    #[test]
    fn rejects_non_numeric_year_bounds() {
        assert!(parse_year_range("abc", "2000").is_err());
        assert!(parse_year_range("1990", "later").is_err());
    }
}
