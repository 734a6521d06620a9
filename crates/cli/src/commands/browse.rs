//! Catalog browsing command.
//!
//! Applies the same filter pipeline the shop page uses and prints one
//! line per book.

#![allow(clippy::print_stdout)]

use rust_decimal::Decimal;
use thiserror::Error;

use paper_lantern_storefront::catalog::{BookFilter, Catalog, Category, SortOrder};

/// Errors from argument parsing.
#[derive(Debug, Error)]
pub enum BrowseError {
    /// Unknown category value.
    #[error("Invalid category: {0}. Valid: fiction, non-fiction, romance, mystery, sci-fi, biography")]
    InvalidCategory(String),

    /// Unknown sort value.
    #[error("Invalid sort: {0}. Valid: featured, price-low, price-high, rating, newest")]
    InvalidSort(String),

    /// Unparsable price bound.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),
}

/// Print the catalog, filtered and sorted.
///
/// # Errors
///
/// Returns [`BrowseError`] if a flag value cannot be parsed.
pub fn run(
    category: Option<&str>,
    search: Option<String>,
    sort: &str,
    max_price: Option<&str>,
) -> Result<(), BrowseError> {
    let category = category
        .map(|raw| {
            raw.parse::<Category>()
                .map_err(|_| BrowseError::InvalidCategory(raw.to_owned()))
        })
        .transpose()?;

    let sort = parse_sort(sort)?;

    let max_price = max_price
        .map(|raw| {
            raw.parse::<Decimal>()
                .map_err(|_| BrowseError::InvalidPrice(raw.to_owned()))
        })
        .transpose()?;

    let filter = BookFilter {
        search,
        category,
        min_price: None,
        max_price,
    };

    let catalog = Catalog::with_sample_books();
    let results = catalog.browse(&filter, sort);
    tracing::debug!(hits = results.len(), "catalog browse");

    if results.is_empty() {
        println!("No books match.");
        return Ok(());
    }
    for book in results {
        println!(
            "#{:<3} {:<40} {:<22} {:>8}  {} ({} reviews)  [{}]",
            book.id,
            book.title,
            book.author,
            book.price.display(),
            book.rating,
            book.review_count,
            book.category,
        );
    }
    Ok(())
}

fn parse_sort(raw: &str) -> Result<SortOrder, BrowseError> {
    match raw {
        "featured" => Ok(SortOrder::Featured),
        "price-low" => Ok(SortOrder::PriceLowToHigh),
        "price-high" => Ok(SortOrder::PriceHighToLow),
        "rating" => Ok(SortOrder::Rating),
        "newest" => Ok(SortOrder::Newest),
        _ => Err(BrowseError::InvalidSort(raw.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort() {
        assert!(matches!(parse_sort("price-low"), Ok(SortOrder::PriceLowToHigh)));
        assert!(parse_sort("alphabetical").is_err());
    }
}
