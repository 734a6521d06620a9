//! The book catalog: the input collaborator that supplies candidate
//! items to the cart.
//!
//! The catalog is seeded in memory; there is no backing service. Browsing
//! applies the same pipeline the shop page exposes: text search over title
//! and author, a category filter, an inclusive price range, then a sort.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use paper_lantern_core::{CandidateItem, CurrencyCode, Price, ProductId};

/// Book categories offered by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Fiction,
    NonFiction,
    Romance,
    Mystery,
    SciFi,
    Biography,
}

impl Category {
    /// Every category, in the order the shop page lists them.
    pub const ALL: [Self; 6] = [
        Self::Fiction,
        Self::NonFiction,
        Self::Romance,
        Self::Mystery,
        Self::SciFi,
        Self::Biography,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fiction => "Fiction",
            Self::NonFiction => "Non-Fiction",
            Self::Romance => "Romance",
            Self::Mystery => "Mystery",
            Self::SciFi => "Sci-Fi",
            Self::Biography => "Biography",
        }
    }

    /// Machine form, matching the serde kebab-case names.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Fiction => "fiction",
            Self::NonFiction => "non-fiction",
            Self::Romance => "romance",
            Self::Mystery => "mystery",
            Self::SciFi => "sci-fi",
            Self::Biography => "biography",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.slug() == s)
            .ok_or_else(|| format!("invalid category: {s}"))
    }
}

/// A purchasable book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: ProductId,
    pub title: String,
    pub author: String,
    pub price: Price,
    /// Pre-discount price, shown struck through when present.
    pub original_price: Option<Price>,
    pub rating: f32,
    pub review_count: u32,
    pub image: String,
    pub category: Category,
    pub tags: Vec<String>,
}

impl From<&Book> for CandidateItem {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            image: book.image.clone(),
            price: book.price,
        }
    }
}

/// Filter parameters for a catalog browse.
#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    /// Case-insensitive substring match over title and author.
    pub search: Option<String>,
    /// `None` means all categories.
    pub category: Option<Category>,
    /// Inclusive lower price bound.
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound.
    pub max_price: Option<Decimal>,
}

impl BookFilter {
    fn matches(&self, book: &Book) -> bool {
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            if !book.title.to_lowercase().contains(&term)
                && !book.author.to_lowercase().contains(&term)
            {
                return false;
            }
        }
        if let Some(category) = self.category {
            if book.category != category {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if book.price.amount < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if book.price.amount > max {
                return false;
            }
        }
        true
    }
}

/// Sort orders for a catalog browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Catalog order, unsorted.
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    Rating,
    /// Descending id; newer entries carry higher ids.
    Newest,
}

/// The in-memory book catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// The demo catalog the shop page ships with.
    #[must_use]
    pub fn with_sample_books() -> Self {
        let mut catalog = Self::new();
        for book in sample_books() {
            catalog.insert(book);
        }
        catalog
    }

    /// Add a book to the catalog.
    pub fn insert(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Every book, in catalog order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Look up a book by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Filter and sort the catalog for a shop listing.
    #[must_use]
    pub fn browse(&self, filter: &BookFilter, sort: SortOrder) -> Vec<&Book> {
        let mut results: Vec<&Book> = self.books.iter().filter(|b| filter.matches(b)).collect();
        match sort {
            SortOrder::Featured => {}
            SortOrder::PriceLowToHigh => {
                results.sort_by_key(|b| b.price.amount);
            }
            SortOrder::PriceHighToLow => {
                results.sort_by_key(|b| std::cmp::Reverse(b.price.amount));
            }
            SortOrder::Rating => {
                results.sort_by(|a, b| {
                    b.rating.partial_cmp(&a.rating).unwrap_or(std::cmp::Ordering::Equal)
                });
            }
            SortOrder::Newest => {
                results.sort_by_key(|b| std::cmp::Reverse(b.id));
            }
        }
        results
    }
}

fn usd(cents: i64) -> Price {
    Price::from_cents(cents, CurrencyCode::USD)
}

#[allow(clippy::too_many_lines)]
fn sample_books() -> Vec<Book> {
    vec![
        Book {
            id: ProductId::new(1),
            title: "The Midnight Library".to_owned(),
            author: "Matt Haig".to_owned(),
            price: usd(2499),
            original_price: Some(usd(2999)),
            rating: 4.5,
            review_count: 1234,
            image: "https://images.unsplash.com/photo-1544947950-fa07a98d237f".to_owned(),
            category: Category::Fiction,
            tags: vec!["bestseller".to_owned(), "new".to_owned()],
        },
        Book {
            id: ProductId::new(2),
            title: "Atomic Habits".to_owned(),
            author: "James Clear".to_owned(),
            price: usd(1999),
            original_price: Some(usd(2499)),
            rating: 4.8,
            review_count: 5678,
            image: "https://images.unsplash.com/photo-1589998059171-988d887df646".to_owned(),
            category: Category::NonFiction,
            tags: vec!["bestseller".to_owned()],
        },
        Book {
            id: ProductId::new(3),
            title: "The Silent Patient".to_owned(),
            author: "Alex Michaelides".to_owned(),
            price: usd(2299),
            original_price: Some(usd(2699)),
            rating: 4.6,
            review_count: 3456,
            image: "https://images.unsplash.com/photo-1481627834876-b7833e8f5570".to_owned(),
            category: Category::Mystery,
            tags: vec!["new".to_owned()],
        },
        Book {
            id: ProductId::new(4),
            title: "Educated".to_owned(),
            author: "Tara Westover".to_owned(),
            price: usd(2199),
            original_price: Some(usd(2599)),
            rating: 4.7,
            review_count: 2345,
            image: "https://images.unsplash.com/photo-1543002588-bfa74002ed7e".to_owned(),
            category: Category::Biography,
            tags: vec!["bestseller".to_owned()],
        },
        Book {
            id: ProductId::new(5),
            title: "Where the Crawdads Sing".to_owned(),
            author: "Delia Owens".to_owned(),
            price: usd(1899),
            original_price: Some(usd(2299)),
            rating: 4.4,
            review_count: 3456,
            image: "https://images.unsplash.com/photo-1544947950-fa07a98d237f".to_owned(),
            category: Category::Fiction,
            tags: vec!["popular".to_owned()],
        },
        Book {
            id: ProductId::new(6),
            title: "The Seven Husbands of Evelyn Hugo".to_owned(),
            author: "Taylor Jenkins Reid".to_owned(),
            price: usd(2099),
            original_price: Some(usd(2499)),
            rating: 4.6,
            review_count: 2345,
            image: "https://images.unsplash.com/photo-1516975080664-ed2fc6a32937".to_owned(),
            category: Category::Romance,
            tags: vec!["new".to_owned()],
        },
    ]
}
