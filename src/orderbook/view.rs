//! Read-only view over a per-symbol book, for inspection by tests and
//! external reporting (spec.md §4.3.4). Market-data publication beyond
//! this is explicitly out of scope (spec.md §1).

use crate::orderbook::book::Book;
use crate::{Price, Side};

/// One level of depth: a price and the aggregate remaining quantity resting
/// there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelInfo {
    pub price: Price,
    pub total_qty: u64,
}

/// A read-only snapshot view over one symbol's book.
///
/// Borrows the book rather than copying it: cheap to construct, and always
/// reflects the book's current state for as long as the borrow lives.
pub struct BookView<'a> {
    book: &'a Book,
}

impl<'a> BookView<'a> {
    pub(crate) fn new(book: &'a Book) -> Self {
        Self { book }
    }

    pub fn best_bid(&self) -> Option<Price> {
        self.book.best_bid()
    }

    pub fn best_ask(&self) -> Option<Price> {
        self.book.best_ask()
    }

    /// Bid levels, best first (highest price first).
    pub fn bids(&self) -> impl Iterator<Item = LevelInfo> + '_ {
        self.book
            .levels_best_first(Side::Buy)
            .map(|(price, total_qty)| LevelInfo { price, total_qty })
    }

    /// Ask levels, best first (lowest price first).
    pub fn asks(&self) -> impl Iterator<Item = LevelInfo> + '_ {
        self.book
            .levels_best_first(Side::Sell)
            .map(|(price, total_qty)| LevelInfo { price, total_qty })
    }

    pub fn is_empty(&self) -> bool {
        self.book.is_empty()
    }
}
