//! Per-symbol order book: both sides of the market plus the auxiliary
//! index that makes cancel O(1).

use crate::orderbook::price_level::{PriceLevel, RestingOrder, Slot};
use crate::{OrderId, Price, Side, SymbolId};
use std::collections::{BTreeMap, HashMap};

/// Where a live order lives: which side, which price level, and its slot
/// handle within that level's arena. Held in [`Book::id_index`] so cancel
/// never has to search a level's FIFO.
#[derive(Debug, Clone, Copy)]
struct OrderLocation {
    side: Side,
    price: Price,
    slot: Slot,
}

/// Both sides of the market for one symbol, plus the id index.
///
/// Bid levels are keyed so the best bid is the maximum price; ask levels so
/// the best ask is the minimum price — `BTreeMap` gives both in O(log L)
/// without a separate sorted index, matching the complexity budget in
/// spec.md §4.2.
pub struct Book {
    symbol: SymbolId,
    bids: BTreeMap<Price, PriceLevel>,
    asks: BTreeMap<Price, PriceLevel>,
    id_index: HashMap<OrderId, OrderLocation>,
}

impl Book {
    pub fn new(symbol: SymbolId) -> Self {
        Self {
            symbol,
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
            id_index: HashMap::new(),
        }
    }

    pub fn symbol(&self) -> SymbolId {
        self.symbol
    }

    fn levels(&self, side: Side) -> &BTreeMap<Price, PriceLevel> {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    fn levels_mut(&mut self, side: Side) -> &mut BTreeMap<Price, PriceLevel> {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// Best bid price, or `None` if the bid side is empty.
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.keys().next_back().copied()
    }

    /// Best ask price, or `None` if the ask side is empty.
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.keys().next().copied()
    }

    /// Best price on `side`, in the direction that makes it the most
    /// aggressive resting price (max for bids, min for asks).
    pub fn best_price(&self, side: Side) -> Option<Price> {
        match side {
            Side::Buy => self.best_bid(),
            Side::Sell => self.best_ask(),
        }
    }

    /// Whether the opposing side (relative to a taker on `taker_side`) has
    /// any resting liquidity at all.
    pub fn opposite_is_empty(&self, taker_side: Side) -> bool {
        self.levels(taker_side.opposite()).is_empty()
    }

    /// Best price and head resting order on the opposing side for a taker
    /// on `taker_side`. `None` if that side is empty.
    pub fn peek_best(&self, taker_side: Side) -> Option<(Price, &RestingOrder)> {
        let opp = taker_side.opposite();
        let (&price, level) = self.levels(opp).iter().next_or_last(opp)?;
        level.head().map(|order| (price, order))
    }

    /// Apply a fill of `qty` to the head order of the opposing side's best
    /// level. Returns the id of the maker order if it was fully consumed,
    /// along with whether its level is now empty (and was removed).
    pub fn consume_best(&mut self, taker_side: Side, qty: u64) -> Option<OrderId> {
        let opp = taker_side.opposite();
        let price = match opp {
            Side::Buy => *self.bids.keys().next_back()?,
            Side::Sell => *self.asks.keys().next()?,
        };
        let levels = self.levels_mut(opp);
        let level = levels.get_mut(&price)?;
        let filled_id = level.consume_head(qty);

        if let Some(id) = filled_id {
            self.id_index.remove(&id);
        }
        if level.is_empty() {
            levels.remove(&price);
        }
        filled_id
    }

    /// Insert a residual order as a new resting order. Precondition: `id`
    /// is not already live anywhere in this book (checked by the engine
    /// before the matching walk begins).
    pub fn insert_resting(&mut self, order: RestingOrder) {
        debug_assert!(
            !self.id_index.contains_key(&order.id),
            "insert_resting precondition violated: id already live"
        );
        let side = order.side;
        let price = order.price;
        let level = self
            .levels_mut(side)
            .entry(price)
            .or_insert_with(|| PriceLevel::new(side, price));
        let slot = level.append(order);
        self.id_index.insert(order.id, OrderLocation { side, price, slot });
    }

    /// Remove a live resting order by id. Returns `true` iff an order was
    /// removed; `false` if `id` was not live (idempotent, per spec §4.2).
    pub fn cancel(&mut self, id: OrderId) -> bool {
        let Some(loc) = self.id_index.remove(&id) else {
            return false;
        };
        let levels = self.levels_mut(loc.side);
        if let Some(level) = levels.get_mut(&loc.price) {
            level.remove(loc.slot);
            if level.is_empty() {
                levels.remove(&loc.price);
            }
        }
        true
    }

    /// Whether `id` is currently live in this book.
    pub fn contains(&self, id: OrderId) -> bool {
        self.id_index.contains_key(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Per-side iteration over `(price, total_qty)` in best-first order,
    /// for read-only inspection (spec.md §4.3.4). See [`crate::BookView`].
    pub fn levels_best_first(&self, side: Side) -> impl Iterator<Item = (Price, u64)> + '_ {
        let iter: Box<dyn Iterator<Item = (&Price, &PriceLevel)>> = match side {
            Side::Buy => Box::new(self.bids.iter().rev()),
            Side::Sell => Box::new(self.asks.iter()),
        };
        iter.map(|(&price, level)| (price, level.total_qty().0))
    }

    #[cfg(test)]
    pub(crate) fn id_index_len(&self) -> usize {
        self.id_index.len()
    }
}

/// Tiny helper so `peek_best` reads the same regardless of which side the
/// taker opposes: bids iterate from the back (max first), asks from the
/// front (min first).
trait BestFirst<'a> {
    fn next_or_last(self, side: Side) -> Option<(&'a Price, &'a PriceLevel)>;
}

impl<'a, I> BestFirst<'a> for I
where
    I: DoubleEndedIterator<Item = (&'a Price, &'a PriceLevel)>,
{
    fn next_or_last(mut self, side: Side) -> Option<(&'a Price, &'a PriceLevel)> {
        match side {
            Side::Buy => self.next_back(),
            Side::Sell => self.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Quantity, Timestamp};

    fn resting(id: u64, side: Side, price: i64, qty: u64, seq: u64) -> RestingOrder {
        RestingOrder {
            id: OrderId(id),
            side,
            price: Price(price),
            remaining_qty: Quantity(qty),
            arrival_ts: Timestamp(0),
            arrival_seq: seq,
        }
    }

    #[test]
    fn best_bid_is_max_best_ask_is_min() {
        let mut book = Book::new(SymbolId(1));
        book.insert_resting(resting(1, Side::Buy, 99, 5, 0));
        book.insert_resting(resting(2, Side::Buy, 101, 5, 1));
        book.insert_resting(resting(3, Side::Sell, 105, 5, 2));
        book.insert_resting(resting(4, Side::Sell, 103, 5, 3));

        assert_eq!(book.best_bid(), Some(Price(101)));
        assert_eq!(book.best_ask(), Some(Price(103)));
    }

    #[test]
    fn cancel_removes_order_and_empty_level() {
        let mut book = Book::new(SymbolId(1));
        book.insert_resting(resting(1, Side::Sell, 101, 5, 0));

        assert!(book.cancel(OrderId(1)));
        assert_eq!(book.best_ask(), None);
        assert!(book.is_empty());
        assert_eq!(book.id_index_len(), 0);
    }

    #[test]
    fn cancel_unknown_id_returns_false_and_changes_nothing() {
        let mut book = Book::new(SymbolId(1));
        book.insert_resting(resting(1, Side::Sell, 101, 5, 0));

        assert!(!book.cancel(OrderId(42)));
        assert_eq!(book.best_ask(), Some(Price(101)));
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut book = Book::new(SymbolId(1));
        book.insert_resting(resting(1, Side::Sell, 101, 5, 0));

        assert!(book.cancel(OrderId(1)));
        assert!(!book.cancel(OrderId(1)));
    }

    #[test]
    fn consume_best_pops_level_when_fully_drained() {
        let mut book = Book::new(SymbolId(1));
        book.insert_resting(resting(1, Side::Sell, 100, 3, 0));

        let popped = book.consume_best(Side::Buy, 3);
        assert_eq!(popped, Some(OrderId(1)));
        assert_eq!(book.best_ask(), None);
    }

    #[test]
    fn levels_best_first_orders_bids_descending_and_asks_ascending() {
        let mut book = Book::new(SymbolId(1));
        book.insert_resting(resting(1, Side::Buy, 99, 5, 0));
        book.insert_resting(resting(2, Side::Buy, 101, 5, 1));
        book.insert_resting(resting(3, Side::Sell, 105, 5, 2));
        book.insert_resting(resting(4, Side::Sell, 103, 5, 3));

        let bids: Vec<_> = book.levels_best_first(Side::Buy).collect();
        assert_eq!(bids, vec![(Price(101), 5), (Price(99), 5)]);

        let asks: Vec<_> = book.levels_best_first(Side::Sell).collect();
        assert_eq!(asks, vec![(Price(103), 5), (Price(105), 5)]);
    }
}
