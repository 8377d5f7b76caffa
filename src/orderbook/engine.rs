//! The matching engine: event dispatch, identifier/clock discipline, and
//! the per-symbol book map (spec.md §4.3).

use crate::orderbook::book::Book;
use crate::orderbook::matching::run_walk;
use crate::orderbook::price_level::RestingOrder;
use crate::{
    BookView, CancelRequest, EngineError, Fill, OrderId, OrderRequest, OrderType, Quantity,
    SymbolId, Timestamp, TradeId,
};
use std::collections::HashMap;
use tracing::{trace, warn};

/// Default starting value for `trade_id`, per spec.md §4.3.1.
pub const DEFAULT_STARTING_TRADE_ID: u64 = 100_000_000;

/// Dispatches `OrderRequest`/`CancelRequest` events against a collection of
/// per-symbol books, minting trade ids and engine time as it goes.
///
/// `trade_id`, `engine_time`, and `arrival_seq` live on the `Engine`
/// instance rather than as process-wide statics, so multiple isolated
/// engines can coexist in one process (spec.md §9).
pub struct Engine {
    books: HashMap<SymbolId, Book>,
    /// Global liveness index: every order id currently resting anywhere,
    /// mapped to the symbol that owns it. Backs the `DuplicateOrderId`
    /// check (ids are unique among live orders *globally*, spec.md §3) and
    /// lets `on_cancel` resolve `id` without trusting the advisory `symbol`
    /// field on `CancelRequest` (spec.md §9).
    live_orders: HashMap<OrderId, SymbolId>,
    next_trade_id: u64,
    engine_time: i64,
    next_arrival_seq: u64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// A fresh engine with the default starting `trade_id`
    /// ([`DEFAULT_STARTING_TRADE_ID`]).
    pub fn new() -> Self {
        Self::with_starting_trade_id(TradeId(DEFAULT_STARTING_TRADE_ID))
    }

    /// A fresh engine that mints its first `trade_id` from `start`.
    pub fn with_starting_trade_id(start: TradeId) -> Self {
        Self {
            books: HashMap::new(),
            live_orders: HashMap::new(),
            next_trade_id: start.0,
            engine_time: 0,
            next_arrival_seq: 0,
        }
    }

    fn mint_arrival_seq(&mut self) -> u64 {
        let seq = self.next_arrival_seq;
        self.next_arrival_seq += 1;
        seq
    }

    /// Current engine time, i.e. the number of accepted inbound events so
    /// far (monotonically non-decreasing, spec.md §4.3.1).
    pub fn engine_time(&self) -> i64 {
        self.engine_time
    }

    /// Dispatch one order event: run the matching walk against the book for
    /// `req.symbol` (created on first use) and return the fills produced in
    /// emission order.
    ///
    /// Rejects (no state change, no fills) a duplicate live id or a zero
    /// quantity, per spec.md §7.
    pub fn on_order(&mut self, req: OrderRequest) -> Result<Vec<Fill>, EngineError> {
        if req.qty.0 == 0 {
            warn!(order = req.id.0, "rejected: zero quantity");
            return Err(EngineError::ZeroQuantity(req.id));
        }
        if self.live_orders.contains_key(&req.id) {
            warn!(order = req.id.0, "rejected: duplicate order id");
            return Err(EngineError::DuplicateOrderId(req.id));
        }

        self.engine_time += 1;
        let ts = Timestamp(self.engine_time);
        trace!(
            order = req.id.0,
            symbol = req.symbol.0,
            side = %req.side,
            kind = %req.order_type,
            price = req.price.0,
            qty = req.qty.0,
            "on_order"
        );

        let book = self
            .books
            .entry(req.symbol)
            .or_insert_with(|| Book::new(req.symbol));

        // Disjoint closure captures (2021+) let these borrow just
        // `self.next_trade_id` / `self.live_orders` rather than all of
        // `self`, so they don't conflict with `book`'s borrow of
        // `self.books`.
        let next_trade_id = &mut self.next_trade_id;
        let live_orders = &mut self.live_orders;
        let walk = run_walk(
            book,
            &req,
            ts,
            || {
                let id = *next_trade_id;
                *next_trade_id += 1;
                TradeId(id)
            },
            |maker_id| {
                live_orders.remove(&maker_id);
            },
        )?;

        if walk.residual_qty > 0 {
            match req.order_type {
                OrderType::Limit => {
                    let seq = self.mint_arrival_seq();
                    let resting = RestingOrder {
                        id: req.id,
                        side: req.side,
                        price: req.price,
                        remaining_qty: Quantity(walk.residual_qty),
                        arrival_ts: req.ts,
                        arrival_seq: seq,
                    };
                    book.insert_resting(resting);
                    self.live_orders.insert(req.id, req.symbol);
                    trace!(order = req.id.0, qty = walk.residual_qty, "rests on book");
                }
                OrderType::Market => {
                    trace!(
                        order = req.id.0,
                        discarded = walk.residual_qty,
                        "market residual discarded"
                    );
                }
            }
        }

        Ok(walk.fills)
    }

    /// Dispatch one cancel event. Returns `true` iff a live order was
    /// removed. `symbol` on `req` is advisory only — cancellation resolves
    /// `id` through the engine's own liveness index (spec.md §9).
    ///
    /// `engine_time` advances regardless of outcome (spec.md §4.3.3).
    pub fn on_cancel(&mut self, req: CancelRequest) -> bool {
        self.engine_time += 1;

        let Some(&owner) = self.live_orders.get(&req.id) else {
            warn!(order = req.id.0, "cancel of unknown id");
            return false;
        };

        let removed = self
            .books
            .get_mut(&owner)
            .map(|book| book.cancel(req.id))
            .unwrap_or(false);

        if removed {
            self.live_orders.remove(&req.id);
            trace!(order = req.id.0, "cancelled");
        }
        removed
    }

    /// Read-only view over the book for `symbol`, or `None` if no event has
    /// ever touched that symbol.
    pub fn book(&self, symbol: SymbolId) -> Option<BookView<'_>> {
        self.books.get(&symbol).map(BookView::new)
    }

    /// Whether `id` is currently live anywhere in the engine.
    pub fn is_live(&self, id: OrderId) -> bool {
        self.live_orders.contains_key(&id)
    }
}
