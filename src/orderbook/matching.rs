//! The core matching walk: price-time priority, maker-priced execution,
//! multi-level sweep (spec.md §4.3.2).

use crate::orderbook::book::Book;
use crate::orderbook::price_level::RestingOrder;
use crate::{EngineError, Fill, OrderRequest, OrderType, Price, Quantity, Side, TradeId};
use tracing::trace;

/// Outcome of running the matching walk for one `OrderRequest` against its
/// book: the fills produced, in emission order, and the residual quantity
/// left over (zero if the taker was fully filled).
pub(crate) struct WalkResult {
    pub fills: Vec<Fill>,
    pub residual_qty: u64,
}

/// Run the matching walk described in spec.md §4.3.2 against `book`.
///
/// `mint_trade_id` mints one `TradeId` per emitted fill; `on_maker_filled`
/// is called once for every maker order fully consumed during the walk, so
/// the caller can keep its global live-order index in sync.
pub(crate) fn run_walk(
    book: &mut Book,
    req: &OrderRequest,
    ts: crate::Timestamp,
    mut mint_trade_id: impl FnMut() -> TradeId,
    mut on_maker_filled: impl FnMut(crate::OrderId),
) -> Result<WalkResult, EngineError> {
    if req.qty.0 == 0 {
        return Err(EngineError::ZeroQuantity(req.id));
    }

    let mut fills = Vec::new();
    let mut remaining = req.qty.0;

    while remaining > 0 {
        let Some((best_price, maker)) = peek_best_copy(book, req.side) else {
            break;
        };

        if !crosses(req.order_type, req.side, req.price, best_price) {
            break;
        }

        let trade_qty = remaining.min(maker.remaining_qty.0);
        let trade_id = mint_trade_id();
        let fill = Fill {
            trade_id,
            taker_id: req.id,
            maker_id: maker.id,
            symbol: req.symbol,
            taker_side: req.side,
            price: best_price,
            qty: Quantity(trade_qty),
            ts,
        };
        trace!(
            trade_id = fill.trade_id.0,
            taker = fill.taker_id.0,
            maker = fill.maker_id.0,
            price = fill.price.0,
            qty = fill.qty.0,
            "fill"
        );
        fills.push(fill);

        remaining -= trade_qty;
        if let Some(filled_id) = book.consume_best(req.side, trade_qty) {
            on_maker_filled(filled_id);
        }
    }

    Ok(WalkResult {
        fills,
        residual_qty: remaining,
    })
}

/// Copy the head maker order at the opposing side's best price out of the
/// book. Returns an owned copy (`RestingOrder` is `Copy`) so the borrow of
/// `book` ends before the caller needs a `&mut` reference to mutate it.
fn peek_best_copy(book: &Book, taker_side: Side) -> Option<(Price, RestingOrder)> {
    book.peek_best(taker_side).map(|(price, order)| (price, *order))
}

/// The crossing test from spec.md §4.3.2 step (b).
fn crosses(order_type: OrderType, side: Side, limit_price: Price, best: Price) -> bool {
    match order_type {
        OrderType::Market => true,
        OrderType::Limit => match side {
            Side::Buy => limit_price >= best,
            Side::Sell => limit_price <= best,
        },
    }
}
