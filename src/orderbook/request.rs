//! Inbound event payloads: `OrderRequest` and `CancelRequest`.

use crate::{OrderId, OrderType, Price, Quantity, Side, SymbolId, Timestamp};

/// An inbound order event, as delivered to [`crate::Engine::on_order`].
///
/// `price` is ignored when `order_type` is [`OrderType::Market`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderRequest {
    pub id: OrderId,
    pub symbol: SymbolId,
    pub side: Side,
    pub order_type: OrderType,
    pub price: Price,
    pub qty: Quantity,
    pub ts: Timestamp,
}

impl OrderRequest {
    /// Build a resting-capable limit order request.
    pub fn limit(
        id: OrderId,
        symbol: SymbolId,
        side: Side,
        price: Price,
        qty: Quantity,
        ts: Timestamp,
    ) -> Self {
        Self {
            id,
            symbol,
            side,
            order_type: OrderType::Limit,
            price,
            qty,
            ts,
        }
    }

    /// Build a market order request. `price` is set to `Price(0)` and is
    /// never consulted by the matching walk.
    pub fn market(id: OrderId, symbol: SymbolId, side: Side, qty: Quantity, ts: Timestamp) -> Self {
        Self {
            id,
            symbol,
            side,
            order_type: OrderType::Market,
            price: Price(0),
            qty,
            ts,
        }
    }
}

/// An inbound cancel event, as delivered to [`crate::Engine::on_cancel`].
///
/// `symbol` is advisory: the engine resolves `id` through its own id index
/// and does not require `symbol` to match the book that actually owns it
/// (spec §9).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelRequest {
    pub id: OrderId,
    pub symbol: SymbolId,
    pub ts: Timestamp,
}

impl CancelRequest {
    pub fn new(id: OrderId, symbol: SymbolId, ts: Timestamp) -> Self {
        Self { id, symbol, ts }
    }
}
