//! The `Fill` record emitted by the matching walk.

use crate::{OrderId, Price, Quantity, Side, SymbolId, TradeId, Timestamp};
use serde::Serialize;

/// One executed trade, always priced at the maker's resting price.
///
/// Fills are values: the engine returns them from `on_order` and retains no
/// copy of its own (spec §3, Fill lifecycle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fill {
    pub trade_id: TradeId,
    pub taker_id: OrderId,
    pub maker_id: OrderId,
    pub symbol: SymbolId,
    pub taker_side: Side,
    pub price: Price,
    pub qty: Quantity,
    pub ts: Timestamp,
}
