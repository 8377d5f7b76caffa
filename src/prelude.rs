//! Convenience re-export of the types most callers need.
//!
//! ```
//! use auction_core::prelude::*;
//! ```

pub use crate::{
    BookView, CancelRequest, Engine, EngineError, Fill, LevelInfo, OrderId, OrderRequest,
    OrderType, Price, Quantity, Side, SymbolId, Timestamp, TradeId,
};
