//! A single-venue, single-threaded limit order matching engine implementing
//! price-time priority continuous double auction.
//!
//! The crate's only entry point is [`Engine`]: feed it [`OrderRequest`] and
//! [`CancelRequest`] events in arrival order and it returns the [`Fill`]s
//! each order produces. Everything else — books, price levels, the id
//! index — is internal bookkeeping reachable only through [`BookView`].
//!
//! ```
//! use auction_core::{Engine, OrderId, OrderRequest, Price, Quantity, Side, SymbolId, Timestamp};
//!
//! let mut engine = Engine::new();
//! let sym = SymbolId(1);
//!
//! engine
//!     .on_order(OrderRequest::limit(
//!         OrderId(1), sym, Side::Sell, Price(101), Quantity(10), Timestamp(1000),
//!     ))
//!     .unwrap();
//!
//! let fills = engine
//!     .on_order(OrderRequest::limit(
//!         OrderId(2), sym, Side::Buy, Price(102), Quantity(6), Timestamp(2000),
//!     ))
//!     .unwrap();
//!
//! assert_eq!(fills.len(), 1);
//! assert_eq!(fills[0].price, Price(101)); // maker-priced
//! ```

mod ids;
pub mod orderbook;
pub mod prelude;

pub use ids::{OrderId, OrderType, Price, Quantity, Side, SymbolId, Timestamp, TradeId};
pub use orderbook::{
    BookView, CancelRequest, Engine, EngineError, Fill, LevelInfo, OrderRequest,
    DEFAULT_STARTING_TRADE_ID,
};
