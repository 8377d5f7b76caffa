//! Concrete scenarios S1-S6 against a fresh [`Engine`].

use auction_core::{CancelRequest, Engine, OrderId, OrderRequest, Price, Quantity, Side, SymbolId, Timestamp};

const SYM: SymbolId = SymbolId(1);

fn limit_buy(id: u64, px: i64, qty: u64, ts: i64) -> OrderRequest {
    OrderRequest::limit(OrderId(id), SYM, Side::Buy, Price(px), Quantity(qty), Timestamp(ts))
}

fn limit_sell(id: u64, px: i64, qty: u64, ts: i64) -> OrderRequest {
    OrderRequest::limit(OrderId(id), SYM, Side::Sell, Price(px), Quantity(qty), Timestamp(ts))
}

fn market_buy(id: u64, qty: u64, ts: i64) -> OrderRequest {
    OrderRequest::market(OrderId(id), SYM, Side::Buy, Quantity(qty), Timestamp(ts))
}

fn cancel(id: u64, ts: i64) -> CancelRequest {
    CancelRequest::new(OrderId(id), SYM, Timestamp(ts))
}

#[test]
fn s1_partial_cross_remainder_rests_then_market_sweep() {
    let mut engine = Engine::new();

    let fills = engine.on_order(limit_sell(1, 101, 10, 1000)).unwrap();
    assert!(fills.is_empty());

    let fills = engine.on_order(limit_buy(2, 102, 6, 2000)).unwrap();
    assert_eq!(fills.len(), 1);
    assert_eq!(fills[0].maker_id, OrderId(1));
    assert_eq!(fills[0].taker_id, OrderId(2));
    assert_eq!(fills[0].price, Price(101));
    assert_eq!(fills[0].qty, Quantity(6));
    assert_eq!(fills[0].taker_side, Side::Buy);

    let fills = engine.on_order(market_buy(3, 10, 3000)).unwrap();
    assert_eq!(fills.len(), 1);
    assert_eq!(fills[0].maker_id, OrderId(1));
    assert_eq!(fills[0].taker_id, OrderId(3));
    assert_eq!(fills[0].price, Price(101));
    assert_eq!(fills[0].qty, Quantity(4));
}

#[test]
fn s2_market_buy_sweeps_levels_in_price_order() {
    let mut engine = Engine::new();
    engine.on_order(limit_sell(1, 100, 3, 1000)).unwrap();
    engine.on_order(limit_sell(2, 101, 4, 2000)).unwrap();

    let fills = engine.on_order(market_buy(3, 5, 3000)).unwrap();
    assert_eq!(fills.len(), 2);
    assert_eq!(fills[0].maker_id, OrderId(1));
    assert_eq!(fills[0].price, Price(100));
    assert_eq!(fills[0].qty, Quantity(3));
    assert_eq!(fills[1].maker_id, OrderId(2));
    assert_eq!(fills[1].price, Price(101));
    assert_eq!(fills[1].qty, Quantity(2));
}

#[test]
fn s3_price_time_priority_within_a_level() {
    let mut engine = Engine::new();
    engine.on_order(limit_sell(1, 100, 1, 1000)).unwrap();
    engine.on_order(limit_sell(2, 100, 2, 2000)).unwrap();

    let fills = engine.on_order(market_buy(3, 2, 3000)).unwrap();
    assert_eq!(fills.len(), 2);
    assert_eq!(fills[0].maker_id, OrderId(1));
    assert_eq!(fills[0].qty, Quantity(1));
    assert_eq!(fills[1].maker_id, OrderId(2));
    assert_eq!(fills[1].qty, Quantity(1));
}

#[test]
fn s4_maker_priced_aggressive_cross() {
    let mut engine = Engine::new();
    engine.on_order(limit_buy(1, 101, 4, 1000)).unwrap();

    let fills = engine.on_order(limit_sell(2, 100, 2, 2000)).unwrap();
    assert_eq!(fills.len(), 1);
    assert_eq!(fills[0].maker_id, OrderId(1));
    assert_eq!(fills[0].taker_id, OrderId(2));
    assert_eq!(fills[0].price, Price(101));
    assert_eq!(fills[0].qty, Quantity(2));
    assert_eq!(fills[0].taker_side, Side::Sell);
}

#[test]
fn s5_cancel_removes_resting_order() {
    let mut engine = Engine::new();
    engine.on_order(limit_sell(1, 101, 5, 1000)).unwrap();

    assert!(engine.on_cancel(cancel(1, 1500)));

    let fills = engine.on_order(market_buy(2, 5, 2000)).unwrap();
    assert!(fills.is_empty());
}

#[test]
fn s6_cancel_of_unknown_id() {
    let mut engine = Engine::new();
    assert!(!engine.on_cancel(cancel(42, 1000)));
}
