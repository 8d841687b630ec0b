//! # Limit Order Book Engine
//!
//! An in-memory, single-threaded limit order book for one instrument:
//! two price-indexed order queues (ask/bid), a price-id index, an
//! order-owner index, and a participants index, kept in lock-step by a
//! matching loop that enforces price-time priority.
//!
//! ## Scope
//!
//! - Limit and market order submission, cancellation, and depth/scalar
//!   queries.
//! - Market-order decomposition into synthetic limit orders that walk
//!   the book at each sub-step's current best contra price.
//! - Snapshot/restore of the book's complete state.
//!
//! Out of scope: multi-instrument routing, fee schedules, self-trade
//! prevention, iceberg/stop/peg order types, auctions, and multi-threaded
//! concurrency. A host sharing one [`OrderBook`] across threads must wrap
//! every call in its own exclusive section (e.g. `std::sync::Mutex`).
//!
//! ## Example
//!
//! ```
//! use limit_order_book::{OrderBook, OrderKind, Side};
//! use rust_decimal::Decimal;
//!
//! let mut book = OrderBook::new();
//! book.submit_order(OrderKind::Limit, Side::Ask, 10, Decimal::from(101), 1)
//!     .unwrap();
//! let (order_id, events) = book
//!     .submit_order(OrderKind::Limit, Side::Bid, 5, Decimal::from(101), 2)
//!     .unwrap();
//! assert!(order_id > 0);
//! assert_eq!(events.len(), 3);
//! assert_eq!(book.total_volume_traded(), 5);
//! ```

pub mod orderbook;

pub mod prelude;

pub use orderbook::{
    OrderBook, OrderBookError, OrderBookSnapshot, OrderId, OrderKind, ParticipantId, Price,
    Quantity, Side, TradeEvent,
};
