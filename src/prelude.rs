/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/10/25
******************************************************************************/

//! Prelude module that re-exports commonly used types and traits.
//!
//! This module provides a convenient way to import the most commonly used
//! types from this crate. Instead of importing each type individually, you
//! can use:
//!
//! ```rust
//! use limit_order_book::prelude::*;
//! ```
//!
//! This will import everything needed to submit orders, cancel them, read
//! the book's depth and scalars, and snapshot/restore its state.

pub use crate::orderbook::{
    OrderBook, OrderBookError, OrderBookSnapshot, OrderId, OrderKind, ParticipantId, Price,
    Quantity, Side, TradeEvent,
};
