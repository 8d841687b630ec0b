//! Core value types shared across the order book: identifiers, sides, and
//! the two submission kinds the matching engine accepts.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price of an order or a price level. Decimal, not floating point, so that
/// fractional prices (e.g. `12.5`) compare and sum exactly.
pub type Price = Decimal;

/// Remaining or requested size of an order. Always non-negative; an order's
/// `Quantity` is > 0 for as long as the order is live (I1).
pub type Quantity = u64;

/// Caller-chosen identifier for a participant submitting orders.
pub type ParticipantId = u64;

/// A monotonically increasing, globally unique order identifier (I8).
///
/// Ids are never reused, including for the synthetic limit orders
/// generated by market-order decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl OrderId {
    /// Sentinel id returned by `submit_order` when a market order is
    /// rejected for lack of contra-side liquidity.
    pub const REJECTED: i64 = -1;

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<OrderId> for i64 {
    fn from(id: OrderId) -> Self {
        id.0 as i64
    }
}

/// Sell (ask) or buy (bid) side of the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The sell side. Orders here rest in the ask tree.
    Ask,
    /// The buy side. Orders here rest in the bid tree.
    Bid,
}

impl Side {
    /// The contra (opposite) side used when matching or decomposing a
    /// market order.
    pub fn opposite(self) -> Side {
        match self {
            Side::Ask => Side::Bid,
            Side::Bid => Side::Ask,
        }
    }

    /// The wire string used in trade events, per spec: `"ask"` / `"bid"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Ask => "ask",
            Side::Bid => "bid",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two submission kinds the matching engine accepts.
///
/// This is an enum rather than the source's `"lmt"`/`"mkt"` strings, which
/// structurally removes the "unknown order_type spelling" error category
/// that the source left implementation-defined (see SPEC_FULL.md §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderKind {
    /// Rests in the book at the submitted price if not immediately crossable.
    Limit,
    /// Executes immediately against the best available contra-side prices.
    Market,
}
