//! Core OrderBook data structure: the five indices and the monitoring
//! counters described in SPEC_FULL.md §2–§3.

use std::collections::BTreeMap;

use super::types::{OrderId, ParticipantId, Price, Quantity, Side};

/// All orders resting at one price, in submission (ascending order-id)
/// order. A level is removed from its side tree as soon as it holds no
/// live orders (I1).
pub(super) type PriceLevel = BTreeMap<OrderId, Quantity>;

/// The order book for a single instrument.
///
/// Owns the ask tree, the bid tree, the three auxiliary indices, and the
/// six monitoring counters that make up the entirety of the book's
/// persistable state (SPEC_FULL.md §4.7). All public operations run to
/// completion synchronously; there is no internal locking (SPEC_FULL.md §5).
#[derive(Debug, Default)]
pub struct OrderBook {
    /// Ask side: price (ascending) → price level. Best ask = `min_key`.
    pub(super) asks: BTreeMap<Price, PriceLevel>,
    /// Bid side: price → price level. Best bid = `max_key` (viewed in
    /// descending order wherever the spec asks for it, e.g. `get_mkt_depth`).
    pub(super) bids: BTreeMap<Price, PriceLevel>,

    /// order-id → (price, side), for O(log n) lookup on cancel/query.
    pub(super) price_id_index: BTreeMap<OrderId, (Price, Side)>,
    /// order-id → participant-id.
    pub(super) order_owner_index: BTreeMap<OrderId, ParticipantId>,
    /// participant-id → that participant's live order-ids, ascending by
    /// order-id (I4).
    pub(super) participants: BTreeMap<ParticipantId, Vec<OrderId>>,

    /// Sum of remaining sizes across the ask tree (I5).
    pub(super) total_ask_size: Quantity,
    /// Sum of remaining sizes across the bid tree (I5).
    pub(super) total_bid_size: Quantity,
    /// Cumulative size matched over the book's lifetime.
    pub(super) total_volume_traded: Quantity,
    /// `total_ask_size + total_bid_size` (I6), tracked incrementally rather
    /// than recomputed, matching the source's counter-based bookkeeping.
    pub(super) total_volume_pending: Quantity,
    /// The last order-id assigned. The next allocation is this value + 1.
    pub(super) last_order_id: u64,
    /// Count of orders that have reached remaining size 0 via matching.
    /// Cancellations do not increment this counter in the source and are
    /// not counted here either; it measures fills, not removals.
    pub(super) cleared_orders_count: u64,
}

impl OrderBook {
    /// Create an empty order book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next order-id (SPEC_FULL.md §4.1). Monotonic, never
    /// reused, shared by limit submissions and the synthetic limit orders
    /// generated during market-order decomposition.
    pub(super) fn next_order_id(&mut self) -> OrderId {
        self.last_order_id += 1;
        OrderId(self.last_order_id)
    }

    /// Best (lowest) ask price, if any order rests on the ask side.
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.keys().next().copied()
    }

    /// Best (highest) bid price, if any order rests on the bid side.
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.keys().next_back().copied()
    }

    pub(super) fn side_tree(&self, side: Side) -> &BTreeMap<Price, PriceLevel> {
        match side {
            Side::Ask => &self.asks,
            Side::Bid => &self.bids,
        }
    }

    pub(super) fn side_tree_mut(&mut self, side: Side) -> &mut BTreeMap<Price, PriceLevel> {
        match side {
            Side::Ask => &mut self.asks,
            Side::Bid => &mut self.bids,
        }
    }

    pub(super) fn total_side_size(&self, side: Side) -> Quantity {
        match side {
            Side::Ask => self.total_ask_size,
            Side::Bid => self.total_bid_size,
        }
    }
}
