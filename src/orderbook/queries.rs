//! Read-only surface: depth snapshots, scalar reads, and participant
//! lookups (SPEC_FULL.md §4.6).

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::book::OrderBook;
use super::types::{OrderId, ParticipantId, Price, Quantity, Side};

impl OrderBook {
    /// Sentinel price returned by [`Self::ask`]/[`Self::bid`] when the
    /// queried side is empty.
    fn no_price() -> Price {
        -Decimal::ONE
    }

    /// Up to `depth` aggregated `(price, size)` levels per side: asks in
    /// ascending price order from the best ask, bids in descending price
    /// order from the best bid. An empty side yields an empty list.
    pub fn get_mkt_depth(&self, depth: usize) -> (Vec<(Price, Quantity)>, Vec<(Price, Quantity)>) {
        let asks = self
            .asks
            .iter()
            .take(depth)
            .map(|(price, level)| (*price, level.values().sum()))
            .collect();
        let bids = self
            .bids
            .iter()
            .rev()
            .take(depth)
            .map(|(price, level)| (*price, level.values().sum()))
            .collect();
        (asks, bids)
    }

    /// Aggregate size resting at the best ask price only; `0` if the ask
    /// side is empty.
    pub fn ask_size(&self) -> Quantity {
        self.asks
            .values()
            .next()
            .map_or(0, |level| level.values().sum())
    }

    /// Aggregate size resting at the best bid price only; `0` if the bid
    /// side is empty.
    pub fn bid_size(&self) -> Quantity {
        self.bids
            .values()
            .next_back()
            .map_or(0, |level| level.values().sum())
    }

    /// Sum of remaining sizes across the whole ask tree.
    pub fn total_ask_size(&self) -> Quantity {
        self.total_ask_size
    }

    /// Sum of remaining sizes across the whole bid tree.
    pub fn total_bid_size(&self) -> Quantity {
        self.total_bid_size
    }

    /// Best ask price, or the sentinel `-1` if the ask side is empty.
    pub fn ask(&self) -> Price {
        self.best_ask().unwrap_or_else(Self::no_price)
    }

    /// Best bid price, or the sentinel `-1` if the bid side is empty.
    pub fn bid(&self) -> Price {
        self.best_bid().unwrap_or_else(Self::no_price)
    }

    /// `ask() - bid()`. Meaningful only when both sides are non-empty;
    /// otherwise it inherits the sentinel arithmetic (SPEC_FULL.md §4.6).
    pub fn spread(&self) -> Price {
        self.ask() - self.bid()
    }

    /// Cumulative size matched over the book's lifetime.
    pub fn total_volume_traded(&self) -> Quantity {
        self.total_volume_traded
    }

    /// `total_ask_size() + total_bid_size()`, tracked incrementally.
    pub fn total_volume_pending(&self) -> Quantity {
        self.total_volume_pending
    }

    /// A participant's live order-ids in submission order, plus a map from
    /// each to its `(price, side, remaining size)`. An unknown or
    /// order-less participant yields an empty sequence and an empty map.
    pub fn get_participant_orders(
        &self,
        participant_id: ParticipantId,
    ) -> (Vec<OrderId>, BTreeMap<OrderId, (Price, Side, Quantity)>) {
        let orders = self
            .participants
            .get(&participant_id)
            .cloned()
            .unwrap_or_default();

        let details = orders
            .iter()
            .map(|&order_id| {
                let (price, side) = self.price_id_index[&order_id];
                let size = self.side_tree(side)[&price][&order_id];
                (order_id, (price, side, size))
            })
            .collect();

        (orders, details)
    }
}
