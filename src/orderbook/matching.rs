//! The price-time-priority matching loop (SPEC_FULL.md §4.3).
//!
//! Expressed as an outer loop over touches with an inner paired iteration
//! over the two level sub-maps at the touch, per the redesign note in
//! SPEC_FULL.md §9/§10: the source expresses this by self-invocation after
//! each touch clears, which this crate turns into iteration instead. The
//! inner loop mutates the maps it walks, so ids are snapshotted up front
//! and every lookup is guarded by a "still present" check.

use tracing::{debug, trace};

use super::book::OrderBook;
use super::trade::TradeEvent;
use super::types::{OrderId, Price, Side};

impl OrderBook {
    /// Run the matching loop to completion, appending events to `events`.
    /// Never fails and always terminates (SPEC_FULL.md §4.3).
    pub(super) fn run_matching(&mut self, events: &mut Vec<TradeEvent>) {
        loop {
            let (ask_price, bid_price) = match (self.best_ask(), self.best_bid()) {
                (Some(ask_price), Some(bid_price)) if bid_price >= ask_price => {
                    (ask_price, bid_price)
                }
                _ => {
                    trace!("no crossing at the touch, matching loop done");
                    return;
                }
            };

            debug!(%ask_price, %bid_price, "crossing found, resolving touch");
            self.resolve_touch(ask_price, bid_price, events);
        }
    }

    /// Resolve a single touch: pair off ask orders at `ask_price` against
    /// bid orders at `bid_price` in ascending order-id order on both sides,
    /// then drop either level if it emptied out.
    fn resolve_touch(&mut self, ask_price: Price, bid_price: Price, events: &mut Vec<TradeEvent>) {
        let ask_ids: Vec<OrderId> = self.asks[&ask_price].keys().copied().collect();
        let bid_ids: Vec<OrderId> = self.bids[&bid_price].keys().copied().collect();

        for ask_id in ask_ids {
            if !self.asks[&ask_price].contains_key(&ask_id) {
                // Already fully filled against an earlier bid this touch.
                continue;
            }

            for &bid_id in &bid_ids {
                if !self.asks[&ask_price].contains_key(&ask_id) {
                    break;
                }
                if !self.bids[&bid_price].contains_key(&bid_id) {
                    continue;
                }

                self.match_pair(ask_price, ask_id, bid_price, bid_id, events);

                if !self.asks[&ask_price].contains_key(&ask_id) {
                    break;
                }
            }
        }

        if self.asks[&ask_price].is_empty() {
            self.asks.remove(&ask_price);
            trace!(%ask_price, "ask level emptied, removed");
        }
        if self.bids[&bid_price].is_empty() {
            self.bids.remove(&bid_price);
            trace!(%bid_price, "bid level emptied, removed");
        }
    }

    /// Execute one (ask, bid) fill: trade the smaller of the two remaining
    /// sizes, update counters, clear whichever side(s) reached zero, and
    /// emit the public print + ask-first private fills.
    fn match_pair(
        &mut self,
        ask_price: Price,
        ask_id: OrderId,
        bid_price: Price,
        bid_id: OrderId,
        events: &mut Vec<TradeEvent>,
    ) {
        let ask_remaining = self.asks[&ask_price][&ask_id];
        let bid_remaining = self.bids[&bid_price][&bid_id];
        let trade_size = ask_remaining.min(bid_remaining);

        *self
            .asks
            .get_mut(&ask_price)
            .expect("caller verified the ask level is still present")
            .get_mut(&ask_id)
            .expect("caller verified the ask order is still present") -= trade_size;
        *self
            .bids
            .get_mut(&bid_price)
            .expect("caller verified the bid level is still present")
            .get_mut(&bid_id)
            .expect("caller verified the bid order is still present") -= trade_size;

        self.total_ask_size -= trade_size;
        self.total_bid_size -= trade_size;
        self.total_volume_traded += trade_size;
        self.total_volume_pending -= 2 * trade_size;

        let ask_participant = self.order_owner_index[&ask_id];
        let bid_participant = self.order_owner_index[&bid_id];

        // Matches the source's check order: bid cleanup, then ask cleanup,
        // then the event append (SPEC_FULL.md §4.3).
        let bid_cleared = self.bids[&bid_price][&bid_id] == 0;
        if bid_cleared {
            self.remove_filled_order(bid_id, Side::Bid, bid_price);
        }
        let ask_cleared = self.asks[&ask_price][&ask_id] == 0;
        if ask_cleared {
            self.remove_filled_order(ask_id, Side::Ask, ask_price);
        }

        trace!(
            %trade_size, %bid_price, %ask_id, %bid_id,
            "matched pair"
        );
        events.extend(TradeEvent::for_match(
            trade_size,
            bid_price,
            ask_id,
            ask_participant,
            bid_id,
            bid_participant,
        ));
    }

    /// Remove a fully-filled order from its price level and from every
    /// auxiliary index, mirroring the symmetric cleanup cancellation must
    /// also perform (SPEC_FULL.md §4.5).
    pub(super) fn remove_filled_order(&mut self, order_id: OrderId, side: Side, price: Price) {
        self.side_tree_mut(side)
            .get_mut(&price)
            .expect("price level present for a live order")
            .remove(&order_id);
        self.price_id_index.remove(&order_id);
        if let Some(participant_id) = self.order_owner_index.remove(&order_id) {
            if let Some(orders) = self.participants.get_mut(&participant_id) {
                orders.retain(|&id| id != order_id);
                if orders.is_empty() {
                    self.participants.remove(&participant_id);
                }
            }
        }
        self.cleared_orders_count += 1;
    }
}
