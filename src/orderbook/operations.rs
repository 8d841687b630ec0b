//! Order submission and cancellation: the single dispatch surface
//! described in SPEC_FULL.md §4.2, §4.4, §4.5, §6.

use rust_decimal::Decimal;
use tracing::{trace, warn};

use super::book::OrderBook;
use super::error::OrderBookError;
use super::trade::TradeEvent;
use super::types::{OrderId, OrderKind, ParticipantId, Price, Quantity, Side};

impl OrderBook {
    /// Submit a limit or market order.
    ///
    /// A limit submission appends to the appropriate side tree and then
    /// runs the matching loop; a market submission is decomposed into a
    /// sequence of price-taking limit submissions, each followed by a
    /// matching pass (SPEC_FULL.md §4.4).
    ///
    /// `price` is ignored for market orders, matching the spec's external
    /// interface table.
    ///
    /// # Errors
    /// Returns [`OrderBookError::InvalidQuantity`] or
    /// [`OrderBookError::InvalidPrice`] when a limit order's size or price
    /// is not strictly positive, or when a market order's size is not
    /// strictly positive. Insufficient liquidity for a market order is
    /// *not* an error: it returns `Ok((-1, vec![]))` per SPEC_FULL.md §7.
    pub fn submit_order(
        &mut self,
        kind: OrderKind,
        side: Side,
        size: Quantity,
        price: Price,
        participant_id: ParticipantId,
    ) -> Result<(i64, Vec<TradeEvent>), OrderBookError> {
        if size == 0 {
            return Err(OrderBookError::InvalidQuantity { quantity: size });
        }

        match kind {
            OrderKind::Limit => {
                if price <= Decimal::ZERO {
                    return Err(OrderBookError::InvalidPrice { price });
                }
                let order_id = self.insert_limit_order(side, size, price, participant_id);
                trace!(%order_id, %side, %size, %price, "limit order submitted");
                let mut events = Vec::new();
                self.run_matching(&mut events);
                Ok((order_id.into(), events))
            }
            OrderKind::Market => self.submit_market_order(side, size, participant_id),
        }
    }

    /// Cancel a live order (SPEC_FULL.md §4.5).
    ///
    /// Removes the order from its side tree's price level, removing the
    /// level too if it empties out, and symmetrically cleans the price-id
    /// index, the order-owner index, and the participant's live-order
    /// sequence — the corrected behavior called for by the redesign flag
    /// in SPEC_FULL.md §9/§10 (the source only removed the order from its
    /// side tree, leaving the auxiliary indices and the size counters
    /// stale). Produces no trade events.
    ///
    /// # Errors
    /// Returns [`OrderBookError::OrderNotFound`] if `order_id` is not live.
    pub fn cancel(&mut self, order_id: OrderId) -> Result<(), OrderBookError> {
        let (price, side) = *self.price_id_index.get(&order_id).ok_or_else(|| {
            warn!(%order_id, "cancel of unknown order");
            OrderBookError::OrderNotFound { order_id }
        })?;

        let size = self.side_tree(side)[&price][&order_id];

        let level = self
            .side_tree_mut(side)
            .get_mut(&price)
            .expect("price-id index points at a live price level");
        level.remove(&order_id);
        if level.is_empty() {
            self.side_tree_mut(side).remove(&price);
        }

        self.price_id_index.remove(&order_id);
        if let Some(participant_id) = self.order_owner_index.remove(&order_id) {
            if let Some(orders) = self.participants.get_mut(&participant_id) {
                orders.retain(|&id| id != order_id);
                if orders.is_empty() {
                    self.participants.remove(&participant_id);
                }
            }
        }

        match side {
            Side::Ask => self.total_ask_size -= size,
            Side::Bid => self.total_bid_size -= size,
        }
        self.total_volume_pending -= size;

        trace!(%order_id, %side, %price, %size, "order cancelled");
        Ok(())
    }

    /// Effect steps 1–5 of SPEC_FULL.md §4.2: allocate an order-id, update
    /// pending volume, register both auxiliary indices and the
    /// participant's sequence, and insert into the side tree. Does not run
    /// the matching loop; the caller does that afterward.
    fn insert_limit_order(
        &mut self,
        side: Side,
        size: Quantity,
        price: Price,
        participant_id: ParticipantId,
    ) -> OrderId {
        let order_id = self.next_order_id();

        self.total_volume_pending += size;
        self.price_id_index.insert(order_id, (price, side));
        self.order_owner_index.insert(order_id, participant_id);
        self.participants
            .entry(participant_id)
            .or_default()
            .push(order_id);

        self.side_tree_mut(side)
            .entry(price)
            .or_default()
            .insert(order_id, size);
        match side {
            Side::Ask => self.total_ask_size += size,
            Side::Bid => self.total_bid_size += size,
        }

        order_id
    }

    /// Market-order decomposition (SPEC_FULL.md §4.4).
    ///
    /// Admitted only if total contra-side resting size ≥ `size`; otherwise
    /// rejected with sentinel id `-1` and no events, no state change. When
    /// admitted, repeatedly takes the smaller of (remaining market size,
    /// best contra-level size), submits a synthetic limit order on the
    /// aggressor's side at that contra price through the standard limit
    /// path, and runs the matching loop — re-reading the best contra price
    /// on every iteration, so a large market order can walk through
    /// several, increasingly unfavorable price levels.
    fn submit_market_order(
        &mut self,
        side: Side,
        size: Quantity,
        participant_id: ParticipantId,
    ) -> Result<(i64, Vec<TradeEvent>), OrderBookError> {
        let contra = side.opposite();
        let available = self.total_side_size(contra);
        if available < size {
            warn!(%side, %size, available, "market order rejected: insufficient liquidity");
            return Ok((OrderId::REJECTED, Vec::new()));
        }

        let mut events = Vec::new();
        let mut remaining = size;
        while remaining > 0 {
            let contra_price = match contra {
                Side::Ask => self.best_ask(),
                Side::Bid => self.best_bid(),
            }
            .expect("admission check guarantees contra liquidity exists");
            let contra_level_size = match contra {
                Side::Ask => self.ask_size(),
                Side::Bid => self.bid_size(),
            };

            let trade_size = remaining.min(contra_level_size);
            self.insert_limit_order(side, trade_size, contra_price, participant_id);
            self.run_matching(&mut events);

            remaining -= trade_size;
        }

        trace!(%side, %size, participant_id, "market order filled");
        Ok((0, events))
    }
}
