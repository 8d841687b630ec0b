//! Trade event types emitted by the matching loop.

use serde::{Deserialize, Serialize};

use super::types::{OrderId, ParticipantId, Price, Quantity, Side};

/// One record appended to the caller-supplied event list by the matching
/// loop. A single fill always emits a [`TradeEvent::Public`] print followed
/// by the ask-side [`TradeEvent::Private`] fill and then the bid-side one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TradeEvent {
    /// Public tape print: `(size, price)` of one fill, with no owner
    /// information. Wire-tagged `0` to match the spec's external format.
    Public {
        /// Quantity traded.
        size: Quantity,
        /// Price the trade printed at (the bid-side price of the touch).
        price: Price,
    },
    /// Private, owner-directed fill notification for exactly one side of
    /// one fill. Wire-tagged `1` to match the spec's external format.
    Private {
        /// The order that was (partially or fully) filled.
        order_id: OrderId,
        /// Quantity filled for this order in this match.
        size: Quantity,
        /// Price the trade printed at (the bid-side price of the touch).
        price: Price,
        /// The owner of the filled order.
        participant_id: ParticipantId,
        /// Which side of the book this fill happened on.
        side: Side,
    },
}

impl TradeEvent {
    /// Build the three events for one matched pair, in the ask-before-bid
    /// order the matching loop must preserve.
    pub(super) fn for_match(
        trade_size: Quantity,
        touch_price: Price,
        ask_order_id: OrderId,
        ask_participant_id: ParticipantId,
        bid_order_id: OrderId,
        bid_participant_id: ParticipantId,
    ) -> [TradeEvent; 3] {
        [
            TradeEvent::Public {
                size: trade_size,
                price: touch_price,
            },
            TradeEvent::Private {
                order_id: ask_order_id,
                size: trade_size,
                price: touch_price,
                participant_id: ask_participant_id,
                side: Side::Ask,
            },
            TradeEvent::Private {
                order_id: bid_order_id,
                size: trade_size,
                price: touch_price,
                participant_id: bid_participant_id,
                side: Side::Bid,
            },
        ]
    }
}
