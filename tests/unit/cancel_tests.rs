//! Black-box coverage of cancellation (SPEC_FULL.md §4.5), including the
//! redesign-flag fix: cancel must clean the price-id, order-owner, and
//! participant indices symmetrically with post-fill cleanup.

#[cfg(test)]
mod tests_cancel {
    use limit_order_book::{OrderBook, OrderBookError, OrderId, OrderKind, Side};
    use rust_decimal::Decimal;

    #[test]
    fn cancel_removes_order_from_depth_and_counters() {
        let mut book = OrderBook::new();
        let (order_id, _) = book
            .submit_order(OrderKind::Limit, Side::Ask, 10, Decimal::from(12), 1)
            .unwrap();

        book.cancel(OrderId(order_id as u64)).unwrap();

        assert_eq!(book.ask_size(), 0);
        assert_eq!(book.total_ask_size(), 0);
        assert_eq!(book.total_volume_pending(), 0);
        assert_eq!(book.get_mkt_depth(5).0, Vec::new());
    }

    #[test]
    fn cancel_removes_order_from_participant_query() {
        let mut book = OrderBook::new();
        let (first, _) = book
            .submit_order(OrderKind::Limit, Side::Ask, 10, Decimal::from(12), 7)
            .unwrap();
        let (second, _) = book
            .submit_order(OrderKind::Limit, Side::Ask, 5, Decimal::from(13), 7)
            .unwrap();

        book.cancel(OrderId(first as u64)).unwrap();

        let (orders, details) = book.get_participant_orders(7);
        assert_eq!(orders, vec![OrderId(second as u64)]);
        assert!(!details.contains_key(&OrderId(first as u64)));
    }

    #[test]
    fn cancelling_every_order_for_a_participant_drops_the_participant() {
        let mut book = OrderBook::new();
        let (order_id, _) = book
            .submit_order(OrderKind::Limit, Side::Bid, 10, Decimal::from(9), 3)
            .unwrap();

        book.cancel(OrderId(order_id as u64)).unwrap();

        let (orders, details) = book.get_participant_orders(3);
        assert!(orders.is_empty());
        assert!(details.is_empty());
    }

    #[test]
    fn cancelled_order_does_not_participate_in_a_later_crossing() {
        let mut book = OrderBook::new();
        let (ask_id, _) = book
            .submit_order(OrderKind::Limit, Side::Ask, 10, Decimal::from(10), 1)
            .unwrap();
        book.cancel(OrderId(ask_id as u64)).unwrap();

        let (_, events) = book
            .submit_order(OrderKind::Limit, Side::Bid, 10, Decimal::from(10), 2)
            .unwrap();

        assert!(events.is_empty());
        assert_eq!(book.total_volume_traded(), 0);
        assert_eq!(book.bid_size(), 10);
    }

    #[test]
    fn cancel_of_unknown_order_id_errors_and_changes_nothing() {
        let mut book = OrderBook::new();
        book.submit_order(OrderKind::Limit, Side::Ask, 10, Decimal::from(10), 1)
            .unwrap();

        let err = book.cancel(OrderId(999)).unwrap_err();
        assert_eq!(err, OrderBookError::OrderNotFound { order_id: OrderId(999) });
        assert_eq!(book.ask_size(), 10);
    }

    #[test]
    fn cancel_of_already_fully_filled_order_errors() {
        let mut book = OrderBook::new();
        let (ask_id, _) = book
            .submit_order(OrderKind::Limit, Side::Ask, 5, Decimal::from(10), 1)
            .unwrap();
        book.submit_order(OrderKind::Limit, Side::Bid, 5, Decimal::from(10), 2)
            .unwrap();

        let err = book.cancel(OrderId(ask_id as u64)).unwrap_err();
        assert_eq!(
            err,
            OrderBookError::OrderNotFound {
                order_id: OrderId(ask_id as u64)
            }
        );
    }
}
