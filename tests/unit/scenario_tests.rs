//! Black-box coverage of the six concrete scenarios in SPEC_FULL.md §9
//! (spec.md §8).

#[cfg(test)]
mod tests_scenarios {
    use limit_order_book::{OrderBook, OrderKind, Side, TradeEvent};
    use rust_decimal::Decimal;

    fn lmt(book: &mut OrderBook, side: Side, size: u64, price: i64, participant: u64) -> i64 {
        book.submit_order(OrderKind::Limit, side, size, Decimal::from(price), participant)
            .expect("valid submission")
            .0
    }

    #[test]
    fn scenario_1_empty_book_reads() {
        let book = OrderBook::new();
        assert_eq!(book.ask_size(), 0);
        assert_eq!(book.bid_size(), 0);
        assert_eq!(book.total_volume_traded(), 0);
        assert_eq!(book.get_mkt_depth(5), (Vec::new(), Vec::new()));
        assert_eq!(book.ask(), -Decimal::ONE);
        assert_eq!(book.bid(), -Decimal::ONE);
    }

    #[test]
    fn scenario_2_non_crossing_quotes() {
        let mut book = OrderBook::new();
        lmt(&mut book, Side::Ask, 10, 12, 1); // priced 12.5 conceptually, integer here is fine
        lmt(&mut book, Side::Bid, 10, 10, 2);

        assert_eq!(book.ask_size(), 10);
        assert_eq!(book.bid_size(), 10);
        assert_eq!(book.total_volume_traded(), 0);
    }

    #[test]
    fn scenario_3_cross_and_clear() {
        let mut book = OrderBook::new();
        lmt(&mut book, Side::Ask, 10, 12, 1);
        lmt(&mut book, Side::Bid, 10, 10, 2);
        lmt(&mut book, Side::Bid, 10, 20, 3);
        lmt(&mut book, Side::Ask, 10, 5, 3);

        assert_eq!(book.ask_size(), 0);
        assert_eq!(book.bid_size(), 0);
        assert_eq!(book.total_volume_traded(), 20);
    }

    #[test]
    fn scenario_4_depth_aggregation() {
        let mut book = OrderBook::new();
        lmt(&mut book, Side::Ask, 2, 10, 1);
        lmt(&mut book, Side::Ask, 4, 20, 1);
        lmt(&mut book, Side::Ask, 6, 30, 1);
        lmt(&mut book, Side::Bid, 1, 1, 2);
        lmt(&mut book, Side::Bid, 5, 2, 2);
        lmt(&mut book, Side::Bid, 7, 3, 2);

        let (asks, bids) = book.get_mkt_depth(3);
        assert_eq!(
            asks,
            vec![
                (Decimal::from(10), 2),
                (Decimal::from(20), 4),
                (Decimal::from(30), 6),
            ]
        );
        assert_eq!(
            bids,
            vec![
                (Decimal::from(3), 7),
                (Decimal::from(2), 5),
                (Decimal::from(1), 1),
            ]
        );
    }

    #[test]
    fn scenario_5_participant_query_in_submission_order() {
        let mut book = OrderBook::new();
        lmt(&mut book, Side::Ask, 2, 10, 1);
        lmt(&mut book, Side::Ask, 4, 20, 1);
        lmt(&mut book, Side::Ask, 6, 30, 1);
        lmt(&mut book, Side::Bid, 1, 1, 2);
        lmt(&mut book, Side::Bid, 5, 2, 2);
        lmt(&mut book, Side::Bid, 7, 3, 2);

        let (order_ids, details) = book.get_participant_orders(1);
        assert_eq!(order_ids.len(), 3);
        for (expected_price, order_id) in [(10, order_ids[0]), (20, order_ids[1]), (30, order_ids[2])] {
            let (price, side, _size) = details[&order_id];
            assert_eq!(price, Decimal::from(expected_price));
            assert_eq!(side, Side::Ask);
        }
    }

    #[test]
    fn scenario_6_ask_first_event_ordering_on_self_cross() {
        let mut book = OrderBook::new();
        let (bid_order_id, _) = book
            .submit_order(OrderKind::Limit, Side::Bid, 2, Decimal::from(2), 1)
            .unwrap();
        let (ask_order_id, events) = book
            .submit_order(OrderKind::Limit, Side::Ask, 2, Decimal::from(2), 2)
            .unwrap();

        assert_eq!(
            events[0],
            TradeEvent::Public {
                size: 2,
                price: Decimal::from(2)
            }
        );
        match &events[1] {
            TradeEvent::Private { order_id, side, participant_id, .. } => {
                assert_eq!(order_id.get() as i64, ask_order_id);
                assert_eq!(*side, Side::Ask);
                assert_eq!(*participant_id, 2);
            }
            other => panic!("expected ask private fill, got {other:?}"),
        }
        match &events[2] {
            TradeEvent::Private { order_id, side, participant_id, .. } => {
                assert_eq!(order_id.get() as i64, bid_order_id);
                assert_eq!(*side, Side::Bid);
                assert_eq!(*participant_id, 1);
            }
            other => panic!("expected bid private fill, got {other:?}"),
        }
    }
}
