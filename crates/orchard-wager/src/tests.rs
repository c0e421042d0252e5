#[cfg(test)]
mod tests {
    use crate::book::{WagerBook, WagerError};

    fn make_book(tax_rate: f64, bets: &[(&str, usize, f64)]) -> WagerBook {
        let mut book = WagerBook::new(3, tax_rate);
        for &(bettor, entity, amount) in bets {
            book.place_bet(bettor, entity, amount).unwrap();
        }
        book
    }

    // ---- Bet validation ----

    #[test]
    fn test_place_bet_records_in_order() {
        let book = make_book(0.0, &[("Ada", 0, 10.0), ("Grace", 1, 5.0)]);

        assert_eq!(book.bets().len(), 2);
        assert_eq!(book.bets()[0].bettor, "Ada");
        assert_eq!(book.bets()[0].entity, 0);
        assert_eq!(book.bets()[0].amount, 10.0);
        assert_eq!(book.bets()[1].bettor, "Grace");
    }

    #[test]
    fn test_duplicate_bet_on_same_fruit_rejected() {
        let mut book = WagerBook::new(3, 0.0);
        book.place_bet("A", 0, 5.0).unwrap();

        let err = book.place_bet("A", 0, 5.0).unwrap_err();
        assert_eq!(
            err,
            WagerError::DuplicateBet {
                bettor: "A".to_string(),
                entity: 0
            }
        );

        // the same bettor may still back a different fruit
        assert!(book.place_bet("A", 1, 5.0).is_ok());
        assert_eq!(book.bets().len(), 2);
    }

    #[test]
    fn test_same_fruit_different_bettors_allowed() {
        let mut book = WagerBook::new(3, 0.0);
        book.place_bet("A", 0, 5.0).unwrap();
        assert!(book.place_bet("B", 0, 5.0).is_ok());
    }

    #[test]
    fn test_entity_out_of_range_rejected() {
        let mut book = WagerBook::new(3, 0.0);
        let err = book.place_bet("A", 3, 5.0).unwrap_err();
        assert_eq!(err, WagerError::EntityOutOfRange(3));
        assert!(book.is_empty());
    }

    #[test]
    fn test_non_positive_stake_rejected() {
        let mut book = WagerBook::new(3, 0.0);

        assert_eq!(
            book.place_bet("A", 0, 0.0).unwrap_err(),
            WagerError::NonPositiveStake(0.0)
        );
        assert_eq!(
            book.place_bet("A", 0, -5.0).unwrap_err(),
            WagerError::NonPositiveStake(-5.0)
        );
        assert!(matches!(
            book.place_bet("A", 0, f64::NAN).unwrap_err(),
            WagerError::NonPositiveStake(_)
        ));
        assert!(book.is_empty());
    }

    #[test]
    fn test_infinite_stake_rejected() {
        let mut book = make_book(0.10, &[("A", 0, 10.0)]);

        // overflowing console entries like "1e999" parse to infinity
        assert_eq!(
            book.place_bet("B", 1, f64::INFINITY).unwrap_err(),
            WagerError::NonPositiveStake(f64::INFINITY)
        );
        assert_eq!(
            book.place_bet("B", 1, f64::NEG_INFINITY).unwrap_err(),
            WagerError::NonPositiveStake(f64::NEG_INFINITY)
        );

        // the ledger holds only the finite bet, so the payout sums stay finite
        let settlement = book.settle(0).unwrap();
        assert_eq!(settlement.pot, 10.0);
        assert!(settlement.has_payouts());
        assert!(settlement.payouts.iter().all(|p| p.amount.is_finite()));
    }

    #[test]
    fn test_betting_closes_at_settlement() {
        let mut book = make_book(0.0, &[("A", 0, 10.0)]);
        book.settle(0).unwrap();

        let err = book.place_bet("B", 1, 5.0).unwrap_err();
        assert_eq!(err, WagerError::BettingClosed);
    }

    // ---- Settlement ----

    #[test]
    fn test_payout_proportional_split() {
        let mut book = make_book(0.0, &[("A", 0, 10.0), ("B", 1, 10.0), ("C", 0, 20.0)]);
        let settlement = book.settle(0).unwrap();

        assert_eq!(settlement.pot, 40.0);
        assert_eq!(settlement.tax, 0.0);
        assert_eq!(settlement.distributable, 40.0);
        assert_eq!(settlement.total_winning, 30.0);

        assert_eq!(settlement.payouts.len(), 3);
        assert_eq!(settlement.payouts[0].bettor, "A");
        assert_eq!(settlement.payouts[0].amount, 40.0 * 10.0 / 30.0);
        assert_eq!(settlement.payouts[1].bettor, "B");
        assert_eq!(settlement.payouts[1].amount, 0.0);
        assert_eq!(settlement.payouts[2].bettor, "C");
        assert_eq!(settlement.payouts[2].amount, 40.0 * 20.0 / 30.0);

        let paid: f64 = settlement.payouts.iter().map(|p| p.amount).sum();
        assert!(
            (paid - settlement.distributable).abs() < 1e-9,
            "Winners share the whole distributable pot"
        );
    }

    #[test]
    fn test_tax_deducted_before_split() {
        let mut book = make_book(0.10, &[("A", 0, 10.0), ("B", 0, 30.0)]);
        let settlement = book.settle(0).unwrap();

        assert_eq!(settlement.pot, 40.0);
        assert_eq!(settlement.tax, 4.0);
        assert_eq!(settlement.distributable, 36.0);
        assert_eq!(settlement.payouts[0].amount, 9.0);
        assert_eq!(settlement.payouts[1].amount, 27.0);
    }

    #[test]
    fn test_empty_book_settles_with_no_payouts() {
        let mut book = WagerBook::new(3, 0.10);
        let settlement = book.settle(1).unwrap();

        assert_eq!(settlement.pot, 0.0);
        assert!(settlement.payouts.is_empty());
        assert!(!settlement.has_payouts());
    }

    #[test]
    fn test_no_stake_on_winner_means_no_payouts() {
        let mut book = make_book(0.0, &[("A", 1, 10.0), ("B", 2, 20.0)]);
        let settlement = book.settle(0).unwrap();

        assert_eq!(settlement.pot, 30.0);
        assert_eq!(settlement.total_winning, 0.0);
        assert!(settlement.payouts.iter().all(|p| p.amount == 0.0));
        assert!(!settlement.has_payouts());
    }

    #[test]
    fn test_settle_idempotent_for_same_winner() {
        let mut book = make_book(0.10, &[("A", 0, 10.0), ("B", 1, 10.0)]);

        let first = book.settle(0).unwrap();
        let second = book.settle(0).unwrap();
        assert_eq!(first, second);
        assert_eq!(book.bets().len(), 2, "Settlement never mutates the ledger");
    }

    #[test]
    fn test_resettle_with_different_winner_refused() {
        let mut book = make_book(0.0, &[("A", 0, 10.0)]);
        book.settle(0).unwrap();

        let err = book.settle(1).unwrap_err();
        assert_eq!(err, WagerError::AlreadySettled(0));
    }

    // ---- Messages ----

    #[test]
    fn test_error_messages_name_the_problem() {
        assert_eq!(WagerError::BettingClosed.to_string(), "betting is closed");
        assert_eq!(
            WagerError::EntityOutOfRange(7).to_string(),
            "no fruit with index 7 in this round"
        );
        assert_eq!(
            WagerError::DuplicateBet {
                bettor: "Ada".to_string(),
                entity: 2
            }
            .to_string(),
            "Ada already has a bet on fruit 2"
        );
    }
}
