//! Property tests for the account rules
//!
//! Arbitrary sequences of deposits and withdrawals, spread over a few dates,
//! are applied to an account. Whatever the account accepts or rejects, its
//! balance must always equal the starting balance plus deposits minus
//! withdrawals, and rejected operations must leave it untouched.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_wallet_engine::{Account, AccountError, FixedClock, MovementKind};

#[derive(Debug, Clone)]
struct Op {
    kind: MovementKind,
    day_offset: u64,
    cents: i64,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    (
        prop_oneof![Just(MovementKind::Deposit), Just(MovementKind::Withdrawal)],
        0u64..3,
        -10_000i64..150_000,
    )
        .prop_map(|(kind, day_offset, cents)| Op {
            kind,
            day_offset,
            cents,
        })
}

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn apply(account: &mut Account<FixedClock>, op: &Op) -> Result<(), AccountError> {
    account.clock().set(start_date());
    account.clock().advance_days(op.day_offset);
    let amount = Decimal::new(op.cents, 2);
    match op.kind {
        MovementKind::Deposit => account.deposit(amount),
        MovementKind::Withdrawal => account.withdraw(amount),
    }
}

proptest! {
    #[test]
    fn balance_matches_movement_history(
        initial_cents in 0i64..500_000,
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let initial = Decimal::new(initial_cents, 2);
        let mut account = Account::with_clock(initial, FixedClock::new(start_date()));

        for op in &ops {
            let _ = apply(&mut account, op);
        }

        let net: Decimal = account
            .movements()
            .iter()
            .map(|m| if m.is_deposit() { m.amount() } else { -m.amount() })
            .sum();
        prop_assert_eq!(account.balance(), initial + net);
        prop_assert!(account.deposit_count() <= 3);
        prop_assert!(account.movements().iter().all(|m| m.amount() > Decimal::ZERO));
    }

    #[test]
    fn operations_are_all_or_nothing(
        initial_cents in 0i64..500_000,
        ops in prop::collection::vec(op_strategy(), 1..40),
    ) {
        let mut account = Account::with_clock(
            Decimal::new(initial_cents, 2),
            FixedClock::new(start_date()),
        );

        for op in &ops {
            let balance_before = account.balance();
            let count_before = account.movement_count();
            let amount = Decimal::new(op.cents, 2);

            match apply(&mut account, op) {
                Ok(()) => {
                    let expected = match op.kind {
                        MovementKind::Deposit => balance_before + amount,
                        MovementKind::Withdrawal => balance_before - amount,
                    };
                    prop_assert_eq!(account.balance(), expected);
                    prop_assert_eq!(account.movement_count(), count_before + 1);
                }
                Err(_) => {
                    prop_assert_eq!(account.balance(), balance_before);
                    prop_assert_eq!(account.movement_count(), count_before);
                }
            }
        }
    }

    #[test]
    fn withdrawals_never_exceed_daily_limit(
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut account = Account::with_clock(
            Decimal::new(1_000_000, 0),
            FixedClock::new(start_date()),
        );

        for op in &ops {
            let _ = apply(&mut account, op);
        }

        for offset in 0..3 {
            let date = start_date() + chrono::Days::new(offset);
            prop_assert!(account.withdrawn_amount_on(date) <= Decimal::new(1000, 0));
            prop_assert!(account.remaining_daily_limit(date) >= Decimal::ZERO);
        }
    }

    #[test]
    fn non_positive_amounts_are_always_invalid(
        cents in -1_000_000i64..=0,
        kind in prop_oneof![Just(MovementKind::Deposit), Just(MovementKind::Withdrawal)],
    ) {
        let mut account = Account::with_clock(Decimal::new(5000, 0), FixedClock::new(start_date()));
        let op = Op { kind, day_offset: 0, cents };

        let result = apply(&mut account, &op);

        let is_invalid = matches!(result, Err(AccountError::InvalidAmount { .. }));
        prop_assert!(is_invalid);
        prop_assert_eq!(account.movement_count(), 0);
    }

    #[test]
    fn withdrawing_at_least_the_balance_is_rejected(
        balance_cents in 1i64..100_000,
        extra_cents in 0i64..100_000,
    ) {
        let balance = Decimal::new(balance_cents, 2);
        let mut account = Account::with_clock(balance, FixedClock::new(start_date()));

        let result = account.withdraw(balance + Decimal::new(extra_cents, 2));

        let is_insufficient = matches!(result, Err(AccountError::InsufficientBalance { .. }));
        prop_assert!(is_insufficient);
        prop_assert_eq!(account.balance(), balance);
    }
}
