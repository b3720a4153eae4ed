//! Freight apportionment integration tests for landed-cost.

mod common;

use common::{assert_close, valued_item, valued_items};
use landed_cost::models::FreightApportionmentPolicy;
use landed_cost::services::{apportion_freight, effective_policy};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const POLICIES: [FreightApportionmentPolicy; 3] = [
    FreightApportionmentPolicy::ByValue,
    FreightApportionmentPolicy::ByWeight,
    FreightApportionmentPolicy::Equal,
];

#[test]
fn by_value_splits_proportionally_to_line_total() {
    let items = valued_items(&[dec!(100), dec!(300)]);

    let shares = apportion_freight(&items, dec!(40), FreightApportionmentPolicy::ByValue, None);

    assert_eq!(shares, vec![dec!(10), dec!(30)]);
}

#[test]
fn equal_gives_every_line_the_same_share() {
    let items = valued_items(&[dec!(100), dec!(300)]);

    let shares = apportion_freight(&items, dec!(40), FreightApportionmentPolicy::Equal, None);

    assert_eq!(shares, vec![dec!(20), dec!(20)]);
}

#[test]
fn empty_items_yield_empty_result_for_every_policy() {
    for policy in POLICIES {
        let shares = apportion_freight(&[], dec!(100), policy, None);
        assert!(shares.is_empty(), "{policy} should return no shares");
    }
}

#[test]
fn zero_freight_yields_zero_shares_for_every_policy() {
    let items = valued_items(&[dec!(10), dec!(20), dec!(30)]);
    let weights = [Some(dec!(1)), Some(dec!(2)), Some(dec!(3))];

    for policy in POLICIES {
        let shares = apportion_freight(&items, Decimal::ZERO, policy, Some(&weights[..]));
        assert_eq!(shares, vec![Decimal::ZERO; 3], "{policy}");
    }
}

#[test]
fn single_item_receives_all_freight() {
    let items = vec![valued_item(dec!(42))];
    let weights = [Some(dec!(7))];

    for policy in POLICIES {
        let shares = apportion_freight(&items, dec!(19.90), policy, Some(&weights[..]));
        assert_eq!(shares, vec![dec!(19.90)], "{policy}");
    }
}

#[test]
fn weight_policy_without_weights_matches_by_value() {
    let items = valued_items(&[dec!(15), dec!(35), dec!(50)]);

    let by_weight = apportion_freight(&items, dec!(80), FreightApportionmentPolicy::ByWeight, None);
    let by_value = apportion_freight(&items, dec!(80), FreightApportionmentPolicy::ByValue, None);

    assert_eq!(by_weight, by_value);
    assert_eq!(by_value, vec![dec!(12), dec!(28), dec!(40)]);
}

#[test]
fn partial_weights_fall_back_to_by_value() {
    let items = valued_items(&[dec!(100), dec!(300)]);
    let weights = [None, Some(dec!(5))];

    let shares = apportion_freight(
        &items,
        dec!(40),
        FreightApportionmentPolicy::ByWeight,
        Some(&weights[..]),
    );

    assert_eq!(shares, vec![dec!(10), dec!(30)]);
    assert_eq!(
        effective_policy(
            &items,
            dec!(40),
            FreightApportionmentPolicy::ByWeight,
            Some(&weights[..])
        ),
        FreightApportionmentPolicy::ByValue
    );
}

#[test]
fn mismatched_weight_count_falls_back_to_by_value() {
    let items = valued_items(&[dec!(100), dec!(300)]);
    let weights = [Some(dec!(1)), Some(dec!(1)), Some(dec!(1))];

    let shares = apportion_freight(
        &items,
        dec!(40),
        FreightApportionmentPolicy::ByWeight,
        Some(&weights[..]),
    );

    assert_eq!(shares, vec![dec!(10), dec!(30)]);
}

#[test]
fn zero_weight_sum_falls_back_to_by_value() {
    let items = valued_items(&[dec!(100), dec!(300)]);
    let weights = [Some(Decimal::ZERO), Some(Decimal::ZERO)];

    let shares = apportion_freight(
        &items,
        dec!(40),
        FreightApportionmentPolicy::ByWeight,
        Some(&weights[..]),
    );

    assert_eq!(shares, vec![dec!(10), dec!(30)]);
}

#[test]
fn zero_weights_on_zero_value_invoice_split_equally() {
    let items = valued_items(&[Decimal::ZERO, Decimal::ZERO]);
    let weights = [Some(Decimal::ZERO), Some(Decimal::ZERO)];

    let shares = apportion_freight(
        &items,
        dec!(9),
        FreightApportionmentPolicy::ByWeight,
        Some(&weights[..]),
    );

    assert_eq!(shares, vec![dec!(4.5), dec!(4.5)]);
    assert_eq!(
        effective_policy(
            &items,
            dec!(9),
            FreightApportionmentPolicy::ByWeight,
            Some(&weights[..])
        ),
        FreightApportionmentPolicy::Equal
    );
}

#[test]
fn equal_split_of_repeating_fraction_conserves_total() {
    let items = valued_items(&[dec!(1), dec!(1), dec!(1)]);

    let shares = apportion_freight(&items, dec!(100), FreightApportionmentPolicy::Equal, None);

    assert_eq!(shares.len(), 3);
    assert!(shares.windows(2).all(|w| w[0] == w[1]));
    assert_close(shares.iter().sum(), dec!(100));
}

#[test]
fn large_invoice_shares_do_not_overflow() {
    let line_total = Decimal::from(1_000_000_000_000_000_i64);
    let freight = Decimal::from(100_000_000_000_000_i64);
    let items = valued_items(&[line_total, line_total]);
    let weights = [Some(line_total), Some(line_total)];

    let by_value = apportion_freight(&items, freight, FreightApportionmentPolicy::ByValue, None);
    let by_weight = apportion_freight(
        &items,
        freight,
        FreightApportionmentPolicy::ByWeight,
        Some(&weights[..]),
    );

    let half = Decimal::from(50_000_000_000_000_i64);
    assert_eq!(by_value, vec![half, half]);
    assert_eq!(by_weight, vec![half, half]);
}

fn arb_money() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_positive_money() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #[test]
    fn value_and_equal_policies_conserve_freight(
        totals in prop::collection::vec(arb_money(), 1..20),
        freight in arb_positive_money(),
    ) {
        let items = valued_items(&totals);

        for policy in [FreightApportionmentPolicy::ByValue, FreightApportionmentPolicy::Equal] {
            let shares = apportion_freight(&items, freight, policy, None);
            prop_assert_eq!(shares.len(), items.len());
            let sum: Decimal = shares.iter().sum();
            prop_assert!((sum - freight).abs() <= common::epsilon(), "{} != {}", sum, freight);
        }
    }

    #[test]
    fn apportionment_is_deterministic(
        totals in prop::collection::vec(arb_money(), 0..10),
        freight in arb_money(),
    ) {
        let items = valued_items(&totals);
        for policy in POLICIES {
            prop_assert_eq!(
                apportion_freight(&items, freight, policy, None),
                apportion_freight(&items, freight, policy, None)
            );
        }
    }
}
