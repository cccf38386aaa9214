//! Integration test: schedule invariants and curve valuation.

use amortis_cashflows::prelude::*;
use amortis_core::prelude::*;
use amortis_curves::{FlatDiscountCurve, ZeroCurve};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn d(y: i32, m: u32, day: u32) -> Date {
    Date::from_ymd(y, m, day).unwrap()
}

fn usd(amount: Decimal) -> Money {
    Money::new(amount, Currency::USD)
}

#[test]
fn test_single_principal_flow_on_flat_curve() {
    let curve = FlatDiscountCurve::new(InterestRate::new(dec!(0.055), Compounding::Annual), d(2024, 1, 1));
    let schedule = CashFlowSchedule::from_list(vec![CashFlow::principal(d(2025, 1, 1), usd(dec!(1000.00)))]).unwrap();

    // 366/365 years at 5.5% annual: 1000 / 1.055^(366/365)
    let pv = schedule.present_value(&curve).unwrap();
    assert_eq!(pv.currency(), Currency::USD);
    assert_eq!(pv.round_to_currency().amount(), dec!(947.73));
}

#[test]
fn test_present_value_on_zero_curve_matches_flow_sum() {
    let curve = ZeroCurve::from_rates(
        d(2024, 1, 1),
        vec![(d(2025, 1, 1), dec!(0.05)), (d(2026, 1, 1), dec!(0.055))],
    )
    .unwrap();
    let schedule = CashFlowSchedule::from_list(vec![
        CashFlow::interest(d(2024, 7, 1), usd(dec!(25))),
        CashFlow::interest(d(2025, 1, 1), usd(dec!(25))),
        CashFlow::principal(d(2025, 1, 1), usd(dec!(1000))),
    ])
    .unwrap();

    let total = schedule.present_value(&curve).unwrap();
    let by_flow: Decimal = schedule
        .iter()
        .map(|cf| cf.present_value(&curve).unwrap().amount())
        .sum();
    assert_eq!(total.amount(), by_flow);
    assert!(total.amount() < dec!(1050));
}

#[test]
fn test_quarterly_aggregation_of_monthly_flows() {
    let flows = (1..=12)
        .flat_map(|m| {
            let date = d(2025, m, 15);
            [
                CashFlow::interest(date, usd(dec!(10))),
                CashFlow::principal(date, usd(dec!(100))),
            ]
        })
        .collect();
    let schedule = CashFlowSchedule::from_list(flows).unwrap();

    let quarterly = schedule.aggregate_by_period(PaymentFrequency::Quarterly);
    assert_eq!(quarterly.len(), 8);
    assert_eq!(quarterly[0].date(), d(2025, 1, 1));
    assert_eq!(quarterly[0].flow_type(), CashFlowType::Principal);
    assert_eq!(quarterly[0].amount(), usd(dec!(300)));
    assert_eq!(quarterly[7].date(), d(2025, 10, 1));
    assert_eq!(quarterly[7].amount(), usd(dec!(30)));
    assert_eq!(quarterly.sum_by_type(), schedule.sum_by_type());
}

fn arb_flow() -> impl Strategy<Value = CashFlow> {
    (
        0i64..3650,
        -100_000i64..1_000_000,
        prop_oneof![
            Just(CashFlowType::Principal),
            Just(CashFlowType::Interest),
            Just(CashFlowType::Fee),
            Just(CashFlowType::Prepayment),
        ],
    )
        .prop_map(|(offset, cents, flow_type)| {
            CashFlow::new(
                d(2020, 1, 1).add_days(offset),
                usd(Decimal::new(cents, 2)),
                flow_type,
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_identity_date_filter_is_idempotent(flows in prop::collection::vec(arb_flow(), 0..40)) {
        let schedule = CashFlowSchedule::from_list(flows).unwrap();
        if let Some((first, last)) = schedule.date_range() {
            prop_assert_eq!(schedule.filter_by_date_range(first, last), schedule.clone());
        }
    }

    #[test]
    fn prop_schedule_is_date_ordered(flows in prop::collection::vec(arb_flow(), 0..40)) {
        let schedule = CashFlowSchedule::from_list(flows).unwrap();
        prop_assert!(schedule.as_slice().windows(2).all(|w| w[0].date() <= w[1].date()));
    }

    #[test]
    fn prop_type_totals_reconcile(
        flows in prop::collection::vec(arb_flow(), 1..40),
        frequency in prop_oneof![
            Just(PaymentFrequency::Weekly),
            Just(PaymentFrequency::BiWeekly),
            Just(PaymentFrequency::Monthly),
            Just(PaymentFrequency::Annual),
            Just(PaymentFrequency::ZeroCoupon),
        ],
    ) {
        let schedule = CashFlowSchedule::from_list(flows).unwrap();
        let by_type: Decimal = schedule.sum_by_type().values().map(Money::amount).sum();
        prop_assert_eq!(by_type, schedule.total_amount().amount());

        let principal = schedule.get_principal_flows().total_amount().amount();
        let interest = schedule.get_interest_flows().total_amount().amount();
        let fees = schedule.filter_by_type(CashFlowType::Fee).total_amount().amount();
        prop_assert_eq!(principal + interest + fees, schedule.total_amount().amount());

        let aggregated = schedule.aggregate_by_period(frequency);
        prop_assert_eq!(aggregated.total_amount(), schedule.total_amount());
        prop_assert!(aggregated.len() <= schedule.len());
    }
}
