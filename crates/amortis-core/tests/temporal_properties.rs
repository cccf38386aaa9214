//! Property and reference tests for day counts, periods and rate conversion.

use amortis_core::daycounts::{year_fraction, DayCountBasis, DayCountConvention};
use amortis_core::types::{Compounding, Date, InterestRate, Period, TimeUnit};
use amortis_core::AmortisError;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn d(y: i32, m: u32, day: u32) -> Date {
    Date::from_ymd(y, m, day).unwrap()
}

fn date_strategy() -> impl Strategy<Value = Date> {
    (1990i32..2100i32, 1u32..13u32, 1u32..32u32)
        .prop_filter_map("valid date", |(year, month, day)| Date::from_ymd(year, month, day).ok())
}

fn period_strategy() -> impl Strategy<Value = Period> {
    let unit = prop_oneof![
        Just(TimeUnit::Day),
        Just(TimeUnit::Week),
        Just(TimeUnit::Month),
        Just(TimeUnit::Year),
    ];
    (any::<i32>(), unit).prop_map(|(length, unit)| Period::new(length, unit))
}

// ============================================================================
// Reference values
// ============================================================================

#[test]
fn thirty_360_day_31_clamps_to_30() {
    assert_eq!(
        year_fraction(DayCountConvention::Thirty360US, d(2024, 1, 31), d(2024, 2, 28)).unwrap(),
        year_fraction(DayCountConvention::Thirty360US, d(2024, 1, 30), d(2024, 2, 28)).unwrap()
    );
}

#[test]
fn act_act_full_leap_year_is_one() {
    assert_eq!(
        year_fraction(DayCountConvention::ActActIsda, d(2024, 1, 1), d(2025, 1, 1)).unwrap(),
        Decimal::ONE
    );
}

#[test]
fn reversed_range_is_rejected_for_every_convention() {
    for convention in DayCountConvention::all() {
        let err = DayCountBasis::new(*convention)
            .year_fraction(d(2024, 6, 1), d(2024, 5, 31))
            .unwrap_err();
        assert!(matches!(err, AmortisError::InvalidDateRange { .. }), "{convention}");
    }
}

#[test]
fn period_strings_reject_garbage() {
    for input in ["1.5Y", "Y1", "12", "1Q", "one year"] {
        assert!(matches!(
            Period::parse(input),
            Err(AmortisError::InvalidPeriodFormat { .. })
        ));
    }
}

#[test]
fn monthly_rate_round_trips_through_common_conventions() {
    let rate = InterestRate::new(dec!(0.065), Compounding::Monthly);
    for target in [Compounding::Annual, Compounding::Monthly, Compounding::Continuous] {
        let back = rate.convert_to(target).unwrap().convert_to(Compounding::Monthly).unwrap();
        assert!((back.rate() - rate.rate()).abs() < dec!(0.0000000000000001));
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn year_fraction_is_non_negative(a in date_strategy(), b in date_strategy()) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        for convention in DayCountConvention::all() {
            let yf = year_fraction(*convention, start, end).unwrap();
            prop_assert!(yf >= Decimal::ZERO, "{} {} {} -> {}", convention, start, end, yf);
        }
    }

    #[test]
    fn actual_year_fraction_is_zero_only_for_equal_dates(a in date_strategy(), b in date_strategy()) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        for convention in [
            DayCountConvention::Act365Fixed,
            DayCountConvention::Act360,
            DayCountConvention::ActActIsda,
        ] {
            let yf = year_fraction(convention, start, end).unwrap();
            prop_assert_eq!(yf.is_zero(), start == end);
        }
    }

    #[test]
    fn period_display_round_trips(p in period_strategy()) {
        prop_assert_eq!(Period::parse(&p.to_string()).unwrap(), p);
    }

    #[test]
    fn compounding_round_trip(
        bps in -300i64..2500i64,
        source in prop_oneof![
            Just(Compounding::Annual),
            Just(Compounding::SemiAnnual),
            Just(Compounding::Quarterly),
            Just(Compounding::Monthly),
            Just(Compounding::Daily),
            Just(Compounding::Continuous),
        ],
        via in prop_oneof![
            Just(Compounding::Annual),
            Just(Compounding::Monthly),
            Just(Compounding::Continuous),
        ],
    ) {
        let rate = InterestRate::from_basis_points(bps, source);
        let back = rate.convert_to(via).unwrap().convert_to(source).unwrap();
        prop_assert!((back.rate() - rate.rate()).abs() < dec!(0.00000000000001));
        prop_assert_eq!(back.compounding(), source);
    }
}
