//! Benchmarks for loan schedule generation.
//!
//! Run with: cargo bench -p amortis-loans

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal_macros::dec;

use amortis_core::calendars::{BusinessDayCalendar, BusinessDayConvention};
use amortis_core::types::{Compounding, Currency, Date, InterestRate, Money, PaymentFrequency, Period};
use amortis_curves::ZeroCurve;
use amortis_loans::{AmortizationType, Loan, ScheduleConfig};

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn origination() -> Date {
    Date::from_ymd(2024, 1, 1).unwrap()
}

fn create_mortgage(years: i32) -> Loan {
    Loan::mortgage(
        Money::new(dec!(300000), Currency::USD),
        InterestRate::new(dec!(0.065), Compounding::Monthly),
        years,
        origination(),
    )
    .unwrap()
}

fn create_test_curve() -> ZeroCurve {
    let valuation = origination();
    ZeroCurve::from_rates(
        valuation,
        vec![
            (valuation.add_months(3).unwrap(), dec!(0.030)),
            (valuation.add_months(12).unwrap(), dec!(0.035)),
            (valuation.add_months(60).unwrap(), dec!(0.045)),
            (valuation.add_months(120).unwrap(), dec!(0.050)),
            (valuation.add_months(360).unwrap(), dec!(0.055)),
        ],
    )
    .unwrap()
}

// =============================================================================
// SCHEDULE GENERATION
// =============================================================================

fn bench_mortgage_schedule(c: &mut Criterion) {
    let loan = create_mortgage(30);

    c.bench_function("mortgage_30y_schedule", |b| {
        b.iter(|| black_box(&loan).generate_schedule().unwrap())
    });

    c.bench_function("mortgage_30y_payment", |b| {
        b.iter(|| black_box(&loan).calculate_payment().unwrap())
    });
}

fn bench_schedule_by_term(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule_by_term");

    for years in [5, 10, 30, 50] {
        let loan = create_mortgage(years);
        group.throughput(Throughput::Elements(u64::from(loan.calculate_number_of_payments().unwrap())));
        group.bench_with_input(BenchmarkId::from_parameter(years), &loan, |b, loan| {
            b.iter(|| loan.generate_schedule().unwrap())
        });
    }

    group.finish();
}

fn bench_schedule_by_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule_by_policy");
    let base = create_mortgage(30);

    for policy in [
        AmortizationType::LevelPayment,
        AmortizationType::LevelPrincipal,
        AmortizationType::InterestOnly,
        AmortizationType::Bullet,
    ] {
        let loan = base.with_amortization_type(policy).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(policy), &loan, |b, loan| {
            b.iter(|| loan.generate_schedule().unwrap())
        });
    }

    group.finish();
}

fn bench_adjusted_weekly_schedule(c: &mut Criterion) {
    let loan = create_mortgage(30)
        .with_payment_frequency(PaymentFrequency::Weekly)
        .unwrap();
    let holidays = (0..30).map(|year| origination().add_months(year * 12 + 6).unwrap());
    let config = ScheduleConfig::default()
        .with_calendar(BusinessDayCalendar::new("BENCH", holidays))
        .with_convention(BusinessDayConvention::ModifiedFollowing);

    c.bench_function("weekly_30y_adjusted_schedule", |b| {
        b.iter(|| loan.generate_schedule_with(black_box(&config)).unwrap())
    });
}

// =============================================================================
// VALUATION AND AGGREGATION
// =============================================================================

fn bench_schedule_valuation(c: &mut Criterion) {
    let schedule = create_mortgage(30).generate_schedule().unwrap();
    let curve = create_test_curve();

    c.bench_function("mortgage_30y_present_value", |b| {
        b.iter(|| schedule.present_value(black_box(&curve)).unwrap())
    });

    c.bench_function("mortgage_30y_aggregate_annual", |b| {
        b.iter(|| black_box(&schedule).aggregate_by_period(PaymentFrequency::Annual))
    });

    let long = create_mortgage(30).with_term(Period::years(40)).unwrap();
    c.bench_function("mortgage_40y_total_interest", |b| {
        b.iter(|| black_box(&long).total_interest().unwrap())
    });
}

criterion_group!(
    benches,
    bench_mortgage_schedule,
    bench_schedule_by_term,
    bench_schedule_by_policy,
    bench_adjusted_weekly_schedule,
    bench_schedule_valuation,
);
criterion_main!(benches);
