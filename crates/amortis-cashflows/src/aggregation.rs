//! Calendar-aligned period buckets for schedule aggregation.

use amortis_core::types::{Date, PaymentFrequency};
use chrono::Datelike;

/// Monday 1970-01-05 as days from the common era, origin of the 14-day
/// bi-weekly blocks.
const BIWEEKLY_EPOCH_CE_DAYS: i64 = 719_167;

/// Start of the bucket `date` falls into under `frequency`.
///
/// `first` is the earliest date being aggregated; it keys the single
/// `ZeroCoupon` bucket.
pub(crate) fn bucket_start(date: Date, frequency: PaymentFrequency, first: Date) -> Date {
    match frequency {
        PaymentFrequency::ZeroCoupon => first,
        PaymentFrequency::Weekly => date.start_of_week(),
        PaymentFrequency::BiWeekly => {
            let since_epoch = i64::from(date.as_naive_date().num_days_from_ce()) - BIWEEKLY_EPOCH_CE_DAYS;
            date.add_days(-since_epoch.rem_euclid(14))
        }
        PaymentFrequency::Monthly => date.start_of_month(),
        PaymentFrequency::Quarterly => month_block_start(date, 3),
        PaymentFrequency::SemiAnnual => month_block_start(date, 6),
        PaymentFrequency::Annual => month_block_start(date, 12),
    }
}

/// First day of the `months`-long block containing `date`, counted from January.
///
/// Steps back one month start at a time; the block never leaves the
/// date's own year, so every step stays in range.
fn month_block_start(date: Date, months: u32) -> Date {
    let offset = (date.month() - 1) % months;
    (0..offset).fold(date.start_of_month(), |start, _| start.add_days(-1).start_of_month())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_month_based_buckets() {
        let date = d(2025, 8, 17);
        let first = d(2025, 1, 1);
        assert_eq!(bucket_start(date, PaymentFrequency::Monthly, first), d(2025, 8, 1));
        assert_eq!(bucket_start(date, PaymentFrequency::Quarterly, first), d(2025, 7, 1));
        assert_eq!(bucket_start(date, PaymentFrequency::SemiAnnual, first), d(2025, 7, 1));
        assert_eq!(bucket_start(date, PaymentFrequency::Annual, first), d(2025, 1, 1));
        assert_eq!(bucket_start(d(2025, 3, 31), PaymentFrequency::Quarterly, first), d(2025, 1, 1));
    }

    #[test]
    fn test_month_blocks_stay_in_year() {
        let first = d(2024, 1, 1);
        assert_eq!(bucket_start(d(2024, 12, 31), PaymentFrequency::Annual, first), d(2024, 1, 1));
        assert_eq!(bucket_start(d(2024, 12, 31), PaymentFrequency::SemiAnnual, first), d(2024, 7, 1));
        assert_eq!(bucket_start(d(2024, 3, 1), PaymentFrequency::Quarterly, first), d(2024, 1, 1));
        assert_eq!(bucket_start(d(2024, 1, 1), PaymentFrequency::Annual, first), d(2024, 1, 1));
        for month in 1..=12 {
            let start = bucket_start(d(2023, month, 28), PaymentFrequency::Quarterly, first);
            assert_eq!(start.month(), 1 + 3 * ((month - 1) / 3));
            assert_eq!((start.year(), start.day()), (2023, 1));
        }
    }

    #[test]
    fn test_week_based_buckets() {
        let first = d(2025, 1, 1);
        // 2025-01-08 is a Wednesday
        assert_eq!(bucket_start(d(2025, 1, 8), PaymentFrequency::Weekly, first), d(2025, 1, 6));
        // 2025-01-06 is exactly 1435 blocks after the epoch
        assert_eq!(bucket_start(d(2025, 1, 6), PaymentFrequency::BiWeekly, first), d(2025, 1, 6));
        assert_eq!(bucket_start(d(2025, 1, 19), PaymentFrequency::BiWeekly, first), d(2025, 1, 6));
        assert_eq!(bucket_start(d(2024, 12, 30), PaymentFrequency::BiWeekly, first), d(2024, 12, 23));
        assert_eq!(bucket_start(d(1970, 1, 5), PaymentFrequency::BiWeekly, first), d(1970, 1, 5));
        assert_eq!(bucket_start(d(1970, 1, 4), PaymentFrequency::BiWeekly, first), d(1969, 12, 22));
    }

    #[test]
    fn test_zero_coupon_bucket() {
        let first = d(2025, 1, 5);
        assert_eq!(bucket_start(d(2040, 6, 1), PaymentFrequency::ZeroCoupon, first), first);
    }
}
