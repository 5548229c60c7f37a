use super::dates::DateRange;

/// Price of the selected stay.
///
/// Zero-night and inverted ranges are charged a single night, as is a listing
/// with no nightly price (which therefore totals zero).
pub fn total_price(range: &DateRange, nightly_price: i32) -> i64 {
    let nights = range.night_count();
    let price = i64::from(nightly_price);

    if nights > 0 && price != 0 {
        nights * price
    } else {
        price
    }
}

pub fn format_price(amount: i64) -> String {
    if amount < 0 {
        format!("-$ {}", amount.unsigned_abs())
    } else {
        format!("$ {}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        )
    }

    #[test]
    fn same_day_costs_one_night() {
        let r = range((2024, 1, 1), (2024, 1, 1));
        assert_eq!(total_price(&r, 100), 100);
    }

    #[test]
    fn multiplies_nights_by_price() {
        let r = range((2024, 1, 1), (2024, 1, 4));
        assert_eq!(total_price(&r, 100), 300);

        let month_boundary = range((2024, 1, 30), (2024, 2, 2));
        assert_eq!(total_price(&month_boundary, 85), 255);
    }

    #[test]
    fn zero_price_stays_zero() {
        let r = range((2024, 1, 1), (2024, 1, 10));
        assert_eq!(total_price(&r, 0), 0);
    }

    #[test]
    fn inverted_range_falls_back_to_nightly_price() {
        let r = range((2024, 1, 4), (2024, 1, 1));
        assert_eq!(total_price(&r, 120), 120);
    }

    #[test]
    fn long_stays_do_not_overflow_i32() {
        let r = range((2020, 1, 1), (2030, 1, 1));
        assert_eq!(total_price(&r, i32::MAX), 3653 * i64::from(i32::MAX));
    }

    #[test]
    fn formats_whole_units() {
        assert_eq!(format_price(300), "$ 300");
        assert_eq!(format_price(0), "$ 0");
    }
}
