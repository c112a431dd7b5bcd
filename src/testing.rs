//! Testing helpers.

use assert_float_eq::*;
use chrono::NaiveDate;

use crate::estimator::PricingResult;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn assert_result_absolute(
    expected_listing_price: f64,
    expected_lowest_acceptable_price: f64,
    actual: &PricingResult,
) {
    assert_float_absolute_eq!(expected_listing_price, actual.listing_price, 1e-9);
    assert_float_absolute_eq!(
        expected_lowest_acceptable_price,
        actual.lowest_acceptable_price,
        1e-9
    );
}
