//! Exponential depreciation of a purchase price into a listing price and a floor price.

use std::ops::RangeInclusive;

use anyhow::bail;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::clock::Clock;
use crate::condition::{Condition, InvalidCondition};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Multiplier taken off the depreciated value to stay competitive with other listings.
    pub competitive_factor: f64,

    /// Fraction of the sale price retained by the marketplace.
    pub platform_fee_rate: f64,

    pub days_per_year: f64,
}
impl PricingConfig {
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        const VALID_COMPETITIVE_FACTOR: RangeInclusive<f64> = 0.0..=1.0;
        if !VALID_COMPETITIVE_FACTOR.contains(&self.competitive_factor) {
            bail!("competitive factor must be in the range {VALID_COMPETITIVE_FACTOR:?}");
        }
        if !(0.0..1.0).contains(&self.platform_fee_rate) {
            bail!("platform fee rate must be in the range [0, 1)");
        }
        if !(self.days_per_year > 0.0) {
            bail!("days per year must be positive");
        }
        Ok(())
    }

    pub fn fee_multiplier(&self) -> f64 {
        1.0 - self.platform_fee_rate
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            competitive_factor: 0.9,
            platform_fee_rate: 0.0,
            days_per_year: 365.25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingInput {
    pub purchase_price: f64,
    pub purchase_date: NaiveDate,
    pub condition: Condition,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub listing_price: f64,
    pub lowest_acceptable_price: f64,
}

/// Unrounded intermediates of a single calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Valuation {
    pub age_in_years: f64,
    pub depreciated_value: f64,
    pub listing_price: f64,
    pub lowest_acceptable_price: f64,
}
impl Valuation {
    pub fn rounded(&self) -> PricingResult {
        PricingResult {
            listing_price: round_cents(self.listing_price),
            lowest_acceptable_price: round_cents(self.lowest_acceptable_price),
        }
    }
}

/// Values an item of a given `age_in_years`. Negative ages are taken as zero, so that an item
/// is never worth more than its purchase price.
pub fn value_at_age(
    config: &PricingConfig,
    purchase_price: f64,
    age_in_years: f64,
    condition: Condition,
) -> Valuation {
    let age_in_years = f64::max(0.0, age_in_years);
    let depreciated_value =
        purchase_price * (1.0 - condition.depreciation_rate()).powf(age_in_years);
    let listing_price = depreciated_value * config.competitive_factor;
    let lowest_acceptable_price = listing_price * condition.floor_factor();
    let fee_multiplier = config.fee_multiplier();
    Valuation {
        age_in_years,
        depreciated_value,
        listing_price: listing_price * fee_multiplier,
        lowest_acceptable_price: lowest_acceptable_price * fee_multiplier,
    }
}

/// Rounds to two decimal places. The exact binary value is rounded, with ties going to the even
/// neighbour, so that `0.015` (stored just below the midpoint) becomes `0.01`.
pub fn round_cents(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

#[derive(Debug, Clone)]
pub struct PriceEstimator<C> {
    config: PricingConfig,
    clock: C,
}
impl<C: Clock> PriceEstimator<C> {
    pub fn new(clock: C) -> Self {
        Self {
            config: PricingConfig::default(),
            clock,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: PricingConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Whole days elapsed since `purchase_date`, in fractional years. May be negative for a
    /// date in the future.
    pub fn age_in_years(&self, purchase_date: NaiveDate) -> f64 {
        let days = (self.clock.today() - purchase_date).num_days();
        days as f64 / self.config.days_per_year
    }

    pub fn value(&self, input: &PricingInput) -> Valuation {
        let valuation = value_at_age(
            &self.config,
            input.purchase_price,
            self.age_in_years(input.purchase_date),
            input.condition,
        );
        debug!("input: {input:?}, valuation: {valuation:?}");
        valuation
    }

    pub fn estimate(&self, input: &PricingInput) -> PricingResult {
        self.value(input).rounded()
    }

    /// As [`estimate`](Self::estimate), with the condition given by its label.
    pub fn estimate_labelled(
        &self,
        purchase_price: f64,
        purchase_date: NaiveDate,
        condition: &str,
    ) -> Result<PricingResult, InvalidCondition> {
        let condition: Condition = condition.parse()?;
        Ok(self.estimate(&PricingInput {
            purchase_price,
            purchase_date,
            condition,
        }))
    }

    /// Prices the same item under every condition, in table order.
    pub fn estimate_all_conditions(
        &self,
        purchase_price: f64,
        purchase_date: NaiveDate,
    ) -> Vec<(Condition, PricingResult)> {
        Condition::iter()
            .map(|condition| {
                let input = PricingInput {
                    purchase_price,
                    purchase_date,
                    condition,
                };
                (condition, self.estimate(&input))
            })
            .collect()
    }

    /// Prices the item at each whole year of age from zero to `years` inclusive.
    pub fn schedule(&self, input: &PricingInput, years: u16) -> Vec<(u16, PricingResult)> {
        (0..=years)
            .map(|year| {
                let valuation = value_at_age(
                    &self.config,
                    input.purchase_price,
                    year as f64,
                    input.condition,
                );
                (year, valuation.rounded())
            })
            .collect()
    }
}
