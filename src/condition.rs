//! Qualitative condition of a second-hand item and the coefficients keyed by it.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use ordinalizer::Ordinal;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount, EnumIter};
use thiserror::Error;

/// Fraction of value lost per year, indexed by [`Condition`] ordinal.
const DEPRECIATION_RATES: [f64; Condition::COUNT] = [0.20, 0.25, 0.30, 0.40, 0.60];

/// Fraction of the listing price below which an offer should be declined, indexed by
/// [`Condition`] ordinal.
const FLOOR_FACTORS: [f64; Condition::COUNT] = [0.80, 0.70, 0.60, 0.50, 0.40];

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Ordinal,
    EnumCount,
    EnumIter,
    Display,
    Serialize,
    Deserialize,
)]
pub enum Condition {
    #[strum(to_string = "new")]
    #[serde(rename = "new")]
    New,

    #[strum(to_string = "like new")]
    #[serde(rename = "like new")]
    LikeNew,

    #[strum(to_string = "good")]
    #[serde(rename = "good")]
    Good,

    #[strum(to_string = "fair")]
    #[serde(rename = "fair")]
    Fair,

    #[strum(to_string = "poor")]
    #[serde(rename = "poor")]
    Poor,
}
impl Condition {
    pub fn depreciation_rate(&self) -> f64 {
        DEPRECIATION_RATES[self.ordinal()]
    }

    pub fn floor_factor(&self) -> f64 {
        FLOOR_FACTORS[self.ordinal()]
    }

    /// The accepted labels, in table order.
    pub fn labels() -> Vec<String> {
        Condition::iter().map(|condition| condition.to_string()).collect()
    }
}

impl FromStr for Condition {
    type Err = InvalidCondition;

    /// Matches case-sensitively against the labels rendered by [`Display`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::iter()
            .find(|condition| condition.to_string() == s)
            .ok_or_else(|| InvalidCondition {
                value: s.into(),
                accepted: Condition::labels(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid condition '{value}'; valid options are: {}", QuotedLabels(.accepted))]
pub struct InvalidCondition {
    pub value: String,
    pub accepted: Vec<String>,
}

struct QuotedLabels<'a>(&'a [String]);

impl Display for QuotedLabels<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, label) in self.0.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{label}'")?;
        }
        Ok(())
    }
}
