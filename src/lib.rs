//! Suggested resale prices for second-hand items. A purchase price is depreciated exponentially
//! by the item's age, at an annual rate keyed to its condition, to arrive at a competitive
//! listing price and the lowest offer worth accepting.

pub mod clock;
pub mod condition;
pub mod estimator;
pub mod input;
pub mod print;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
