//! Parsing and interactive collection of the pricing inputs.

use std::io;
use std::io::{BufRead, Write};

use chrono::NaiveDate;
use strum_macros::Display;
use thiserror::Error;

use crate::condition::{Condition, InvalidCondition};
use crate::estimator::PricingInput;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InputField {
    #[strum(to_string = "purchase price")]
    Price,

    #[strum(to_string = "purchase date")]
    PurchaseDate,

    #[strum(to_string = "condition")]
    Condition,
}
impl InputField {
    pub fn prompt(&self) -> &'static str {
        match self {
            InputField::Price => "Enter the purchase price in GBP: ",
            InputField::PurchaseDate => "Enter the purchase date (YYYY-MM-DD): ",
            InputField::Condition => {
                "Enter the quality of the item ('new', 'like new', 'good', 'fair', 'poor'): "
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {message}")]
pub struct InvalidInput {
    pub field: InputField,
    pub message: String,
}
impl InvalidInput {
    fn new(field: InputField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("{0}")]
    InvalidCondition(#[from] InvalidCondition),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Parses a strictly positive, finite decimal amount.
pub fn parse_price(text: &str) -> Result<f64, InvalidInput> {
    let text = text.trim();
    let price: f64 = text
        .parse()
        .map_err(|_| InvalidInput::new(InputField::Price, format!("'{text}' is not a number")))?;
    if !price.is_finite() || price <= 0.0 {
        return Err(InvalidInput::new(
            InputField::Price,
            format!("{price} must be a positive amount"),
        ));
    }
    Ok(price)
}

/// Parses a `YYYY-MM-DD` date that is no later than `today`.
pub fn parse_date(text: &str, today: NaiveDate) -> Result<NaiveDate, InvalidInput> {
    let text = text.trim();
    let date = NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|err| {
        InvalidInput::new(
            InputField::PurchaseDate,
            format!("'{text}' is not in YYYY-MM-DD format ({err})"),
        )
    })?;
    if date > today {
        return Err(InvalidInput::new(
            InputField::PurchaseDate,
            format!("{date} is in the future"),
        ));
    }
    Ok(date)
}

/// Only the line terminator is stripped; the label match is otherwise exact.
pub fn parse_condition(text: &str) -> Result<Condition, InvalidCondition> {
    text.trim_end_matches(['\n', '\r']).parse()
}

/// Where prompts are written. JSON output keeps stdout for the result alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTarget {
    Stdout,
    Stderr,
}
impl PromptTarget {
    pub fn for_output(json: bool) -> Self {
        if json {
            PromptTarget::Stderr
        } else {
            PromptTarget::Stdout
        }
    }

    pub fn writer(&self) -> Box<dyn Write> {
        match self {
            PromptTarget::Stdout => Box::new(io::stdout()),
            PromptTarget::Stderr => Box::new(io::stderr()),
        }
    }
}

/// A single pass of prompts over a reader/writer pair. The first invalid answer ends the session.
pub struct Session<R, W> {
    reader: R,
    writer: W,
}
impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn prompt(&mut self, field: InputField) -> Result<String, SessionError> {
        write!(self.writer, "{}", field.prompt())?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InvalidInput::new(field, "no input").into());
        }
        Ok(line)
    }

    pub fn read_price(&mut self) -> Result<f64, SessionError> {
        let line = self.prompt(InputField::Price)?;
        Ok(parse_price(&line)?)
    }

    pub fn read_date(&mut self, today: NaiveDate) -> Result<NaiveDate, SessionError> {
        let line = self.prompt(InputField::PurchaseDate)?;
        Ok(parse_date(&line, today)?)
    }

    pub fn read_condition(&mut self) -> Result<Condition, SessionError> {
        let line = self.prompt(InputField::Condition)?;
        Ok(parse_condition(&line)?)
    }

    /// Prompts for the price, the purchase date and the condition, in that order.
    pub fn collect(&mut self, today: NaiveDate) -> Result<PricingInput, SessionError> {
        self.complete(None, None, None, today)
    }

    /// Parses the values already supplied, prompting only for the missing ones.
    pub fn complete(
        &mut self,
        price: Option<&str>,
        date: Option<&str>,
        condition: Option<&str>,
        today: NaiveDate,
    ) -> Result<PricingInput, SessionError> {
        let purchase_price = match price {
            Some(text) => parse_price(text)?,
            None => self.read_price()?,
        };
        let purchase_date = match date {
            Some(text) => parse_date(text, today)?,
            None => self.read_date(today)?,
        };
        let condition = match condition {
            Some(text) => parse_condition(text)?,
            None => self.read_condition()?,
        };
        Ok(PricingInput {
            purchase_price,
            purchase_date,
            condition,
        })
    }
}
