//! Console output of pricing results.

use std::io;
use std::io::Write;

use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::condition::Condition;
use crate::estimator::PricingResult;

pub const CURRENCY_SYMBOL: char = '£';

pub fn write_result(writer: &mut impl Write, result: &PricingResult) -> Result<(), io::Error> {
    writeln!(writer, "Listing Price: {CURRENCY_SYMBOL}{:.2}", result.listing_price)?;
    writeln!(
        writer,
        "Lowest Acceptable Price: {CURRENCY_SYMBOL}{:.2}",
        result.lowest_acceptable_price
    )?;
    Ok(())
}

fn price_cols(first: &'static str) -> (Vec<Col>, Row) {
    let cols = vec![
        Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Left)),
        Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
    ];
    let header = Row::new(
        Styles::default().with(Header(true)).with(Separator(true)),
        vec![first.into(), "Listing".into(), "Lowest".into()],
    );
    (cols, header)
}

fn price_row(label: String, result: &PricingResult) -> Row {
    Row::new(
        Styles::default(),
        vec![
            label.into(),
            format!("{CURRENCY_SYMBOL}{:.2}", result.listing_price).into(),
            format!("{CURRENCY_SYMBOL}{:.2}", result.lowest_acceptable_price).into(),
        ],
    )
}

pub fn tabulate_conditions(rows: &[(Condition, PricingResult)]) -> Table {
    let (cols, header) = price_cols("Condition");
    let mut table = Table::default().with_cols(cols).with_row(header);
    for (condition, result) in rows {
        table.push_row(price_row(condition.to_string(), result));
    }
    table
}

pub fn tabulate_schedule(rows: &[(u16, PricingResult)]) -> Table {
    let (cols, header) = price_cols("Age (years)");
    let mut table = Table::default().with_cols(cols).with_row(header);
    for (year, result) in rows {
        table.push_row(price_row(year.to_string(), result));
    }
    table
}

#[cfg(test)]
mod tests {
    use stanza::renderer::console::Console;
    use stanza::renderer::Renderer;

    use super::*;

    #[test]
    fn write_result_two_decimals() {
        let mut out = Vec::new();
        write_result(
            &mut out,
            &PricingResult {
                listing_price: 90.0,
                lowest_acceptable_price: 72.0,
            },
        )
        .unwrap();
        assert_eq!(
            "Listing Price: £90.00\nLowest Acceptable Price: £72.00\n",
            String::from_utf8(out).unwrap()
        );
    }

    #[test]
    fn tabulate_conditions_one_row_each() {
        let result = PricingResult {
            listing_price: 31.5,
            lowest_acceptable_price: 18.9,
        };
        let table = tabulate_conditions(&[(Condition::Good, result), (Condition::LikeNew, result)]);
        assert_eq!(3, table.num_rows());
        let rendered = format!("{}", Console::default().render(&table));
        assert!(rendered.contains("like new"), "{rendered}");
        assert!(rendered.contains("£31.50"), "{rendered}");
        assert!(rendered.contains("£18.90"), "{rendered}");
    }

    #[test]
    fn tabulate_schedule_one_row_per_year() {
        let schedule: Vec<_> = (0..=4u16)
            .map(|year| {
                (
                    year,
                    PricingResult {
                        listing_price: 10.0 - year as f64,
                        lowest_acceptable_price: 5.0,
                    },
                )
            })
            .collect();
        let table = tabulate_schedule(&schedule);
        assert_eq!(6, table.num_rows());
        let rendered = format!("{}", Console::default().render(&table));
        assert!(rendered.contains("Age (years)"), "{rendered}");
        assert!(rendered.contains("£6.00"), "{rendered}");
    }
}
