//! Terminal receipt
//!
//! Renders a selected basket as a table, followed by target, total, and
//! remainder summary lines. Taxable items carry a `*` next to the price
//! actually paid.

use std::io;

use bodega::basket::Basket;
use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ReportError {
    #[error("failed to write receipt")]
    Io(#[from] io::Error),
}

pub(crate) fn write_receipt(
    mut out: impl io::Write,
    basket: &Basket<'_>,
    target: Money<'_, Currency>,
) -> Result<(), ReportError> {
    if basket.is_empty() {
        writeln!(out, "\n (no catalog item fits the target)")?;
    } else {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "SKU", "Price", "Paid"]);

        for (index, item) in basket.iter().enumerate() {
            let tax_marker = if item.taxable() { " *" } else { "" };

            builder.push_record([
                format!("#{:<3}", index + 1),
                item.name().to_string(),
                item.sku().to_string(),
                format!("{}", item.price()),
                format!("{}{tax_marker}", item.full_price()),
            ]);
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());
        let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(1, separator);

        table.with(theme);
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(3..5), Alignment::right());

        writeln!(out, "\n{table}")?;
    }

    writeln!(out, " Target:    {target}")?;
    writeln!(out, " Total:     {}", basket.total())?;
    writeln!(out, " Remainder: {}", basket.remainder())?;
    writeln!(out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use bodega::catalog::CatalogItem;
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn receipt_lists_items_and_summary() -> TestResult {
        let items = vec![
            CatalogItem::new("Sparkling Water 1L", "012000161155", Money::from_minor(100, USD), true)?,
            CatalogItem::new("Whole Milk Quart", "041900045203", Money::from_minor(189, USD), false)?,
        ];

        let basket = Basket::new(items, Money::from_minor(202, USD));

        let mut out = Vec::new();
        write_receipt(&mut out, &basket, Money::from_minor(500, USD))?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("Sparkling Water 1L"));
        assert!(output.contains("$1.09 *"));
        assert!(output.contains("Target:    $5.00"));
        assert!(output.contains("Total:     $2.98"));
        assert!(output.contains("Remainder: $2.02"));

        Ok(())
    }

    #[test]
    fn empty_basket_receipt_still_shows_summary() -> TestResult {
        let basket = Basket::new(Vec::new(), Money::from_minor(200, USD));

        let mut out = Vec::new();
        write_receipt(&mut out, &basket, Money::from_minor(200, USD))?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("no catalog item fits the target"));
        assert!(output.contains("Remainder: $2.00"));

        Ok(())
    }
}
