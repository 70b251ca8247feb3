//! Category total display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Amount, CategoryTotalSnapshot};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Total")]
    total: String,
}

/// Format category totals in enumeration order, followed by the grand total
pub fn format_category_totals(totals: &[CategoryTotalSnapshot], currency_symbol: &str) -> String {
    if totals.is_empty() {
        return "No categories found.\n".to_string();
    }

    let rows = totals.iter().enumerate().map(|(index, total)| CategoryRow {
        index,
        name: total.name.clone(),
        total: Amount::new(total.total).format_with_symbol(currency_symbol),
    });

    let grand_total: Amount = totals.iter().map(|t| Amount::new(t.total)).sum();

    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push_str(&format!(
        "\nTotal: {}\n",
        grand_total.format_with_symbol(currency_symbol)
    ));
    output
}
