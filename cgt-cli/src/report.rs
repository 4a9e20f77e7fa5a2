//! Side-by-side rendering of a [`Comparison`].

use cgt_core::{Comparison, PolicyParams, Warning};
use rust_decimal::Decimal;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::format::{format_percent, format_won};

/// One line item of the report table.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct ReportRow {
    #[tabled(rename = "Item")]
    pub item: &'static str,
    #[tabled(rename = "Current rules")]
    pub current: String,
    #[tabled(rename = "2026 amendment")]
    pub amended: String,
}

impl ReportRow {
    fn new(
        item: &'static str,
        current: Decimal,
        amended: Decimal,
    ) -> Self {
        Self {
            item,
            current: format_won(current),
            amended: format_won(amended),
        }
    }

    fn amended_only(
        item: &'static str,
        amended: String,
    ) -> Self {
        Self {
            item,
            current: "-".to_string(),
            amended,
        }
    }
}

/// Line items in waterfall order.
pub fn rows(
    comparison: &Comparison,
    policy: &PolicyParams,
) -> Vec<ReportRow> {
    let current = &comparison.current;
    let amended = &comparison.additional;
    let return_quarter = if comparison.election.apply_ria {
        comparison.election.return_quarter.label(policy)
    } else {
        "not elected".to_string()
    };

    vec![
        ReportRow::new("Capital gain", current.capital_gain, amended.tax.capital_gain),
        ReportRow::amended_only("RIA return", return_quarter),
        ReportRow::amended_only(
            "RIA exemption",
            format!(
                "{} ({})",
                format_won(amended.ria_exemption),
                format_percent(amended.ria_discount_rate)
            ),
        ),
        ReportRow::new(
            "Taxable capital gain",
            current.taxable_capital_gain,
            amended.tax.taxable_capital_gain,
        ),
        ReportRow::new("Total gains", current.total_gains, amended.tax.total_gains),
        ReportRow::new(
            "Basic deduction",
            current.basic_deduction,
            amended.tax.basic_deduction,
        ),
        ReportRow::amended_only("Hedge deduction", format_won(amended.hedge_deduction)),
        ReportRow::new("Tax base", current.tax_base, amended.tax.tax_base),
        ReportRow::new("National tax", current.national_tax, amended.tax.national_tax),
        ReportRow::new("Local income tax", current.local_tax, amended.tax.local_tax),
        ReportRow::new("Total tax", current.total_tax, amended.tax.total_tax),
        ReportRow::new("Net proceeds", current.net_proceeds, amended.tax.net_proceeds),
    ]
}

/// Warning text with amounts grouped like the table figures.
pub fn describe_warning(warning: &Warning) -> String {
    match warning {
        Warning::HedgeAmountOverLimit { amount, limit } => format!(
            "hedge amount {} exceeds the recognition limit {}; the limit is used",
            format_won(*amount),
            format_won(*limit)
        ),
        Warning::NegativeHedgeAmount { amount } => format!(
            "hedge amount {} is negative; treated as 0원",
            format_won(*amount)
        ),
        Warning::HedgeAmountWithoutElection => warning.to_string(),
    }
}

/// Renders the table followed by the saving summary and any warnings.
pub fn render(
    comparison: &Comparison,
    policy: &PolicyParams,
) -> String {
    let amended = &comparison.additional;
    let mut out = Table::new(rows(comparison, policy))
        .with(Style::modern())
        .to_string();

    out.push_str(&format!("\n\nPolicy: {}\n", comparison.policy_version));
    out.push_str(&format!(
        "RIA saving (approx.):   {}\n",
        format_won(amended.ria_tax_saving)
    ));
    out.push_str(&format!(
        "Hedge saving (approx.): {}\n",
        format_won(amended.hedge_tax_saving)
    ));
    out.push_str(&format!("Total saving:           {}", format_won(comparison.tax_saving())));
    if let Some(rate) = comparison.saving_rate() {
        out.push_str(&format!(" (-{rate}%)"));
    }
    out.push('\n');

    for warning in &comparison.warnings {
        out.push_str(&format!("warning: {}\n", describe_warning(warning)));
    }

    out
}
