use crate::core::{ProjectionResult, YearRecord};

const SUMMARY_RULE_WIDTH: usize = 70;
const TABLE_RULE_WIDTH: usize = 90;

pub fn format_currency(amount: f64) -> String {
    if amount == 0.0 {
        return "₹0".to_string();
    }

    let fixed = format!("{amount:.2}");
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    let grouped = group_thousands(int_part);

    if frac_part == "00" {
        format!("₹{sign}{grouped}")
    } else {
        format!("₹{sign}{grouped}.{frac_part}")
    }
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, byte) in bytes.iter().enumerate() {
        if index > 0 && (bytes.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(*byte as char);
    }
    out
}

pub fn render_summary(result: &ProjectionResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "=".repeat(SUMMARY_RULE_WIDTH)));
    out.push_str("EPF MATURITY CALCULATION SUMMARY\n");
    out.push_str(&format!("{}\n", "=".repeat(SUMMARY_RULE_WIDTH)));
    out.push_str(&format!(
        "Final EPF balance at retirement: {}\n",
        format_currency(result.final_balance)
    ));
    out.push_str(&format!(
        "Total contributions made:        {}\n",
        format_currency(result.total_contribution)
    ));
    out.push_str(&format!(
        "Total interest earned:           {}\n",
        format_currency(result.total_interest)
    ));
    if result.total_contribution > 0.0 {
        let roi = result.total_interest / result.total_contribution * 100.0;
        out.push_str(&format!("Return on contributions:         {roi:.2}%\n"));
    }
    out
}

pub fn render_yearly_breakdown(yearly: &[YearRecord], show_all: bool) -> String {
    let mut out = String::new();
    out.push_str("Year-wise EPF balance:\n");
    out.push_str(&format!("{}\n", "-".repeat(TABLE_RULE_WIDTH)));
    out.push_str(&format!(
        "{:<5} {:<4} {:>15} {:>15} {:>15} {:>18}\n",
        "Year", "Age", "Monthly salary", "Contribution", "Interest", "EPF balance"
    ));
    out.push_str(&format!("{}\n", "-".repeat(TABLE_RULE_WIDTH)));

    if show_all || yearly.len() <= 10 {
        for (index, record) in yearly.iter().enumerate() {
            push_row(&mut out, index, record);
        }
    } else {
        for (index, record) in yearly.iter().take(5).enumerate() {
            push_row(&mut out, index, record);
        }
        out.push_str(&format!("... ({} more years) ...\n", yearly.len() - 10));
        for (index, record) in yearly.iter().enumerate().skip(yearly.len() - 5) {
            push_row(&mut out, index, record);
        }
    }
    out
}

fn push_row(out: &mut String, index: usize, record: &YearRecord) {
    out.push_str(&format!(
        "{:<5} {:<4} {:>15} {:>15} {:>15} {:>18}\n",
        index + 1,
        record.age,
        format_currency(record.monthly_salary),
        format_currency(record.yearly_contribution),
        format_currency(record.interest_earned),
        format_currency(record.balance_after),
    ));
}
