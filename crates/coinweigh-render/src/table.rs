//! Static strategy listing: code digits, fixed weighings, decoding table.

use std::fmt::Write;

use coinweigh_core::ternary::{complement, digit, digits};
use coinweigh_core::{CodeTable, Outcome};

use crate::{format_selection, RenderError};

fn digit_rows(out: &mut String, codes: &[u64], weighings: u32) {
    for pos in (0..weighings).rev() {
        for &code in codes {
            let _ = write!(out, "{:2} ", digit(code, pos));
        }
        out.push('\n');
    }
}

/// Render coin numbers, heavy-code and light-code digit rows, the fixed
/// weighings, and the outcome-to-verdict table.
pub fn render_static(table: &CodeTable) -> Result<String, RenderError> {
    let k = table.weighings();
    let selections = table.selections()?;
    let mut out = String::new();

    for coin in 1..=table.coins() {
        let _ = write!(out, "{coin:2} ");
    }
    out.push_str("\n\n+\n");
    digit_rows(&mut out, table.codes(), k);

    out.push_str("-\n");
    let light: Vec<u64> = table.codes().iter().map(|&c| complement(c)).collect();
    digit_rows(&mut out, &light, k);

    out.push('\n');
    for selection in &selections {
        out.push_str(&format_selection(selection));
        out.push('\n');
    }

    out.push('\n');
    for (code, hypothesis) in table.lookup() {
        let outcomes: String = digits(code, k)
            .into_iter()
            .filter_map(Outcome::from_digit)
            .map(Outcome::symbol)
            .collect();
        let _ = writeln!(out, "{outcomes}  {hypothesis}");
    }
    Ok(out)
}
