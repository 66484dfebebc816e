//! Text and JSON rendering of coin-weighing strategies.
//!
//! The solvers in `coinweigh-core` know nothing about output; everything
//! printed by the command-line tool is produced here.

pub mod table;
pub mod tree;

use serde::Serialize;

use coinweigh_core::InvariantError;

pub use table::render_static;
pub use tree::{render_tree, RenderContext};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("cannot render code table: {0}")]
    Table(#[from] InvariantError),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Pretty-printed JSON for any solution type.
pub fn render_json<T: Serialize>(value: &T) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Coins of one arm, two columns each: ` 1  2 10`.
pub(crate) fn format_arm(coins: &[coinweigh_core::Coin]) -> String {
    coins
        .iter()
        .map(|c| format!("{c:2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A weighing as `( 1  2 |  3  4)`.
pub(crate) fn format_selection(selection: &coinweigh_core::Selection) -> String {
    format!(
        "({} | {})",
        format_arm(selection.left()),
        format_arm(selection.right())
    )
}
