//! Indented decision-tree listing.
//!
//! One line per weighing:
//!
//! ```text
//!     ( 1  2  3  4 |  5  6  7  8) [8, 9, 8]
//!         +( 1  2  5 |  3  4  6) [3, 2, 3]
//!             +( 1 |  2) [1, 1, 1]  1+,  6-,  2+
//! ```
//!
//! Child sizes follow the arms. When any child holds at most one
//! hypothesis, the three child verdicts are listed as well.

use std::fmt::Write;

use coinweigh_core::{DecisionNode, Outcome, Sign, Verdict};

use crate::format_selection;

const INDENT: &str = "    ";

/// Where the walk currently is: nesting depth and the outcome that led
/// here. Passed by value down the recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub depth: usize,
    pub label: Option<Outcome>,
}

impl RenderContext {
    /// Context of the first weighing.
    pub fn root() -> Self {
        Self {
            depth: 1,
            label: None,
        }
    }

    pub fn child(self, outcome: Outcome) -> Self {
        Self {
            depth: self.depth + 1,
            label: Some(outcome),
        }
    }

    fn prefix(&self) -> String {
        let mut out = INDENT.repeat(self.depth);
        if let Some(outcome) = self.label {
            out.push(outcome.symbol());
        }
        out
    }
}

/// Three-column marker for a child subtree.
fn marker(node: &DecisionNode) -> String {
    match node.verdict() {
        Some(Verdict::Impossible) => " --".to_string(),
        Some(Verdict::Genuine) => " ==".to_string(),
        Some(Verdict::Counterfeit { coin, sign }) => {
            let s = match sign {
                Sign::Heavy => '+',
                Sign::Light => '-',
            };
            format!("{coin:2}{s}")
        }
        None => "   ".to_string(),
    }
}

fn render_node(node: &DecisionNode, ctx: RenderContext, out: &mut String) {
    let Some(selection) = node.selection() else {
        return;
    };
    let children: Vec<&DecisionNode> = Outcome::ALL
        .iter()
        .filter_map(|o| node.child(*o))
        .collect();
    let sizes: Vec<usize> = children.iter().map(|c| c.hypothesis_count()).collect();

    let _ = write!(
        out,
        "{}{} [{}] ",
        ctx.prefix(),
        format_selection(selection),
        sizes
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    if sizes.iter().any(|&s| s <= 1) {
        let markers: Vec<String> = children.iter().map(|c| marker(c)).collect();
        out.push_str(&markers.join(", "));
    }
    out.push('\n');

    for (outcome, child) in Outcome::ALL.iter().zip(children) {
        render_node(child, ctx.child(*outcome), out);
    }
}

/// Render the whole tree, one weighing per line.
pub fn render_tree(tree: &DecisionNode) -> String {
    let mut out = String::new();
    render_node(tree, RenderContext::root(), &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_prefix() {
        let root = RenderContext::root();
        assert_eq!(root.prefix(), "    ");
        let child = root.child(Outcome::Less).child(Outcome::More);
        assert_eq!(child.depth, 3);
        assert_eq!(child.prefix(), "            +");
    }

    #[test]
    fn test_leaf_renders_nothing() {
        let leaf = DecisionNode::Leaf {
            verdict: Verdict::Genuine,
        };
        assert_eq!(render_tree(&leaf), "");
    }

    #[test]
    fn test_markers() {
        let heavy = DecisionNode::Leaf {
            verdict: Verdict::Counterfeit {
                coin: 3,
                sign: Sign::Heavy,
            },
        };
        assert_eq!(marker(&heavy), " 3+");
        let none = DecisionNode::Leaf {
            verdict: Verdict::Impossible,
        };
        assert_eq!(marker(&none), " --");
    }
}
