//! Canonical textual form of expression trees, for diagnostics.
//!
//! Comparisons render fully parenthesized, `(left == right)`, with each
//! operand rendered by its own rule. The output is not meant to be parsed.

use std::fmt;

use crate::comparison::ComparisonExpr;
use crate::expr::Expr;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(c) => write!(f, "{}", c.value()),
            Expr::Default(ty) => write!(f, "default({ty})"),
            Expr::Parameter(p) => f.write_str(p.name()),
            Expr::Property(p) => write!(f, "{}.{}", p.owner(), p.name()),
            Expr::Comparison(node) => write!(f, "{node}"),
        }
    }
}

impl fmt::Display for ComparisonExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left(), self.op(), self.right())
    }
}

impl ComparisonExpr {
    /// Same as `to_string()`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}
