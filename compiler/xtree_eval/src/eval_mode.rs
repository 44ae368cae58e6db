//! Evaluation backends.

/// How a tree is evaluated.
///
/// Both modes produce identical results for every constructible node; they
/// differ only in when the comparison rule is selected.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Translate the tree into closures once, then run them. The rule for
    /// each comparison is chosen at translation time.
    #[default]
    Compiled,
    /// Walk the tree, re-deriving each comparison's rule from the node.
    Interpreted,
}

impl EvalMode {
    pub const ALL: [EvalMode; 2] = [EvalMode::Compiled, EvalMode::Interpreted];
}
