//! Provides the tree representation for label-only Newick strings.
//!
//! Provides the core data structure [Tree], a recursive sum type of
//! labeled leaves and internal branch vertices. Trees are plain owned
//! values: children are stored inline, there are no parent references,
//! and once built a tree is only read (rendered or compared).

use crate::newick;

// =#========================================================================#=
// TREE
// =#========================================================================#=
/// A rooted tree as described by a label-only Newick string.
///
/// A tree is either a [Leaf](Tree::Leaf) carrying its label, or a
/// [Branch](Tree::Branch) owning an ordered sequence of child trees.
/// Child order is significant and preserved exactly as written in the
/// source text. A branch with no children is valid and corresponds to
/// the Newick string `()`.
///
/// # Construction
/// Trees are usually produced by [parse_str](crate::newick::parse_str),
/// but can also be composed directly:
///
/// ```
/// use rewick::Tree;
///
/// let tree = Tree::branch(vec![
///     Tree::leaf("A"),
///     Tree::branch(vec![Tree::leaf("B"), Tree::leaf("C")]),
/// ]);
/// assert_eq!(tree.to_newick(), "(A,(B,C))");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree {
    /// Terminal vertex holding a label.
    Leaf(String),
    /// Internal vertex exclusively owning its ordered children.
    Branch(Vec<Tree>),
}

// ============================================================================
// Construction, Getters / Accessors (pub)
// ============================================================================
impl Tree {
    /// Creates a leaf with the given label.
    pub fn leaf<S: Into<String>>(label: S) -> Self {
        Tree::Leaf(label.into())
    }

    /// Creates a branch with the given children (zero or more).
    pub fn branch(children: Vec<Tree>) -> Self {
        Tree::Branch(children)
    }

    /// Returns whether this tree is a single leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf(_))
    }

    /// Returns whether the root of this tree is a branch vertex.
    pub fn is_branch(&self) -> bool {
        matches!(self, Tree::Branch(_))
    }

    /// Returns the label of this tree, or `None` if it is a branch.
    pub fn label(&self) -> Option<&str> {
        match self {
            Tree::Leaf(label) => Some(label),
            Tree::Branch(_) => None,
        }
    }

    /// Returns the children of this tree, or `None` if it is a leaf.
    ///
    /// Note that a branch may have an empty child slice (`()`), which
    /// is distinct from being a leaf.
    pub fn children(&self) -> Option<&[Tree]> {
        match self {
            Tree::Leaf(_) => None,
            Tree::Branch(children) => Some(children),
        }
    }
}

// ============================================================================
// Printing (pub)
// ============================================================================
impl Tree {
    /// Convenience method to convert this tree to a Newick string.
    ///
    /// See [to_newick](crate::newick::to_newick) for full documentation.
    pub fn to_newick(&self) -> String {
        newick::to_newick(self)
    }
}

impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_newick())
    }
}
