//! Newick string writing for [Tree].

use crate::model::Tree;

/// Per-branch structural characters: `(` and `)`.
const BRANCH_CHARS: usize = 2;

/// Returns the Newick representation of the given tree.
///
/// A leaf renders as its label verbatim; a branch renders as `(`,
/// the comma-joined (no spaces) rendering of each child in order, and
/// `)`. A branch with zero children renders as `()`. Rendering is total
/// and never fails.
///
/// This is the inverse of parsing up to separator formatting: parsing
/// the returned string yields a tree equal to `tree`, but rendering
/// does not restore whitespace or commas the parser discarded.
///
/// # Arguments
/// * `tree` - The tree to render
///
/// # Returns
/// The canonical Newick string of `tree`
///
/// # Example
/// ```
/// use rewick::Tree;
/// use rewick::newick::to_newick;
///
/// let tree = Tree::branch(vec![
///     Tree::leaf("A"),
///     Tree::branch(vec![Tree::leaf("B"), Tree::leaf("C")]),
/// ]);
/// assert_eq!(to_newick(&tree), "(A,(B,C))");
/// ```
pub fn to_newick(tree: &Tree) -> String {
    // One sizing pass up front, so the build pass never reallocates.
    let mut newick = String::with_capacity(newick_len(tree));
    build_newick(tree, &mut newick);
    newick
}

/// Recursive helper appending the rendering of `tree` to one shared
/// buffer (depth-first, children in stored order).
fn build_newick(tree: &Tree, newick: &mut String) {
    match tree {
        Tree::Leaf(label) => newick.push_str(label),
        Tree::Branch(children) => {
            newick.push('(');
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    newick.push(',');
                }
                build_newick(child, newick);
            }
            newick.push(')');
        }
    }
}

/// Computes the exact length of the Newick string for a tree:
/// label bytes for leaves, parentheses and separating commas for
/// branches.
fn newick_len(tree: &Tree) -> usize {
    match tree {
        Tree::Leaf(label) => label.len(),
        Tree::Branch(children) => {
            let separators = children.len().saturating_sub(1);
            let children_len: usize = children.iter().map(newick_len).sum();
            BRANCH_CHARS + separators + children_len
        }
    }
}
