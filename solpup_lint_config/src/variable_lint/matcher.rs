use super::types::VariableMatch;
use solpup_common::file_kind::FileKind;

/// Fluent interface for creating variable matchers
///
/// Used with the `matching()` method to create variable matching criteria
pub struct VariableMatcher;

impl VariableMatcher {
    /// Match variables by a regular expression over their name
    pub fn name_regex(&self, pattern: impl Into<String>) -> VariableMatchNode {
        VariableMatchNode::Leaf(VariableMatch::NameRegex(pattern.into()))
    }

    /// Match `constant` variables
    pub fn constant(&self) -> VariableMatchNode {
        VariableMatchNode::Leaf(VariableMatch::Constant)
    }

    /// Match `immutable` variables
    pub fn immutable(&self) -> VariableMatchNode {
        VariableMatchNode::Leaf(VariableMatch::Immutable)
    }

    /// Match variables declared inside a contract whose name matches `pattern`
    pub fn in_contract(&self, pattern: impl Into<String>) -> VariableMatchNode {
        VariableMatchNode::Leaf(VariableMatch::InContract(pattern.into()))
    }

    /// Match variables declared in files of the given kind
    pub fn in_file(&self, kind: FileKind) -> VariableMatchNode {
        VariableMatchNode::Leaf(VariableMatch::InFile(kind))
    }
}

/// Node in the matcher expression tree
///
/// You can combine these nodes with logical operations (.and(), .or(), .not())
#[derive(Clone)]
pub enum VariableMatchNode {
    Leaf(VariableMatch),
    And(Box<VariableMatchNode>, Box<VariableMatchNode>),
    Or(Box<VariableMatchNode>, Box<VariableMatchNode>),
    Not(Box<VariableMatchNode>),
}

impl VariableMatchNode {
    /// Create a logical AND operation between two matchers
    pub fn and(self, other: VariableMatchNode) -> Self {
        VariableMatchNode::And(Box::new(self), Box::new(other))
    }

    /// Create a logical OR operation between two matchers
    pub fn or(self, other: VariableMatchNode) -> Self {
        VariableMatchNode::Or(Box::new(self), Box::new(other))
    }

    /// Create a logical NOT operation that inverts the matcher
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        VariableMatchNode::Not(Box::new(self))
    }

    // Converts the DSL tree to the actual VariableMatch
    pub fn build(self) -> VariableMatch {
        match self {
            VariableMatchNode::Leaf(matcher) => matcher,
            VariableMatchNode::And(a, b) => {
                VariableMatch::AndMatches(Box::new(a.build()), Box::new(b.build()))
            }
            VariableMatchNode::Or(a, b) => {
                VariableMatch::OrMatches(Box::new(a.build()), Box::new(b.build()))
            }
            VariableMatchNode::Not(m) => VariableMatch::NotMatch(Box::new(m.build())),
        }
    }
}

/// Helper function that converts a matcher DSL expression to a VariableMatch
pub fn matcher<F>(f: F) -> VariableMatch
where
    F: FnOnce(&VariableMatcher) -> VariableMatchNode,
{
    let matcher = VariableMatcher;
    let node = f(&matcher);
    node.build()
}
