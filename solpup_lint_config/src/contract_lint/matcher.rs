use super::types::ContractMatch;
use crate::ContractKind;
use solpup_common::file_kind::FileKind;

/// Fluent interface for creating contract matchers
pub struct ContractMatcher;

impl ContractMatcher {
    /// Match contracts by a regular expression over their name
    pub fn name_regex(&self, pattern: impl Into<String>) -> ContractMatchNode {
        ContractMatchNode::Leaf(ContractMatch::NameRegex(pattern.into()))
    }

    /// Match contracts declared in files of the given kind
    pub fn in_file(&self, kind: FileKind) -> ContractMatchNode {
        ContractMatchNode::Leaf(ContractMatch::InFile(kind))
    }

    /// Match declarations of the given kind (contract, interface, ...)
    pub fn of_kind(&self, kind: ContractKind) -> ContractMatchNode {
        ContractMatchNode::Leaf(ContractMatch::OfKind(kind))
    }
}

/// Node in the matcher expression tree
#[derive(Clone)]
pub enum ContractMatchNode {
    Leaf(ContractMatch),
    And(Box<ContractMatchNode>, Box<ContractMatchNode>),
    Or(Box<ContractMatchNode>, Box<ContractMatchNode>),
    Not(Box<ContractMatchNode>),
}

impl ContractMatchNode {
    pub fn and(self, other: ContractMatchNode) -> Self {
        ContractMatchNode::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: ContractMatchNode) -> Self {
        ContractMatchNode::Or(Box::new(self), Box::new(other))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        ContractMatchNode::Not(Box::new(self))
    }

    pub fn build(self) -> ContractMatch {
        match self {
            ContractMatchNode::Leaf(matcher) => matcher,
            ContractMatchNode::And(a, b) => {
                ContractMatch::AndMatches(Box::new(a.build()), Box::new(b.build()))
            }
            ContractMatchNode::Or(a, b) => {
                ContractMatch::OrMatches(Box::new(a.build()), Box::new(b.build()))
            }
            ContractMatchNode::Not(m) => ContractMatch::NotMatch(Box::new(m.build())),
        }
    }
}

pub fn matcher<F>(f: F) -> ContractMatch
where
    F: FnOnce(&ContractMatcher) -> ContractMatchNode,
{
    let matcher = ContractMatcher;
    let node = f(&matcher);
    node.build()
}
