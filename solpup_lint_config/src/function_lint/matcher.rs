use super::types::FunctionMatch;
use crate::Visibility;
use solpup_common::file_kind::FileKind;

/// Fluent interface for creating function matchers
pub struct FunctionMatcher;

impl FunctionMatcher {
    /// Match functions with the exact name
    pub fn name_equals(&self, name: impl Into<String>) -> FunctionMatchNode {
        FunctionMatchNode::Leaf(FunctionMatch::NameEquals(name.into()))
    }

    /// Match functions whose name matches a regex pattern
    pub fn name_regex(&self, pattern: impl Into<String>) -> FunctionMatchNode {
        FunctionMatchNode::Leaf(FunctionMatch::NameRegex(pattern.into()))
    }

    /// Match functions declared in a contract whose name matches `pattern`
    pub fn in_contract(&self, pattern: impl Into<String>) -> FunctionMatchNode {
        FunctionMatchNode::Leaf(FunctionMatch::InContract(pattern.into()))
    }

    /// Match functions declared in files of the given kind
    pub fn in_file(&self, kind: FileKind) -> FunctionMatchNode {
        FunctionMatchNode::Leaf(FunctionMatch::InFile(kind))
    }

    /// Match functions with the given explicit visibility
    pub fn has_visibility(&self, visibility: Visibility) -> FunctionMatchNode {
        FunctionMatchNode::Leaf(FunctionMatch::HasVisibility(visibility))
    }

    /// Match internal or private functions
    pub fn hidden(&self) -> FunctionMatchNode {
        self.has_visibility(Visibility::Internal)
            .or(self.has_visibility(Visibility::Private))
    }
}

/// Node in the matcher expression tree
#[derive(Clone)]
pub enum FunctionMatchNode {
    Leaf(FunctionMatch),
    And(Box<FunctionMatchNode>, Box<FunctionMatchNode>),
    Or(Box<FunctionMatchNode>, Box<FunctionMatchNode>),
    Not(Box<FunctionMatchNode>),
}

impl FunctionMatchNode {
    pub fn and(self, other: FunctionMatchNode) -> Self {
        FunctionMatchNode::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: FunctionMatchNode) -> Self {
        FunctionMatchNode::Or(Box::new(self), Box::new(other))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        FunctionMatchNode::Not(Box::new(self))
    }

    pub fn build(self) -> FunctionMatch {
        match self {
            FunctionMatchNode::Leaf(matcher) => matcher,
            FunctionMatchNode::And(a, b) => {
                FunctionMatch::AndMatches(Box::new(a.build()), Box::new(b.build()))
            }
            FunctionMatchNode::Or(a, b) => {
                FunctionMatch::OrMatches(Box::new(a.build()), Box::new(b.build()))
            }
            FunctionMatchNode::Not(m) => FunctionMatch::NotMatch(Box::new(m.build())),
        }
    }
}

pub fn matcher<F>(f: F) -> FunctionMatch
where
    F: FnOnce(&FunctionMatcher) -> FunctionMatchNode,
{
    let matcher = FunctionMatcher;
    let node = f(&matcher);
    node.build()
}
