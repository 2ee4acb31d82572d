use crate::SourceLintRule;

///
/// Collects a set of configured lints, ready to run over a project.
///
pub struct LintCollection {
    lints: Vec<Box<dyn SourceLintRule + Send>>,
}

impl LintCollection {
    pub fn new(lints: Vec<Box<dyn SourceLintRule + Send>>) -> LintCollection {
        LintCollection { lints }
    }

    pub fn lints(&self) -> &Vec<Box<dyn SourceLintRule + Send>> {
        &self.lints
    }

    pub fn len(&self) -> usize {
        self.lints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lints.is_empty()
    }
}
