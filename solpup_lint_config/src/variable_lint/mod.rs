mod builder;
mod generate_config;
mod matcher;
#[cfg(test)]
mod tests;
mod types;

pub use builder::{
    VariableConstraintBuilder, VariableLintBuilder, VariableLintExt, VariableNamedBuilder,
};
pub use matcher::{VariableMatchNode, VariableMatcher, matcher};
pub use types::{VariableLint, VariableMatch, VariableRule};
