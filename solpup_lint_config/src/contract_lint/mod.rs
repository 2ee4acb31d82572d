mod builder;
mod generate_config;
mod matcher;
mod types;

pub use builder::{
    ContractConstraintBuilder, ContractLintBuilder, ContractLintExt, ContractNamedBuilder,
};
pub use matcher::{ContractMatchNode, ContractMatcher, matcher};
pub use types::{ContractLint, ContractMatch, ContractRule};
