mod contract_lint;
mod function_lint;
mod variable_lint;

pub use contract_lint::ContractLint;
pub use function_lint::FunctionLint;
pub use variable_lint::VariableLint;
