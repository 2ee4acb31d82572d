pub mod file_kind;
pub mod project_context;
pub mod project_layout;
pub mod workspace;
