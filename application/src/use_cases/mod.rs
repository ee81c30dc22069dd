//! Use cases (application services)

pub mod invoke_tool;
