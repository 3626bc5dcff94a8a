pub mod api;
pub mod cli;
pub mod commands;
mod context;
pub mod wizard;

pub use context::WizardContext;
