pub mod deploy;
pub mod install;
