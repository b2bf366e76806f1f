/*
[INPUT]:  CLI modules
[OUTPUT]: Config loading and command dispatch for the binary
[POS]:    Crate root - module wiring
[UPDATE]: When CLI modules change
*/

pub mod command;
pub mod config;

pub use command::Command;
pub use config::CliConfig;
