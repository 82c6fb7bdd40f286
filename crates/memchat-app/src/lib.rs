//! Front-end pieces shared by the `memchat` and `list-models` binaries.

pub mod boot;
pub mod cli;
pub mod error;
pub mod listing;
pub mod repl;
