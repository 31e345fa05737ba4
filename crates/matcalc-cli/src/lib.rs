//! # matcalc-cli
//!
//! CLI output, styled messages, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::CLIResultPresenter;
