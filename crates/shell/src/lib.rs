//! Interactive text-menu front end for the item register.
//!
//! The shell only tokenizes input, calls into `stockroom-inventory`, and
//! renders results or error reasons. It holds no business rules.

pub mod config;
pub mod prompt;
pub mod shell;

pub use config::ShellConfig;
pub use prompt::{InputClosed, Prompt};
pub use shell::Shell;
