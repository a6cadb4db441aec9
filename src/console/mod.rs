pub mod cli;
pub mod commands;
pub mod prompt;
pub mod repl;

pub use cli::run_cli;
pub use prompt::run_prompt;
pub use repl::run_repl;
