use crate::common::config::LOCAL_CONFIG_FILE;
use crate::common::{Config, OverflowMode};
use crate::console::commands::CommandExecutor;
use crate::console::prompt;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "factorial")]
#[command(about = "Compute integer factorials", long_about = None)]
pub struct Cli {
    /// Path to a config file (default: ./factorial.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reject results that do not fit in 64 bits instead of wrapping
    #[arg(long, global = true)]
    pub checked: bool,

    /// Log diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the factorial of each value
    Compute {
        /// Values to compute
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i32>,
    },

    /// Start the interactive shell
    Repl,

    /// Configuration operations
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Write the default configuration to a file
    Init {
        /// Destination file
        #[arg(long, default_value = LOCAL_CONFIG_FILE)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run_cli(cli: Cli) -> Result<()> {
    // Resolved per command so `config init` can replace an unreadable file
    let load_config = || -> Result<Config> {
        let mut config = Config::resolve(cli.config.as_deref())?;
        if cli.checked {
            config.compute.overflow = OverflowMode::Checked;
        }
        Ok(config)
    };

    match cli.command {
        Some(Commands::Compute { values }) => {
            let mut executor = CommandExecutor::stdout(load_config()?);
            executor.compute_all(&values)?;
        }

        Some(Commands::Repl) => {
            crate::console::repl::run_repl(load_config()?)?;
        }

        Some(Commands::Config { action }) => match action {
            ConfigCommands::Show => {
                let mut executor = CommandExecutor::stdout(load_config()?);
                executor.show_config()?;
            }
            ConfigCommands::Init { path, force } => {
                init_config(&path, force)?;
            }
        },

        None => {
            // No command provided - behave like the classic prompt program
            let config = load_config()?;
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            prompt::run_prompt(&mut input, &mut output, &config)
                .context("Failed to compute factorial")?;
        }
    }

    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Config::default().save(path)?;
    println!("{}", "✅ Default configuration written".green());
    println!("   Path: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_invocation_has_no_command() {
        let cli = Cli::try_parse_from(["factorial"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.checked);
    }

    #[test]
    fn test_compute_accepts_negative_values() {
        let cli = Cli::try_parse_from(["factorial", "compute", "5", "-2"]).unwrap();
        match cli.command {
            Some(Commands::Compute { values }) => assert_eq!(values, vec![5, -2]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_compute_requires_a_value() {
        assert!(Cli::try_parse_from(["factorial", "compute"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["factorial", "compute", "3", "--checked", "-v"]).unwrap();
        assert!(cli.checked);
        assert!(cli.verbose);
    }

    #[test]
    fn test_config_init_defaults_to_local_file() {
        let cli = Cli::try_parse_from(["factorial", "config", "init"]).unwrap();
        match cli.command {
            Some(Commands::Config {
                action: ConfigCommands::Init { path, force },
            }) => {
                assert_eq!(path, PathBuf::from(LOCAL_CONFIG_FILE));
                assert!(!force);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
