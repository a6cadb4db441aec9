use crate::common::{Config, OverflowMode};
use crate::console::commands::CommandExecutor;
use crate::console::prompt::parse_input;
use anyhow::Result;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::Write;

/// What the shell should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn run_repl(config: Config) -> Result<()> {
    println!(
        "{} ({} overflow, 'help' lists commands)",
        "factorial shell".bold(),
        config.compute.overflow
    );

    let history_file = if config.prompt.history {
        dirs::home_dir().map(|h| h.join(".factorial_history"))
    } else {
        None
    };
    let mut executor = CommandExecutor::stdout(config);

    let mut rl: DefaultEditor = DefaultEditor::new()?;

    if let Some(ref path) = history_file {
        let _ = rl.load_history(path);
    }

    loop {
        let readline = rl.readline("factorial> ");

        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                match handle_command(&mut executor, line) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Exit) => break,
                    Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    if let Some(ref path) = history_file {
        let _ = rl.save_history(path);
    }

    Ok(())
}

pub fn handle_command<W: Write>(executor: &mut CommandExecutor<W>, line: &str) -> Result<Flow> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Ok(Flow::Continue);
    }

    match parts[0] {
        "help" => {
            executor.show_help()?;
        }
        "exit" | "quit" => {
            return Ok(Flow::Exit);
        }
        "config" => {
            executor.show_config()?;
        }
        "mode" => match parts.get(1) {
            None => executor.show_mode()?,
            Some(name) => {
                let mode: OverflowMode = name.parse()?;
                executor.set_mode(mode);
                executor.show_mode()?;
            }
        },
        first => {
            if parts.len() > 1 {
                anyhow::bail!("expected a single integer, got '{}'", line);
            }
            let n = parse_input(first).map_err(|e| {
                anyhow::anyhow!("{} (type 'help' for available commands)", e)
            })?;
            executor.compute(n)?;
        }
    }

    Ok(Flow::Continue)
}
