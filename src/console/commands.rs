use anyhow::Result;
use colored::*;
use std::io::Write;

use crate::common::{Config, Evaluation, OverflowMode};
use crate::math::{self, MAX_EXACT_INPUT};

pub struct CommandExecutor<W: Write> {
    config: Config,
    out: W,
}

impl CommandExecutor<std::io::Stdout> {
    pub fn stdout(config: Config) -> Self {
        CommandExecutor::new(config, std::io::stdout())
    }
}

impl<W: Write> CommandExecutor<W> {
    pub fn new(config: Config, out: W) -> Self {
        CommandExecutor { config, out }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mode(&self) -> OverflowMode {
        self.config.compute.overflow
    }

    pub fn set_mode(&mut self, mode: OverflowMode) {
        tracing::debug!(%mode, "overflow mode changed");
        self.config.compute.overflow = mode;
    }

    pub fn compute(&mut self, n: i32) -> Result<Evaluation> {
        let evaluation = math::evaluate(n, self.mode())?;
        writeln!(self.out, "{}", evaluation)?;
        Ok(evaluation)
    }

    /// Computes each value in order, stopping at the first failure.
    pub fn compute_all(&mut self, values: &[i32]) -> Result<Vec<Evaluation>> {
        values.iter().map(|&n| self.compute(n)).collect()
    }

    pub fn show_mode(&mut self) -> Result<()> {
        let note = match self.mode() {
            OverflowMode::Wrapping => {
                format!("results above {}! wrap modulo 2^64", MAX_EXACT_INPUT)
            }
            OverflowMode::Checked => format!("inputs above {} are rejected", MAX_EXACT_INPUT),
        };
        let mode = self.mode().to_string();
        writeln!(self.out, "Overflow mode: {} ({})", mode.bright_cyan(), note)?;
        Ok(())
    }

    pub fn show_config(&mut self) -> Result<()> {
        let content = self.config().to_toml()?;
        write!(self.out, "{}", content)?;
        Ok(())
    }

    pub fn show_help(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "Available commands:".bold())?;
        writeln!(self.out)?;
        writeln!(self.out, "  {}", "<n>".bright_yellow())?;
        writeln!(self.out, "    Print the factorial of integer n")?;
        writeln!(self.out)?;
        writeln!(self.out, "  {}", "mode [wrapping|checked]".bright_yellow())?;
        writeln!(
            self.out,
            "    Show or change how results above {}! are handled",
            MAX_EXACT_INPUT
        )?;
        writeln!(self.out)?;
        writeln!(self.out, "  {}", "config".bright_yellow())?;
        writeln!(self.out, "    Show the effective configuration")?;
        writeln!(self.out)?;
        writeln!(self.out, "  {}", "help".bright_yellow())?;
        writeln!(self.out, "    Show this help message")?;
        writeln!(self.out)?;
        writeln!(self.out, "  {}", "exit | quit".bright_yellow())?;
        writeln!(self.out, "    Leave the shell")?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &W {
        &self.out
    }
}
