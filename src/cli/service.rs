use std::sync::Arc;

use crate::config::Config;

use super::{
    CliError, CommandRegistry,
    formatting::{
        format_category, format_command, format_description, format_header, format_subheader,
        format_usage,
    },
};

const BINARY_NAME: &str = "mpremote";

/// High-level service for managing and executing CLI commands.
///
/// Owns the registry with every built-in command and renders help text
/// from command metadata.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    pub fn new(config: Config) -> Self {
        let mut registry = CommandRegistry::new(Arc::new(config));
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// `help` (or nothing) as category lists everything; a known category
    /// with `help` (or nothing) as command describes that category.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist, or
    /// whatever error the command itself reports.
    pub async fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        match (category, command_name) {
            ("" | "help" | "--help" | "-h", _) => Ok(self.help()),
            (category, "" | "help" | "--help" | "-h") => self.category_help(category),
            _ => self.registry.execute(category, command_name, args).await,
        }
    }

    /// Lists all available commands organized by category.
    pub fn list_all(&self) -> Vec<(String, Vec<String>)> {
        self.registry.list_commands()
    }

    fn help(&self) -> String {
        let mut lines = vec![
            format_header("mpremote - remote control for a D-Bus media player"),
            String::new(),
            format_subheader("Usage:"),
            format!("  {BINARY_NAME} gui"),
            format!("  {BINARY_NAME} <category> <command> [args...]"),
            String::new(),
            format_subheader("Categories:"),
        ];

        for (category, commands) in self.list_all() {
            lines.push(format!(
                "  {} {}",
                format_category(&category),
                format_description(&commands.join(", "))
            ));
        }

        lines.push(String::new());
        lines.push(format_usage(&format!(
            "Run '{BINARY_NAME} <category> help' for details."
        )));
        lines.join("\n")
    }

    fn category_help(&self, category: &str) -> Result<String, CliError> {
        let (_, commands) = self
            .list_all()
            .into_iter()
            .find(|(name, _)| name == category)
            .ok_or_else(|| {
                CliError::CommandNotFound(format!("Failed to find category '{category}'"))
            })?;

        let mut lines = vec![format_header(&format!("{category} commands")), String::new()];

        for name in commands {
            let Some(metadata) = self.registry.metadata(category, &name) else {
                continue;
            };

            let args: Vec<String> = metadata
                .args
                .iter()
                .map(|arg| {
                    if arg.required {
                        format!("<{}:{}>", arg.name, arg.value_type.hint())
                    } else {
                        format!("[{}:{}]", arg.name, arg.value_type.hint())
                    }
                })
                .collect();

            lines.push(format!(
                "  {} {}",
                format_command(&metadata.name),
                args.join(" ")
            ));
            lines.push(format!("      {}", format_description(&metadata.description)));
            for example in &metadata.examples {
                lines.push(format!("      {}", format_usage(example)));
            }
        }

        Ok(lines.join("\n"))
    }
}
