//! Demo command set and dispatch.

use exline_core::{CommandRegistry, CommandSpec, ParsedCommand};

/// Effect of a dispatched command on the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEffect {
    /// Exit the application.
    Quit,
    /// Show the lines in the output panel.
    Output(Vec<String>),
    /// Show a status message.
    Status(String),
}

/// Build the registry of commands the console understands.
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(
        CommandSpec::new("open")
            .positional("filename")
            .flag("--readonly"),
    );
    registry.register(CommandSpec::new("q"));
    registry.register(CommandSpec::new("quit"));
    registry
}

/// Dispatch a parsed command into an application effect.
pub fn dispatch(command: &ParsedCommand) -> CommandEffect {
    match command.name.as_str() {
        "q" | "quit" => CommandEffect::Quit,
        "open" => {
            let mut lines = vec![format!("Command: {}", command.name)];
            for (param, value) in &command.args {
                lines.push(format!("Arg: {} = {}", param, value));
            }
            for flag in &command.flags {
                lines.push(format!("Flag: {}", flag));
            }
            CommandEffect::Output(lines)
        }
        other => CommandEffect::Status(format!("Unknown command: {}", other)),
    }
}
