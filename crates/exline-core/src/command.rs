//! Tokenizer and structured parser for accepted command lines.
//!
//! This is the consumer side of the editor's submit signal: the raw accepted
//! line is split into tokens (double quotes toggle a quoting mode and are
//! stripped), then parsed against a registry of command declarations. Parse
//! failures are typed and recoverable - nothing executes partially.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

/// Failure to turn an accepted line into a structured command.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The line held no tokens.
    #[error("empty command line")]
    Empty,

    /// The first token named no registered command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A `--` token was not in the command's allowed-flag set.
    #[error("unknown flag for '{command}': {flag}")]
    UnknownFlag { command: String, flag: String },

    /// A positional token beyond the command's declared parameters.
    #[error("unexpected argument for '{command}': {value}")]
    UnexpectedArgument { command: String, value: String },
}

/// Declaration of a command: its positional parameters in binding order and
/// its allowed flags.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    name: String,
    positional: Vec<String>,
    flags: BTreeSet<String>,
}

impl CommandSpec {
    /// Declare a command with no parameters or flags.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            positional: Vec::new(),
            flags: BTreeSet::new(),
        }
    }

    /// Append a positional parameter. Parameters bind in declaration order.
    pub fn positional(mut self, name: impl Into<String>) -> Self {
        self.positional.push(name.into());
        self
    }

    /// Allow a flag, including its `--` prefix.
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.flags.insert(name.into());
        self
    }

    /// The command name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A successfully parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    /// The command name, as typed.
    pub name: String,
    /// Positional values keyed by their declared parameter names.
    pub args: BTreeMap<String, String>,
    /// The flags present on the line.
    pub flags: BTreeSet<String>,
}

/// Lookup table of command declarations.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    specs: BTreeMap<String, CommandSpec>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command declaration under its name.
    pub fn register(&mut self, spec: CommandSpec) {
        self.specs.insert(spec.name.clone(), spec);
    }

    /// Look up a declaration by name.
    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.specs.get(name)
    }

    /// Tokenize and parse a line against the registered declarations.
    pub fn parse(&self, input: &str) -> Result<ParsedCommand, ParseError> {
        let tokens = tokenize(input);
        let Some((name, rest)) = tokens.split_first() else {
            return Err(ParseError::Empty);
        };
        let spec = self
            .specs
            .get(name)
            .ok_or_else(|| ParseError::UnknownCommand(name.clone()))?;

        let mut command = ParsedCommand {
            name: name.clone(),
            ..Default::default()
        };
        let mut bound = 0;

        for token in rest {
            if token.starts_with("--") {
                if !spec.flags.contains(token) {
                    return Err(ParseError::UnknownFlag {
                        command: name.clone(),
                        flag: token.clone(),
                    });
                }
                command.flags.insert(token.clone());
            } else if let Some(param) = spec.positional.get(bound) {
                command.args.insert(param.clone(), token.clone());
                bound += 1;
            } else {
                return Err(ParseError::UnexpectedArgument {
                    command: name.clone(),
                    value: token.clone(),
                });
            }
        }

        Ok(command)
    }
}

/// Split a line into tokens.
///
/// Unquoted whitespace separates tokens; a double quote toggles quoting and
/// is never emitted. An unterminated quote runs to the end of the input.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in input.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
            continue;
        }
        if c.is_whitespace() && !in_quotes {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry.register(
            CommandSpec::new("open")
                .positional("filename")
                .flag("--readonly"),
        );
        registry.register(CommandSpec::new("q"));
        registry
    }

    #[test]
    fn test_tokenize_splits_on_whitespace() {
        assert_eq!(tokenize("open file.txt"), ["open", "file.txt"]);
        assert_eq!(tokenize("  open   file.txt  "), ["open", "file.txt"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_tokenize_quoted_literals() {
        assert_eq!(
            tokenize(r#"open "my file" --readonly"#),
            ["open", "my file", "--readonly"]
        );
        // Quotes glue onto adjacent characters and are stripped.
        assert_eq!(tokenize(r#"a"b c"d"#), ["ab cd"]);
        // An unterminated quote runs to the end of the input.
        assert_eq!(tokenize(r#"open "my file"#), ["open", "my file"]);
    }

    #[test]
    fn test_parse_binds_positionals_in_order() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandSpec::new("mv").positional("from").positional("to"));

        let command = registry.parse("mv a b").unwrap();
        assert_eq!(command.args["from"], "a");
        assert_eq!(command.args["to"], "b");
    }

    #[test]
    fn test_parse_open_with_flag() {
        let command = registry().parse(r#"open "my file" --readonly"#).unwrap();
        assert_eq!(command.name, "open");
        assert_eq!(command.args["filename"], "my file");
        assert!(command.flags.contains("--readonly"));
    }

    #[test]
    fn test_parse_empty_line() {
        assert_eq!(registry().parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            registry().parse("close x"),
            Err(ParseError::UnknownCommand("close".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            registry().parse("open f --writable"),
            Err(ParseError::UnknownFlag {
                command: "open".to_string(),
                flag: "--writable".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_excess_positional() {
        assert_eq!(
            registry().parse("open a b"),
            Err(ParseError::UnexpectedArgument {
                command: "open".to_string(),
                value: "b".to_string(),
            })
        );
    }

    #[test]
    fn test_flags_may_precede_positionals() {
        let command = registry().parse("open --readonly notes.txt").unwrap();
        assert_eq!(command.args["filename"], "notes.txt");
        assert!(command.flags.contains("--readonly"));
    }
}
