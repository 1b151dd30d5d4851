//! Exline Core - Line editing for terminal command prompts
//!
//! This crate provides the core functionality for a minimal readline-style
//! command prompt:
//!
//! - **Word**: pure word-boundary anchor functions over a character slice
//! - **Buffer**: cursor-addressed edit buffer with word-aware motions and deletion
//! - **History**: append-only log of accepted lines with browse semantics
//! - **Editor**: the line-editing engine composing buffer and history behind
//!   a closed set of logical operations
//! - **Command**: tokenizer and structured parser for accepted lines
//!
//! # Architecture
//!
//! The editor is single-threaded and total: every operation is a plain method
//! call, every edge case degrades to a defined no-op, and nothing in the
//! engine can fail. A host (for example a TUI event loop) resolves raw key
//! events into [`EditOp`] values, feeds them to [`LineEditor::apply`], and
//! reacts to the returned [`EditorSignal`] when a line is accepted or
//! cancelled. The only fallible boundary is [`CommandRegistry::parse`], which
//! turns an accepted line into a structured command or a typed error.

pub mod buffer;
pub mod command;
pub mod editor;
pub mod history;
pub mod word;

pub use buffer::LineBuffer;
pub use command::{CommandRegistry, CommandSpec, ParseError, ParsedCommand, tokenize};
pub use editor::{EditOp, EditorSignal, LineEditor};
pub use history::History;
