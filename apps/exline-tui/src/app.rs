//! Application state and main render loop

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use exline_core::{CommandRegistry, EditorSignal, LineEditor, ParseError};

use crate::commands::{self, CommandEffect};
use crate::keybindings::{command_mode_op, normal_mode_action, Action};
use crate::mode::Mode;

/// Main application state
pub struct App {
    /// Current mode (NORMAL, COMMAND)
    pub mode: Mode,
    /// The command-line editor
    pub editor: LineEditor,
    /// Registered command declarations
    registry: CommandRegistry,
    /// Status message shown on the bottom line in normal mode
    pub status_message: Option<String>,
    /// The last accepted line
    pub last_command: Option<String>,
    /// Output lines from the last dispatched command
    pub output: Vec<String>,
    /// Whether to show the help overlay
    pub show_help: bool,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Self {
        Self {
            mode: Mode::Normal,
            editor: LineEditor::new(),
            registry: commands::default_registry(),
            status_message: None,
            last_command: None,
            output: Vec::new(),
            show_help: false,
        }
    }

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Main layout: status bar at top, output in the middle, command line
        // at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status bar
                Constraint::Min(0),    // Output panel
                Constraint::Length(1), // Command line
            ])
            .split(size);

        self.render_status_bar(frame, chunks[0]);
        self.render_output(frame, chunks[1]);
        self.render_command_line(frame, chunks[2]);

        if self.show_help {
            self.render_help_overlay(frame, size);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mode_color = match self.mode {
            Mode::Normal => Color::Blue,
            Mode::Command => Color::Magenta,
        };

        let bar = Line::from(vec![
            Span::styled(
                format!(" [{}] ", self.mode.short_code()),
                Style::default().fg(mode_color).add_modifier(Modifier::BOLD),
            ),
            Span::raw("exline console | "),
            Span::raw("Press ? for help "),
        ]);

        let status_bar = Paragraph::new(bar).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(status_bar, area);
    }

    fn render_output(&self, frame: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        if let Some(last) = &self.last_command {
            lines.push(Line::from(vec![
                Span::styled("Last command: ", Style::default().fg(Color::Cyan)),
                Span::raw(last.clone()),
            ]));
        }
        for entry in &self.output {
            lines.push(Line::from(entry.clone()));
        }

        let block = Block::default().title("Output").borders(Borders::ALL);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_command_line(&self, frame: &mut Frame, area: Rect) {
        let line = match self.mode {
            Mode::Command => {
                let chars: Vec<char> = self.editor.text().chars().collect();
                let cursor = self.editor.cursor();
                let before: String = chars[..cursor].iter().collect();
                let (at, after) = if cursor < chars.len() {
                    let after: String = chars[cursor + 1..].iter().collect();
                    (chars[cursor].to_string(), after)
                } else {
                    // Fake cursor cell past the end of the line.
                    (" ".to_string(), String::new())
                };
                Line::from(vec![
                    Span::styled(":", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(before),
                    Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
                    Span::raw(after),
                ])
            }
            Mode::Normal => Line::from(
                self.status_message
                    .clone()
                    .unwrap_or_else(|| "Press : for commands | q to quit".to_string()),
            ),
        };

        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_text = r#"
exline console - Help

Normal mode:
  :       - Enter command mode
  q       - Quit
  ?       - Toggle this help

Command mode:
  Left/Right           - Move by character
  Ctrl-Left/Ctrl-Right - Move by word
  Backspace/Delete     - Delete one character
  Ctrl-b               - Delete word backward
  Ctrl-w / Ctrl-Delete - Delete word forward
  Up/Down              - Browse history
  Enter                - Run the command
  Esc                  - Cancel

Commands:
  open <filename> [--readonly]
  q / quit
"#;

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));

        let help_area = centered_rect(60, 80, area);
        frame.render_widget(ratatui::widgets::Clear, help_area);
        frame.render_widget(Paragraph::new(help_text).block(block), help_area);
    }

    /// Handle a key press, returns true if app should quit
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match self.mode {
            Mode::Normal => self.handle_normal_key(code),
            Mode::Command => self.handle_command_key(code, modifiers),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> bool {
        match normal_mode_action(code) {
            Some(Action::Quit) => return true,
            Some(Action::EnterCommandMode) => {
                self.mode = Mode::Command;
                self.status_message = None;
            }
            Some(Action::ToggleHelp) => {
                self.show_help = !self.show_help;
            }
            None => {}
        }
        false
    }

    fn handle_command_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let Some(op) = command_mode_op(code, modifiers) else {
            return false;
        };
        match self.editor.apply(op) {
            Some(EditorSignal::Submitted(line)) => self.submit(line),
            Some(EditorSignal::Cancelled) => {
                self.mode = Mode::Normal;
                self.status_message = Some("Command cancelled".to_string());
                false
            }
            None => false,
        }
    }

    /// React to an accepted line: parse it and dispatch the command.
    /// Returns true if the app should quit.
    fn submit(&mut self, line: String) -> bool {
        self.mode = Mode::Normal;
        tracing::debug!(line = %line, "command submitted");
        self.status_message = Some(format!("Submitted: {}", line));
        if !line.is_empty() {
            self.last_command = Some(line.clone());
        }
        self.output.clear();

        match self.registry.parse(&line) {
            Ok(command) => match commands::dispatch(&command) {
                CommandEffect::Quit => return true,
                CommandEffect::Output(lines) => self.output = lines,
                CommandEffect::Status(message) => self.status_message = Some(message),
            },
            Err(ParseError::Empty) => {}
            Err(err) => {
                tracing::warn!(%err, "command rejected");
                self.status_message = Some(err.to_string());
            }
        }
        false
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
