use colored::Colorize;
use log::warn;
use std::io::{ self, Write };

use super::ChatView;
use super::state::Notice;
use crate::models::chat::{ Message, Role };

/// Line-oriented view. Only messages not yet printed are written, so the
/// newest message is always at the bottom of the terminal.
pub struct TerminalView<W: Write> {
    out: W,
    rendered: usize,
    was_pending: bool,
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out, rendered: 0, was_pending: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn label(role: Role) -> colored::ColoredString {
        match role {
            Role::User => "You".bold().blue(),
            Role::Assistant => "CareerCraft".bold().magenta(),
            Role::System => "System".dimmed(),
        }
    }

    fn write_new(&mut self, messages: &[Message], pending: bool) -> io::Result<()> {
        let start = self.rendered.min(messages.len());
        for message in &messages[start..] {
            writeln!(self.out, "{}: {}\n", Self::label(message.role), message.content)?;
        }
        self.rendered = messages.len();

        if pending && !self.was_pending {
            writeln!(self.out, "{}", "Thinking...".italic().dimmed())?;
        }
        self.was_pending = pending;
        self.out.flush()
    }

    pub fn prompt(&mut self) {
        let result = write!(self.out, "{} ", ">".bold()).and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!("Failed to write prompt: {}", e);
        }
    }
}

impl<W: Write + Send> ChatView for TerminalView<W> {
    fn render(&mut self, messages: &[Message], pending: bool) {
        if let Err(e) = self.write_new(messages, pending) {
            warn!("Failed to render conversation: {}", e);
        }
    }

    fn notify(&mut self, notice: Notice) {
        let result = writeln!(
            self.out,
            "{} {}\n",
            format!("[{}]", notice.title()).red().bold(),
            notice.description()
        );
        if let Err(e) = result {
            warn!("Failed to show notice: {}", e);
        }
    }
}
