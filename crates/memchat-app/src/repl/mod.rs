//! Interactive chat loop over stdin/stdout.

mod command;


use std::io::Write;

use memchat_ai::{ChatSession, TextGenerator};
use memchat_common::MemchatError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub use command::{Command, HELP};

/// Drives one `ChatSession` from line-oriented input.
pub struct Repl<'a> {
    session: ChatSession,
    client: &'a dyn TextGenerator,
    preview_turns: usize,
    preview_chars: usize,
    prompt: bool,
}

impl<'a> Repl<'a> {
    pub fn new(session: ChatSession, client: &'a dyn TextGenerator) -> Self {
        Self {
            session,
            client,
            preview_turns: 3,
            preview_chars: 50,
            prompt: true,
        }
    }

    /// How many turns `/history` shows, and how many characters of each.
    pub fn with_preview(mut self, turns: usize, chars: usize) -> Self {
        self.preview_turns = turns;
        self.preview_chars = chars;
        self
    }

    /// Whether to print `> ` before reading each line.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Read lines until EOF or `/quit`. Remote failures are printed and the
    /// loop continues; only I/O errors end it early. Bytes that are not valid
    /// UTF-8 are replaced, never rejected.
    pub async fn run<R, W>(&mut self, mut input: R, out: &mut W) -> Result<(), MemchatError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut buf = Vec::new();
        loop {
            if self.prompt {
                write!(out, "> ")?;
                out.flush()?;
            }
            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            let line = decode_line(&buf);
            if !self.handle(Command::parse(&line), out).await? {
                break;
            }
        }
        Ok(())
    }

    /// Execute one command. Returns `false` when the loop should stop.
    pub async fn handle<W: Write>(
        &mut self,
        command: Command,
        out: &mut W,
    ) -> Result<bool, MemchatError> {
        match command {
            Command::Message(text) => match self.session.submit(self.client, text).await {
                Ok(reply) => writeln!(out, "AI: {reply}")?,
                Err(e) => writeln!(out, "{e}")?,
            },
            Command::Reset => {
                self.session.reset();
                writeln!(out, "Conversation cleared.")?;
            }
            Command::History => self.write_history(out)?,
            Command::Memory => self.write_memory(out)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn write_history<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let recent = self.session.recent(self.preview_turns);
        if recent.is_empty() {
            return writeln!(out, "No messages in memory.");
        }
        writeln!(out, "Recent conversation:")?;
        for turn in recent {
            writeln!(
                out,
                "  {}: {}",
                turn.role().label(),
                turn.preview(self.preview_chars)
            )?;
        }
        Ok(())
    }

    fn write_memory<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let tracker = self.session.tracker();
        let total = tracker.total();
        writeln!(out, "Messages in memory: {}", self.session.memory_count())?;
        writeln!(
            out,
            "Context window: last {} turns",
            self.session.context_turns()
        )?;
        writeln!(
            out,
            "Tokens used: {} ({} in / {} out) across {} calls",
            tracker.total_tokens(),
            total.input_tokens,
            total.output_tokens,
            tracker.call_count()
        )
    }
}

/// One raw input line as text, without its line ending.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}
