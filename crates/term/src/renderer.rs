//! TerminalRenderer: flushes encoded frames to a writer.
//!
//! Each draw encodes into an internal buffer first and then issues a single
//! `write_all`, so a frame never reaches the terminal half-painted.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{cursor, terminal, QueueableCommand};

use crate::view::{encode_animation_into, encode_status_into};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Print the colored block (status line mode).
    pub fn draw_status<S: AsRef<str>>(&mut self, rows: &[S], filler: char) -> Result<()> {
        self.buf.clear();
        encode_status_into(rows, filler, &mut self.buf)?;
        self.flush_buf()
    }

    /// Repaint the whole animation screen.
    pub fn draw_animation<S: AsRef<str>>(&mut self, rows: &[S], filler: char) -> Result<()> {
        self.buf.clear();
        encode_animation_into(rows, filler, &mut self.buf)?;
        self.flush_buf()
    }

    pub fn clear(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.flush_buf()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Make the console understand the escape sequences we emit.
///
/// Windows consoles need virtual terminal processing switched on; elsewhere
/// this is a no-op. Returns whether ANSI output is expected to work.
pub fn prepare_console() -> bool {
    #[cfg(windows)]
    {
        crossterm::ansi_support::supports_ansi()
    }
    #[cfg(not(windows))]
    {
        true
    }
}
