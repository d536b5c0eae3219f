use crate::app::colors::{ConsoleColor, RESET};
use std::io::{self, Write};

/// Sink for tree lines. A colored line is reset right after its newline.
pub trait ColorWriter {
    fn write_line(&mut self, text: &str, color: Option<ConsoleColor>) -> io::Result<()>;
}

/// Writes lines to any byte stream using ANSI escapes.
pub struct AnsiWriter<W: Write> {
    out: W,
}

impl<W: Write> AnsiWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ColorWriter for AnsiWriter<W> {
    fn write_line(&mut self, text: &str, color: Option<ConsoleColor>) -> io::Result<()> {
        match color {
            Some(color) => write!(self.out, "{}{}\n{}", color.code(), text, RESET),
            None => writeln!(self.out, "{}", text),
        }
    }
}
