use std::io::{BufRead, Write};

/// Line-oriented terminal: reads answers from `R`, writes everything to `W`.
/// Once the input reaches end of file it stays closed.
pub struct Terminal<R: BufRead, W: Write> {
    input: R,
    output: W,
    closed: bool,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn print(&mut self, text: &str) -> Result<(), String> {
        write!(self.output, "{}", text)
            .and_then(|_| self.output.flush())
            .map_err(|e| format!("Failed to write to terminal: {}", e))
    }

    pub fn println(&mut self, text: &str) -> Result<(), String> {
        self.print(&format!("{}\n", text))
    }

    /// Shows `prompt` and returns the next trimmed line, or `None` at end of
    /// input.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>, String> {
        if self.closed {
            return Ok(None);
        }

        self.print(prompt)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read from terminal: {}", e))?;

        if read == 0 {
            self.closed = true;
            self.println("")?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }
}
