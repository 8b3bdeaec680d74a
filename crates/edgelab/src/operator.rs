use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Line based conversation with the operator.
pub trait OperatorConsole {
    /// Show `prompt` and read one line, without its line terminator.
    ///
    /// Returns `None` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>>;

    /// Print a message on its own line.
    fn say(&mut self, message: &str) -> std::io::Result<()>;
}

impl<C: OperatorConsole + ?Sized> OperatorConsole for &mut C {
    fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        (**self).read_line(prompt)
    }

    fn say(&mut self, message: &str) -> std::io::Result<()> {
        (**self).say(message)
    }
}

/// Console over any buffered reader and writer.
///
/// Serves the terminal through [`LineConsole::stdio`] and script files or in-memory buffers
/// through [`LineConsole::new`].
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
    echo: bool,
}

impl LineConsole<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Console reading from stdin and writing to stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    /// Create a console over `reader` and `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            echo: false,
        }
    }

    /// Write every line read back to the writer, so non-interactive runs keep a readable log.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Consume the console and return its writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> OperatorConsole for LineConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            // keep the terminal tidy when the input ends mid prompt
            writeln!(self.writer)?;
            return Ok(None);
        }

        let line = line.trim_end_matches(['\n', '\r']).to_string();
        if self.echo {
            writeln!(self.writer, "{}", line)?;
        }

        Ok(Some(line))
    }

    fn say(&mut self, message: &str) -> std::io::Result<()> {
        writeln!(self.writer, "{}", message)
    }
}

/// One exchange recorded by [`ScriptedConsole`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsoleEvent {
    /// a prompt was shown.
    Prompt(String),
    /// a scripted line was handed out.
    Input(String),
    /// a message was printed.
    Output(String),
}

/// Console replaying a fixed list of operator lines.
///
/// Everything shown or handed out is kept in a transcript, and [`ScriptedConsole::rewind`]
/// replays the script from the start.
///
/// # Example
///
/// ```
/// use edgelab::operator::{OperatorConsole, ScriptedConsole};
///
/// let mut console = ScriptedConsole::new(["1", "6"]);
/// assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("1"));
/// assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("6"));
/// assert_eq!(console.read_line("> ").unwrap(), None);
///
/// console.rewind();
/// assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("1"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedConsole {
    script: Vec<String>,
    pending: VecDeque<String>,
    transcript: Vec<ConsoleEvent>,
}

impl ScriptedConsole {
    /// Create a console that hands out `lines` in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let script: Vec<String> = lines.into_iter().map(Into::into).collect();
        Self {
            pending: script.iter().cloned().collect(),
            script,
            transcript: Vec::new(),
        }
    }

    /// Start the script over and clear the transcript.
    pub fn rewind(&mut self) {
        self.pending = self.script.iter().cloned().collect();
        self.transcript.clear();
    }

    /// Everything that happened so far, in order.
    pub fn transcript(&self) -> &[ConsoleEvent] {
        &self.transcript
    }

    /// Printed messages, in order.
    pub fn outputs(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|event| match event {
                ConsoleEvent::Output(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Shown prompts, in order.
    pub fn prompts(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|event| match event {
                ConsoleEvent::Prompt(prompt) => Some(prompt.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of lines not handed out yet.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl OperatorConsole for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        self.transcript.push(ConsoleEvent::Prompt(prompt.to_string()));
        let line = self.pending.pop_front();
        if let Some(line) = &line {
            self.transcript.push(ConsoleEvent::Input(line.clone()));
        }
        Ok(line)
    }

    fn say(&mut self, message: &str) -> std::io::Result<()> {
        self.transcript.push(ConsoleEvent::Output(message.to_string()));
        Ok(())
    }
}
