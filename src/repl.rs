use std::{
    error::Error,
    fmt::Display,
    fs,
    io::{self, Write},
    ops::ControlFlow,
    path::Path,
};

use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{
    CalcError,
    ast::Action,
    parser::parse,
    runtime::interpreter::evaluate,
    utils::format_number,
};

pub const BANNER: [&str; 2] = [
    "Simple Calculator — enter expressions like: 3 + 4",
    "Commands: clear, exit, quit",
];
pub const GOODBYE: &str = "Goodbye";
pub const EXITING: &str = "Exiting — goodbye";
pub const CLEARED: &str = "Cleared";

/// State carried from one line to the next.
///
/// `last_result` is recorded after each successful calculation but never fed
/// back into one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Session {
    pub last_result: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Silent,
    Value(f64),
    Cleared,
    Exiting,
    Error(CalcError),
}

impl Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Silent => Ok(()),
            Self::Value(x) => f.write_str(&format_number(*x)),
            Self::Cleared => f.write_str(CLEARED),
            Self::Exiting => f.write_str(EXITING),
            Self::Error(e) => write!(f, "Error: {e}"),
        }
    }
}

/// Handles one line of input. `Break` ends the session and carries its final
/// state.
pub fn step(session: Session, line: &str) -> (Response, ControlFlow<Session, Session>) {
    if line.trim().is_empty() {
        return (Response::Silent, ControlFlow::Continue(session));
    }

    let action = match parse(line) {
        Ok(action) => action,
        Err(e) => return (Response::Error(e.into()), ControlFlow::Continue(session)),
    };
    log::debug!("parsed {action:?}");

    match action {
        Action::Exit => (Response::Exiting, ControlFlow::Break(session)),
        Action::Clear => (
            Response::Cleared,
            ControlFlow::Continue(Session { last_result: None }),
        ),
        Action::Arithmetic {
            left,
            operator,
            right,
        } => match evaluate(left, operator.to_symbol(), right) {
            Ok(value) => {
                log::debug!("last result {:?} -> {value}", session.last_result);
                (
                    Response::Value(value),
                    ControlFlow::Continue(Session {
                        last_result: Some(value),
                    }),
                )
            }
            Err(e) => (Response::Error(e.into()), ControlFlow::Continue(session)),
        },
    }
}

/// A source of input lines. `ReadlineError::Eof` and
/// `ReadlineError::Interrupted` end the session gracefully.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadlineError>;
}

impl LineReader for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        let line = self.readline(prompt)?;
        if !line.trim().is_empty() {
            self.add_history_entry(line.as_str())?;
        }
        Ok(line)
    }
}

/// Pre-recorded input, read from a file or built in memory.
#[derive(Debug)]
pub struct ScriptInput {
    lines: std::vec::IntoIter<String>,
}

impl ScriptInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }

    pub fn from_path(path: &Path) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::new(contents.lines()))
    }
}

impl LineReader for ScriptInput {
    fn read_line(&mut self, _prompt: &str) -> Result<String, ReadlineError> {
        self.lines.next().ok_or(ReadlineError::Eof)
    }
}

#[derive(Debug, Clone)]
pub struct ReplOptions {
    pub prompt: String,
    pub banner: bool,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            prompt: String::from("> "),
            banner: true,
        }
    }
}

/// Runs a session until the user exits or the input ends, returning the
/// final session state. Only a failing reader or writer is an error.
pub fn run<R, W>(
    reader: &mut R,
    out: &mut W,
    options: &ReplOptions,
) -> Result<Session, Box<dyn Error>>
where
    R: LineReader,
    W: Write,
{
    if options.banner {
        for line in BANNER {
            writeln!(out, "{line}")?;
        }
    }

    let mut session = Session::default();
    loop {
        let line = match reader.read_line(&options.prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                writeln!(out)?;
                writeln!(out, "{GOODBYE}")?;
                return Ok(session);
            }
            Err(err) => {
                log::error!("failed to read input: {err}");
                return Err(err.into());
            }
        };

        let (response, flow) = step(session, &line);
        if response != Response::Silent {
            writeln!(out, "{response}")?;
        }
        out.flush()?;

        match flow {
            ControlFlow::Continue(next) => session = next,
            ControlFlow::Break(last) => return Ok(last),
        }
    }
}
