use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::path::PathBuf;
use std::thread::JoinHandle;

use crate::gateway::QuizGateway;
use crate::output::SessionOutput;
use crate::session::dispatch::Dispatcher;
use crate::session::upload::SelectedFile;
use crate::session::SessionHandle;


lazy_static! {
    static ref COMMAND_REGEX: Regex = Regex::new(r"^\s*(\w+)(?:\s+(.*?))?\s*$").unwrap();
    static ref ANSWER_REGEX: Regex = Regex::new(r"^(\d+)\s+(?:([a-zA-Z])|(\d+))$").unwrap();
}

pub const HELP: &'static str = "Commands:
  open <path>          pick a PDF file
  drop <path>          drag and drop a file (non-PDF files are ignored)
  count <n>            number of questions to generate (1-20)
  generate             generate a quiz from the selected file
  cancel               abandon the quiz being generated
  answer <q> <option>  choose an option, e.g. `answer 2 b` or `answer 2 3`
  submit               grade the quiz
  retake               start over with a new file
  show                 print the current screen
  help                 print this message
  quit                 exit";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Open(PathBuf),
    Drop(PathBuf),
    Count(String),
    Generate,
    Cancel,
    Answer { question: usize, option: usize },
    Submit,
    Retake,
    Show,
    Help,
    Quit,
}

fn parse_option_letter(letter: &str) -> Result<usize> {
    match letter.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => Ok((c.to_ascii_lowercase() as u8 - b'a') as usize),
        _ => Err(anyhow!("Options are letters from a to z")),
    }
}

fn parse_option_number(number: &str) -> Result<usize> {
    let number: usize = number.parse().context("Option number is too large")?;
    if number == 0 {
        return Err(anyhow!("Options are numbered from 1"));
    }
    Ok(number - 1)
}

fn parse_answer(argument: &str) -> Result<Command> {
    let captures = ANSWER_REGEX
        .captures(argument)
        .context("Usage: answer <question> <option>")?;
    let question: usize = captures[1]
        .parse()
        .context("Question number is too large")?;
    if question == 0 {
        return Err(anyhow!("Questions are numbered from 1"));
    }
    let option = match (captures.get(2), captures.get(3)) {
        (Some(letter), _) => parse_option_letter(letter.as_str())?,
        (_, Some(number)) => parse_option_number(number.as_str())?,
        _ => return Err(anyhow!("Usage: answer <question> <option>")),
    };
    Ok(Command::Answer {
        question: question - 1,
        option,
    })
}

fn require(argument: Option<&str>, usage: &str) -> Result<String> {
    match argument {
        Some(a) if !a.is_empty() => Ok(a.to_owned()),
        _ => Err(anyhow!("Usage: {}", usage)),
    }
}

/// Question and option indices in the parsed command are 0-based.
pub fn parse(line: &str) -> Result<Command> {
    let captures = COMMAND_REGEX
        .captures(line)
        .context("Type `help` to list commands")?;
    let name = captures[1].to_lowercase();
    let argument = captures.get(2).map(|m| m.as_str());

    let command = match name.as_str() {
        "open" => Command::Open(require(argument, "open <path>")?.into()),
        "drop" => Command::Drop(require(argument, "drop <path>")?.into()),
        "count" => Command::Count(require(argument, "count <n>")?),
        "generate" => Command::Generate,
        "cancel" => Command::Cancel,
        "answer" => parse_answer(&require(argument, "answer <question> <option>")?)?,
        "submit" => Command::Submit,
        "retake" => Command::Retake,
        "show" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(anyhow!("Unknown command `{}`. Type `help` to list commands", other)),
    };
    Ok(command)
}

/// Runs a parsed command against the session. Returns the request thread when
/// the command started one.
pub fn execute<G, O>(
    command: Command,
    session: &SessionHandle<O>,
    dispatcher: &Dispatcher<G, O>,
) -> Result<Option<JoinHandle<()>>>
where
    G: QuizGateway + Send + Sync + 'static,
    O: SessionOutput + Send + 'static,
{
    match command {
        Command::Open(path) => session
            .lock()
            .open_file(&path)
            .with_context(|| format!("Could not open {:?}", path))?,
        Command::Drop(path) => {
            let file = SelectedFile::open(&path)?;
            session.lock().drop_file(file);
        }
        Command::Count(count) => session.lock().set_question_count(&count),
        Command::Generate => match dispatcher.generate() {
            Ok(handle) => return Ok(Some(handle)),
            // Failures are reported through the session output
            Err(e) => debug!("{:#}", e),
        },
        Command::Cancel => session.lock().cancel()?,
        Command::Answer { question, option } => session.lock().select_option(question, option)?,
        Command::Submit => session.lock().submit_quiz()?,
        Command::Retake => session.lock().retake(),
        Command::Show => session.lock().show(),
        Command::Help => println!("{}\n", HELP),
        Command::Quit => (),
    }
    Ok(None)
}
