use crate::interpreter::{self, Step};
use crate::operations::{Operation, OPERATIONS};
use crate::types::EXIT_KEYWORD;
use itertools::Itertools;
use linefeed::{DefaultTerminal, Interface, ReadResult, Terminal};
use std::io;

pub const FAREWELL: &str = "Exiting calculator. Goodbye!";

pub struct Config {
    pub app_name: &'static str,
    pub prompt: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "calc",
            prompt: "Enter command: ",
        }
    }
}

pub fn setup(config: &Config) -> io::Result<Interface<DefaultTerminal>> {
    let interface = linefeed::Interface::new(config.app_name)?;
    interface.set_prompt(config.prompt)?;
    Ok(interface)
}

/// Where the session reads lines from and writes its output to.
pub trait Console {
    fn read_line(&self) -> io::Result<ReadResult>;
    fn write_line(&self, text: &str) -> io::Result<()>;
}

impl<T: Terminal> Console for Interface<T> {
    fn read_line(&self) -> io::Result<ReadResult> {
        let result = Interface::read_line(self)?;
        if let ReadResult::Input(line) = &result {
            self.add_history_unique(line.clone());
        }
        Ok(result)
    }

    fn write_line(&self, text: &str) -> io::Result<()> {
        writeln!(self, "{}", text)
    }
}

pub fn menu() -> String {
    let header = vec![
        String::new(),
        String::from("Simple Calculator"),
        String::from("Available commands:"),
    ];
    let exit = format!("{} - Exit the calculator", EXIT_KEYWORD);
    header
        .into_iter()
        .chain(OPERATIONS.iter().map(Operation::usage))
        .chain(std::iter::once(exit))
        .join("\n")
}

pub fn repl(console: &impl Console) -> io::Result<()> {
    console.write_line(&menu())?;
    loop {
        console.write_line("")?;
        match console.read_line()? {
            ReadResult::Eof => {
                log::debug!("input closed, leaving without farewell");
                return Ok(());
            }
            ReadResult::Signal(sig) => {
                console.write_line(&format!("Received signal {:?}", sig))?;
            }
            ReadResult::Input(line) => match interpreter::rep(&line) {
                Step::Continue(text) => console.write_line(&text)?,
                Step::Exit => {
                    console.write_line(FAREWELL)?;
                    return Ok(());
                }
            },
        }
    }
}

pub fn run() -> io::Result<()> {
    let interface = setup(&Config::default())?;
    repl(&interface)
}
