use crate::types::{Input, Number, Operands};
use crate::{operations, printer, reader};
use derive_more::{Display, From};

pub type Result = std::result::Result<Number, Error>;

#[derive(Debug, Display, From, Clone, PartialEq, Eq)]
pub enum Error {
    #[display(fmt = "{}", _0)]
    Read(reader::Error),
    #[display(fmt = "Unknown command. Please try again.")]
    #[from(ignore)]
    UnknownCommand(String),
    #[display(fmt = "{}", _0)]
    Arithmetic(operations::Error),
}

/// What the session should do after one line.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Continue(String),
    Exit,
}

pub fn read(line: &str) -> std::result::Result<Input, Error> {
    Ok(reader::read_str(line)?)
}

pub fn eval(command: &str, operands: Operands) -> Result {
    let op =
        operations::resolve(command).ok_or_else(|| Error::UnknownCommand(command.into()))?;
    Ok(op.apply(operands)?)
}

pub fn rep(line: &str) -> Step {
    let result = match read(line) {
        Ok(Input::Exit) => return Step::Exit,
        Ok(Input::Calculate { command, operands }) => eval(command, operands),
        Err(e) => Err(e),
    };
    log::debug!("{:?} produced {:?}", line, result);
    Step::Continue(printer::print(&result))
}
