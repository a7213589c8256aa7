use crate::types::{Input, Number, Operands, EXIT_KEYWORD};
use derive_more::Display;
use std::borrow::Cow;

pub type Result<'a> = std::result::Result<Input<'a>, Error>;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[display(fmt = "Invalid input. Please enter a valid command.")]
    TooFewTokens,
    #[display(fmt = "Invalid numbers. Please enter numeric values.")]
    NonNumericOperand,
}

/// Reads `<command> <a> <b>` or `exit`. An empty or blank line counts as too
/// few tokens. Anything after the second operand (or after `exit`) is ignored.
pub fn read_str(line: &str) -> Result {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let result = match tokens.as_slice() {
        [EXIT_KEYWORD, ..] => Ok(Input::Exit),
        [command, a, b, ..] => read_operands(a, b).map(|operands| Input::Calculate {
            command: *command,
            operands,
        }),
        _ => Err(Error::TooFewTokens),
    };
    if let Err(e) = &result {
        log::debug!("rejected {:?}: {:?}", line, e);
    }
    result
}

fn read_operands(a: &str, b: &str) -> std::result::Result<Operands, Error> {
    Ok(Operands::new(read_number(a)?, read_number(b)?))
}

fn read_number(token: &str) -> std::result::Result<Number, Error> {
    strip_digit_separators(token)
        .parse()
        .or(Err(Error::NonNumericOperand))
}

/// Drops underscores sitting between two ASCII digits (`1_000`, `1e1_0`). Any
/// other underscore is left in place so the number fails to parse.
fn strip_digit_separators(token: &str) -> Cow<str> {
    if !token.contains('_') {
        return Cow::Borrowed(token);
    }
    let chars: Vec<char> = token.chars().collect();
    let is_separator = |index: usize| {
        chars[index] == '_'
            && index > 0
            && chars[index - 1].is_ascii_digit()
            && chars.get(index + 1).map_or(false, char::is_ascii_digit)
    };
    let kept: String = (0..chars.len())
        .filter(|&index| !is_separator(index))
        .map(|index| chars[index])
        .collect();
    Cow::Owned(kept)
}
