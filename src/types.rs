use std::fmt;

pub type Number = f64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    pub a: Number,
    pub b: Number,
}

impl Operands {
    pub fn new(a: Number, b: Number) -> Self {
        Self { a, b }
    }
}

impl fmt::Display for Operands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.a, self.b)
    }
}

/// One line of user input after reading. The command keyword is carried as
/// written; whether it names an operation is decided later by `operations::resolve`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input<'a> {
    Exit,
    Calculate {
        command: &'a str,
        operands: Operands,
    },
}

pub const EXIT_KEYWORD: &str = "exit";
