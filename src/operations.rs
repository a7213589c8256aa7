use crate::types::{Number, Operands};
use derive_more::Display;
use std::collections::HashMap;
use std::fmt;
use std::ops::{Add, Mul, Sub};

pub type Result<T = Number> = std::result::Result<T, Error>;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[display(fmt = "Error: Division by zero!")]
    DivisionByZero,
}

pub struct Operation {
    pub name: &'static str,
    pub summary: &'static str,
    pub fn_ptr: fn(Number, Number) -> Result,
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operation #<{}>", self.name)
    }
}

impl Operation {
    pub fn apply(&self, operands: Operands) -> Result {
        let result = (self.fn_ptr)(operands.a, operands.b);
        log::trace!("{} {} produced {:?}", self.name, operands, result);
        result
    }

    /// The line describing this operation in the startup menu.
    pub fn usage(&self) -> String {
        format!("{} [a] [b] - {}", self.name, self.summary)
    }
}

macro_rules! infallible_operation {
    ($name:ident, $summary:expr) => {
        paste::item! {
            pub const [<$name:upper>]: Operation = Operation {
                name: stringify!($name),
                summary: $summary,
                fn_ptr: |a, b| Ok(Number::$name(a, b)),
            };
        }
    };
}

infallible_operation!(add, "Adds two numbers");
infallible_operation!(sub, "Subtracts second number from first");
infallible_operation!(mul, "Multiplies two numbers");

pub const DIV: Operation = Operation {
    name: "div",
    summary: "Divides first number by second",
    fn_ptr: div_,
};

fn div_(a: Number, b: Number) -> Result {
    // -0.0 == 0.0, so both zeroes land here.
    if b == 0.0 {
        return Err(Error::DivisionByZero);
    }
    Ok(a / b)
}

/// Menu order.
pub static OPERATIONS: [Operation; 4] = [ADD, SUB, MUL, DIV];

type Namespace = HashMap<&'static str, &'static Operation>;
lazy_static! {
    pub static ref CORE: Namespace = {
        let mut map = Namespace::new();
        for op in OPERATIONS.iter() {
            map.insert(op.name, op);
        }
        map
    };
}

pub fn resolve(command: &str) -> Option<&'static Operation> {
    CORE.get(command).copied()
}
