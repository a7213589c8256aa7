pub mod cmdline;
pub mod interpreter;
pub mod operations;
pub mod printer;
pub mod reader;
pub mod types;

#[macro_use]
extern crate lazy_static;
