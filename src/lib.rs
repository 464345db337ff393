#![forbid(unsafe_code)]
pub mod arithmetic;
pub mod config;
pub mod error;
pub mod network;
pub mod store;

pub use arithmetic::{
    add, divide, divide_with, floor_divide, multiply, subtract, DivisionMode, Operand,
};
pub use config::Config;
pub use store::{connect, database_connect};

pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[cfg(test)]
mod tests;
