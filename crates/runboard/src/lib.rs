#![doc = include_str!("../../../README.md")]

pub use runboard_core::*;
