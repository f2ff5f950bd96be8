#![deny(rust_2018_idioms)]
#![deny(clippy::correctness)]
#![deny(clippy::perf)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod date;
pub mod error;
pub mod fare;
pub mod generator;
pub mod record;
pub mod route;
pub mod vocabulary;
pub mod writer;
