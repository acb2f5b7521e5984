// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;

pub mod csv;
pub mod data;
pub mod dedup;
pub mod extract;
pub mod fetch;
pub mod notify;
pub mod runner;
pub mod store;
