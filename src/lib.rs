// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod enrich;
pub mod error;
pub mod log;
pub mod report;
pub mod runner;
pub mod specs;

pub mod file;
pub mod progress;
pub mod store;
