// src/core/mod.rs

pub mod classify;
pub mod net;
pub mod scoring;
