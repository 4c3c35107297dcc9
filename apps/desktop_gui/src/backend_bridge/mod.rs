//! Bounded command queue from the UI thread into the backend worker.

pub mod commands;
pub mod runtime;
