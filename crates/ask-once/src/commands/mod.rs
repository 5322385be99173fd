//! Command implementations for the ask-once CLI.

pub mod ask;
