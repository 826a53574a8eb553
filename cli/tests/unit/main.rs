//! Unit tests for elba CLI
//!
//! These tests use mocked dependencies and run fast without external I/O.

mod detach_command;
mod helpers;
mod list_command;
mod mocks;
