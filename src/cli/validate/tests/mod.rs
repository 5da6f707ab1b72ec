//! Tests for the validate command.

mod command_tests;
