//! Integration tests for termweave.

mod helpers;

mod cli_test;
mod wrap_test;
