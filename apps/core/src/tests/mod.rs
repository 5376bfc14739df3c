//! Test Module
//!
//! Crate-level test suite for the navigator.
//!
//! ## Test Categories
//! - `engine_tests`: safety precedence, emotional preamble, topic priority, reply assembly
//! - `config_tests`: environment-driven configuration
