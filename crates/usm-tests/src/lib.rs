//! Integration tests for USM-RS crates.
//!
//! End-to-end scenarios that exercise the interaction between the core
//! buffer types, the processing stages, and file I/O.
