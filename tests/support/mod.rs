//! Shared helpers for the behaviour-driven suites.

pub mod locale;
