//! Shared helpers for the runnable bundlequote demos.
pub mod common;
