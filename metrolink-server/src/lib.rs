//! Metrolink departure board server.
//!
//! Turns the TfGM Metrolink OData feed, which reports one redundant row per
//! platform/line with four fixed departure slots, into a deduplicated stop
//! list and per-stop departure boards.

pub mod board;
pub mod config;
pub mod domain;
pub mod tfgm;
pub mod web;
