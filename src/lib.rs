//! cluck - a terminal field guide to chickens
//!
//! A reducer-driven state tree (home, gallery, facts, quiz) behind a single
//! [`store::Store`], rendered with ratatui. This library exposes modules for
//! use in integration tests and benchmarks.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod state;
pub mod store;
pub mod terminal;
pub mod ui;
