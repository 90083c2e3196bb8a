//! Core types and configuration for quotevault
//!
//! This crate contains domain types shared across all other crates.

mod config;
mod constants;
mod quote;

pub use config::*;
pub use constants::*;
pub use quote::*;
