//! AAC Board Library
//!
//! This library provides the core of a two-level picture symbol board for
//! augmentative and alternative communication: an insertion-ordered map,
//! symbol categories, the navigating board built from them, and the line
//! format boards are stored in.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod parser;
pub mod services;

pub use error::{BoardError, BoardResult};
