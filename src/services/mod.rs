//! Service layer for board file I/O.
//!
//! This module contains services that coordinate between the parser and the
//! rest of the application.

pub mod boards;

// Re-export commonly used types and functions
pub use boards::BoardService;
