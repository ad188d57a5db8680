//! Backend test support utilities
//!
//! Shared by the server's unit and integration tests: logging initialization,
//! unique room/player names, and problem-details assertions.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
