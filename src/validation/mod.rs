//! URL validation and status checking
//!
//! This module turns raw input into normalized URLs and checks
//! their HTTP status with async requests.

pub mod checker;
pub mod normalizer;

// Re-export commonly used items
pub use checker::{CheckUrl, HttpChecker};
pub use normalizer::{parse_url_parts, validate_and_normalize, validate_batch};
