//! fertiq-core
//!
//! Pure clinical vocabulary for the fertility decision-support engine:
//! observation records, result records, and the threshold table.
//! The rules themselves live in `fertiq-cdse`.

pub mod error;
pub mod models;
pub mod thresholds;
pub mod value;
