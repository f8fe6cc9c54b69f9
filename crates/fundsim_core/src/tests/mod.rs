//! Cross-component tests for the fund simulation engine
//!
//! Tests are organized by topic:
//! - `convergence` - Large-sample behaviour against closed-form expectations
//! - `reproducibility` - Seeding, stream independence and degenerate inputs
//! - `volatility` - Higher mean/higher volatility funds versus lower ones

mod reproducibility;
