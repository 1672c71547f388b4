//! Data module for design-preflight
//!
//! Contains the policy thresholds and the platform palette.

pub mod palette;
pub mod policy;
