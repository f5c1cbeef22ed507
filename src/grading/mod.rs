//! Mark conversion, credit-weighted aggregation, and result classification.
//!
//! This module converts percentage marks into grade points under the built-in
//! grading scale, folds them into credit-weighted averages, and attaches the
//! qualitative band used for display.

pub mod aggregate;
pub mod classify;
pub mod scale;
pub mod utility;
