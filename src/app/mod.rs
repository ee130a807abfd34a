// TextFilter - app/mod.rs
//
// Application layer: runs the filter-export operation and renders its outcome.
// Dependencies: core, platform, util.

pub mod filter_export;
pub mod report;
