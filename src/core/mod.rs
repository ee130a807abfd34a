// TextFilter - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: platform, app, or open files itself.

pub mod export;
pub mod filter;
pub mod model;
pub mod naming;
