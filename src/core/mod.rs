// src/core/mod.rs

pub mod paths;
pub mod selector;
pub mod store;
