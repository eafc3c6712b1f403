// src/cli/handlers/mod.rs

pub mod add;
pub mod browse;
pub mod commons;
pub mod delete;
pub mod edit;
pub mod list;
pub mod run;
pub mod show;
