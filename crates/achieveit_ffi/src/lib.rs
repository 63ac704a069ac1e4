//! FFI crate exposing the AchieveIt core to the UI shell.

pub mod api;
