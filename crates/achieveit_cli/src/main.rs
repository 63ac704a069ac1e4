//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `achieveit_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Tiny probe to validate core crate wiring independently from the
    // mobile shell/FFI runtime setup.
    println!("achieveit_core ping={}", achieveit_core::ping());
    println!("achieveit_core version={}", achieveit_core::core_version());
}
