//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `innkeeper_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("innkeeper_core version={}", innkeeper_core::core_version());

    match innkeeper_core::db::open_db_in_memory() {
        Ok(_conn) => println!("innkeeper_core db=ready"),
        Err(err) => println!("innkeeper_core db=error {err}"),
    }
}
