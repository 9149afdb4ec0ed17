//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `parceltrack_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use parceltrack_core::{default_log_level, init_logging};

fn main() {
    let log_dir = std::env::temp_dir().join("parceltrack-logs");
    match log_dir.to_str() {
        Some(dir) => {
            if let Err(err) = init_logging(default_log_level(), dir) {
                eprintln!("logging unavailable: {err}");
            }
        }
        None => eprintln!("logging unavailable: log dir is not valid UTF-8"),
    }

    println!("parceltrack_core ping={}", parceltrack_core::ping());
    println!(
        "parceltrack_core version={}",
        parceltrack_core::core_version()
    );
}
