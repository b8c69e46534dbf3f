//! Info command implementation
//!
//! Displays the shaping tables and stages this build carries.

use harf::config;
use harf::error::Result;
use harf::unicode::tables;

pub fn run() -> Result<()> {
    println!("harf v{}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("Tables:");
    println!("  form table        - {} letters", tables::FORM_TABLE_LEN);
    println!("  non-joining-left  - {} letters", tables::NON_JOINING_LEFT_LEN);
    println!("  lam-alef          - 4 ligatures (isolated and final)");
    println!();

    println!("Stages (in pipeline order):");
    println!("  normalize         - NFC composition (off by default)");
    println!("  shape             - contextual forms and Lam-Alef ligatures");
    println!("  reorder           - word reversal for predominantly Arabic lines");
    println!();

    println!(
        "Label cache: {} (set {} to change)",
        if config::is_caching_enabled() { "enabled" } else { "disabled" },
        config::CACHE_ENV_VAR
    );

    Ok(())
}
