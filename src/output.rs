//! Colored console output for the IMA predeployed generator.
//!
//! Everything goes to stderr: stdout is reserved for the genesis document.
//! Color scheme: blue+bold headers, cyan values, green success,
//! dimmed secondary text.

use alloy_primitives::Address;
use colored::Colorize;
use std::path::Path;

use crate::config::GeneratorConfig;
use crate::genesis::GenesisAlloc;

// ── Helpers ────────────────────────────────────────────────────────

/// Format a byte count as a human-readable size.
///
/// - Below 1 KiB → `"512 B"`
/// - Otherwise → `"1.5 KiB"`
pub fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    }
}

/// One summary line for a generated account.
pub fn format_account(address: &Address, label: &str, code_len: usize, slots: usize) -> String {
    format!("{address}  {label:<22} code {:>9}  {slots:>3} slots", format_size(code_len))
}

// ── Banner ─────────────────────────────────────────────────────────

/// Print the startup banner with the schain identity.
pub fn print_banner(config: &GeneratorConfig) {
    eprintln!();
    eprintln!("{}", "=== IMA Predeployed Generator ===".blue().bold());
    eprintln!("  Schain name:  {}", config.schain_name.cyan());
    eprintln!("  Schain owner: {}", format!("{}", config.schain_owner).cyan());
}

/// Print where artifacts are read from.
pub fn print_artifacts_dir(dir: &Path) {
    eprintln!("  Artifacts:    {}", dir.display().to_string().cyan());
}

// ── Accounts ───────────────────────────────────────────────────────

/// Print every generated account.
pub fn print_accounts(alloc: &GenesisAlloc) {
    eprintln!();
    eprintln!("{} ({}):", "Generated accounts".blue().bold(), alloc.len().to_string().cyan());
    for (address, label, account) in alloc.iter() {
        let code_len = account.code.as_ref().map_or(0, |code| code.len());
        let slots = account.storage.as_ref().map_or(0, |storage| storage.len());
        eprintln!("  {}", format_account(&address, label, code_len, slots).dimmed());
    }
}

// ── Result ─────────────────────────────────────────────────────────

/// Print confirmation that the accounts were merged.
pub fn print_merged(target_key: &str, count: usize) {
    eprintln!();
    eprintln!(
        "  {} Merged {} accounts into {}",
        "OK".green().bold(),
        count.to_string().cyan(),
        format!("\"{target_key}\"").cyan()
    );
}

/// Print where the genesis was written.
pub fn print_written(path: &Path) {
    eprintln!("  {} Genesis written to {}", "OK".green().bold(), path.display().to_string().cyan());
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_kib() {
        assert_eq!(format_size(1024), "1.0 KiB");
        assert_eq!(format_size(1536), "1.5 KiB");
    }

    #[test]
    fn test_format_account() {
        let line = format_account(
            &address!("d2aaa00000000000000000000000000000000000"),
            "ProxyAdmin",
            2048,
            1,
        );
        assert!(line.contains("ProxyAdmin"));
        assert!(line.contains("2.0 KiB"));
        assert!(line.ends_with("1 slots"));
    }
}
