//! Commit and build date stamped in by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string for `--version`.
pub fn version_line() -> String {
    format!(
        "flappy {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamped_values_present() {
        assert!(!BUILD_DATE.is_empty());
        // short hash, or "unknown" outside a git checkout
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_version_line_mentions_package() {
        let line = version_line();
        assert!(line.starts_with("flappy "));
        assert!(line.contains(BUILD_COMMIT));
    }
}
