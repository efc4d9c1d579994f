//! Header branding: optional logo mark with built-in fallback
//!
//! The header shows a small text mark loaded from an asset file. If the
//! file is missing, unreadable, or blank, a built-in mark is substituted
//! transparently; a missing asset is never an error and never aborts a
//! render pass.

use std::path::Path;
use tracing::debug;

const FALLBACK_MARK: &str = "◈ DocChat";

/// Resolved branding for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    mark: String,
    from_asset: bool,
}

impl Branding {
    /// Load the mark from `path`, falling back to the built-in mark on
    /// any failure. Only the first non-blank line of the asset is used.
    pub fn load(path: Option<&Path>) -> Self {
        if let Some(path) = path
            && let Ok(content) = std::fs::read_to_string(path)
            && let Some(line) = content.lines().map(str::trim).find(|l| !l.is_empty())
        {
            return Self {
                mark: line.to_string(),
                from_asset: true,
            };
        }
        if let Some(path) = path {
            debug!(path = %path.display(), "logo asset unavailable, using fallback mark");
        }
        Self::fallback()
    }

    pub fn fallback() -> Self {
        Self {
            mark: FALLBACK_MARK.to_string(),
            from_asset: false,
        }
    }

    pub fn mark(&self) -> &str {
        &self.mark
    }

    pub fn is_fallback(&self) -> bool {
        !self.from_asset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_no_path_uses_fallback() {
        let branding = Branding::load(None);
        assert!(branding.is_fallback());
        assert_eq!(branding.mark(), FALLBACK_MARK);
    }

    #[test]
    fn test_missing_file_uses_fallback() {
        let branding = Branding::load(Some(Path::new("/nonexistent/logo.txt")));
        assert!(branding.is_fallback());
    }

    #[test]
    fn test_blank_file_uses_fallback() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "   \n\t\n").unwrap();
        let branding = Branding::load(Some(file.path()));
        assert!(branding.is_fallback());
    }

    #[test]
    fn test_asset_first_line_is_used() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "\n  ⬢ Aionos Cognition  \nsecond line").unwrap();
        let branding = Branding::load(Some(file.path()));
        assert!(!branding.is_fallback());
        assert_eq!(branding.mark(), "⬢ Aionos Cognition");
    }
}
