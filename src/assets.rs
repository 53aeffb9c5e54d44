//! Bundled stylesheet and the confirmation text printed after it is written.

use std::io::{self, Write};

/// Default name of the generated stylesheet.
pub const DEFAULT_FILENAME: &str = "modal-fixes.css";

/// Modal overlay, z-index and search bar fixes for the restaurant dashboard.
/// Written out verbatim; never parsed or modified.
pub const MODAL_FIXES_CSS: &str = include_str!("../assets/modal-fixes.css");

const STATUS_LINES: &[&str] = &[
    "✅ Created modal-fixes.css with comprehensive styling solutions",
    "",
    "CSS file contains:",
    "- Modal container and positioning fixes",
    "- Z-index hierarchy system",
    "- Backdrop click handling",
    "- Responsive design fixes",
    "- Animation improvements",
    "- Accessibility enhancements",
    "- Search bar protection from modal interference",
];

pub fn modal_fixes_css() -> &'static str {
    MODAL_FIXES_CSS
}

pub fn status_lines() -> &'static [&'static str] {
    STATUS_LINES
}

pub fn write_status<W: Write>(out: &mut W) -> io::Result<()> {
    for line in STATUS_LINES {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_boundaries() {
        let css = modal_fixes_css();
        assert_eq!(css.len(), 6099);
        assert!(css.starts_with("\n/* ========================================\n   MODAL CSS FIXES"));
        assert!(css.ends_with("background-color: rgba(255, 0, 0, 0.3) !important;\n}\n"));
    }

    #[test]
    fn test_payload_keeps_whitespace_only_lines() {
        assert!(MODAL_FIXES_CSS.contains("   ========================================\n   \n   These fixes"));
        assert!(MODAL_FIXES_CSS.contains("display: none;\n    \n    /* Fixed positioning"));
    }

    #[test]
    fn test_write_status_exact_output() {
        let mut out = Vec::new();
        write_status(&mut out).unwrap();

        let expected = "✅ Created modal-fixes.css with comprehensive styling solutions\n\
                        \n\
                        CSS file contains:\n\
                        - Modal container and positioning fixes\n\
                        - Z-index hierarchy system\n\
                        - Backdrop click handling\n\
                        - Responsive design fixes\n\
                        - Animation improvements\n\
                        - Accessibility enhancements\n\
                        - Search bar protection from modal interference\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_status_lines_count() {
        assert_eq!(status_lines().len(), 10);
        assert!(status_lines()[0].contains(DEFAULT_FILENAME));
    }
}
