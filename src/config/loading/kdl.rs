use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)]
static SECTIONS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("Output configuration", r"\boutput\b[^{\n]*\{"),
        ("Layout configuration", r"\blayout\s*\{"),
        ("Input configuration", r"\binput\s*\{"),
        ("Keybindings", r"\bbinds?\s*\{"),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(pattern).expect("section pattern is valid")))
    .collect()
});

/// Presence of one expected top-level section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KdlSection {
    /// Human-readable section name.
    pub name: &'static str,
    /// Whether the section appears in the file.
    pub found: bool,
}

/// Result of scanning a KDL file for the sections a compositor config needs.
///
/// This is a surface check, not a parse: the file is never rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KdlSummary {
    /// Every expected section, in report order.
    pub sections: Vec<KdlSection>,
}

impl KdlSummary {
    /// Scans `content` for the expected sections.
    pub fn scan(content: &str) -> Self {
        let sections = SECTIONS
            .iter()
            .map(|(name, pattern)| KdlSection {
                name: *name,
                found: pattern.is_match(content),
            })
            .collect();

        Self { sections }
    }

    /// Number of sections that were found.
    pub fn found(&self) -> usize {
        self.sections.iter().filter(|section| section.found).count()
    }

    /// Number of sections looked for.
    pub fn expected(&self) -> usize {
        self.sections.len()
    }
}
