//! Optional cleanup of extracted PDF text

use std::collections::HashMap;

/// Glyph-name to character table for fonts that leak glyph names into text
pub struct GlyphTable {
    glyphs: HashMap<&'static str, char>,
}

impl GlyphTable {
    /// Build the table of common glyph names
    pub fn new() -> Self {
        let glyphs = [
            // Hyphens and dashes
            ("uni2010", '\u{2010}'),
            ("uni2011", '\u{2011}'),
            ("uni2012", '\u{2012}'),
            ("uni2013", '\u{2013}'),
            ("uni2014", '\u{2014}'),
            // Quotation marks
            ("uni2018", '\u{2018}'),
            ("uni2019", '\u{2019}'),
            ("uni201C", '\u{201C}'),
            ("uni201D", '\u{201D}'),
            // Bullets and symbols
            ("uni2022", '\u{2022}'),
            ("uni2026", '\u{2026}'),
            ("uni00A0", '\u{00A0}'),
            ("uni2212", '\u{2212}'),
            ("uni00D7", '\u{00D7}'),
            ("uni20AC", '\u{20AC}'),
            ("uni00A9", '\u{00A9}'),
            ("uni2122", '\u{2122}'),
            // Ligatures
            ("fi", '\u{FB01}'),
            ("fl", '\u{FB02}'),
            ("ff", '\u{FB00}'),
            ("ffi", '\u{FB03}'),
            ("ffl", '\u{FB04}'),
            ("f_i", '\u{FB01}'),
            ("f_l", '\u{FB02}'),
        ]
        .into_iter()
        .collect();

        Self { glyphs }
    }

    /// Replace glyph references and fold typographic characters to ASCII
    pub fn normalize(&self, text: &str) -> String {
        let mut result = text.to_string();

        for (name, ch) in &self.glyphs {
            let replacement = ch.to_string();
            // Bare short names like "fi" occur inside ordinary words
            let mut patterns = vec![format!("({})", name), format!("<{}>", name)];
            if name.starts_with("uni") {
                patterns.push(name.to_string());
            }
            for pattern in &patterns {
                if result.contains(pattern.as_str()) {
                    result = result.replace(pattern.as_str(), &replacement);
                }
            }
        }

        fold_typography(&result)
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::new()
    }
}

fn fold_typography(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2212}' => out.push('-'),
            '\u{2014}' => out.push_str("--"),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2022}' => out.push_str("* "),
            '\u{2026}' => out.push_str("..."),
            '\u{00A0}' => out.push(' '),
            '\u{FB00}' => out.push_str("ff"),
            '\u{FB01}' => out.push_str("fi"),
            '\u{FB02}' => out.push_str("fl"),
            '\u{FB03}' => out.push_str("ffi"),
            '\u{FB04}' => out.push_str("ffl"),
            other => out.push(other),
        }
    }
    out
}

/// Trim every line, dropping blank lines and NUL characters
pub fn trim_lines(text: &str) -> String {
    text.replace('\0', "")
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_glyph_names() {
        let table = GlyphTable::new();
        assert_eq!(table.normalize("pre(uni2013)post"), "pre-post");
        assert_eq!(table.normalize("uni201Cquoteduni201D"), "\"quoted\"");
        assert_eq!(table.normalize("e\u{FB03}cient"), "efficient");
    }

    #[test]
    fn test_normalize_keeps_plain_words() {
        let table = GlyphTable::new();
        assert_eq!(table.normalize("fifty official files"), "fifty official files");
    }

    #[test]
    fn test_trim_lines() {
        assert_eq!(trim_lines("  a \n\n\0 b\n   \n"), "a\nb");
        assert_eq!(trim_lines(""), "");
    }
}
