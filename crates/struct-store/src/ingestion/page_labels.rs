//! PDF page labels
//!
//! A page label is the human-facing name of a page ("iv", "A-3", "12"),
//! which differs from its zero-based index whenever a document uses a
//! `/PageLabels` number tree in its catalog.

/// Numbering style of a label range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    /// 1, 2, 3
    Decimal,
    /// I, II, III
    UpperRoman,
    /// i, ii, iii
    LowerRoman,
    /// A, B, ..., Z, AA, BB
    UpperLetters,
    /// a, b, ..., z, aa, bb
    LowerLetters,
}

impl LabelStyle {
    /// Map a `/S` name to a style
    pub fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"D" => Some(Self::Decimal),
            b"R" => Some(Self::UpperRoman),
            b"r" => Some(Self::LowerRoman),
            b"A" => Some(Self::UpperLetters),
            b"a" => Some(Self::LowerLetters),
            _ => None,
        }
    }

    /// Render a page number in this style
    ///
    /// Numbers below 1, or above the range a style can render compactly,
    /// are written in decimal.
    pub fn format(&self, number: i64) -> String {
        match self {
            Self::UpperRoman if (1..=MAX_ROMAN).contains(&number) => to_roman(number),
            Self::LowerRoman if (1..=MAX_ROMAN).contains(&number) => to_roman(number).to_lowercase(),
            Self::UpperLetters if (1..=MAX_LETTERS).contains(&number) => to_letters(number),
            Self::LowerLetters if (1..=MAX_LETTERS).contains(&number) => to_letters(number).to_lowercase(),
            _ => number.to_string(),
        }
    }
}

const MAX_ROMAN: i64 = 3999;

// 26 letters repeated at most 64 times
const MAX_LETTERS: i64 = 26 * 64;

fn to_roman(mut number: i64) -> String {
    const NUMERALS: [(i64, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut out = String::new();
    for (value, numeral) in NUMERALS {
        while number >= value {
            out.push_str(numeral);
            number -= value;
        }
    }
    out
}

fn to_letters(number: i64) -> String {
    let offset = (number - 1) % 26;
    let repeat = ((number - 1) / 26 + 1) as usize;
    let letter = char::from(b'A' + offset as u8);
    std::iter::repeat(letter).take(repeat).collect()
}

/// One entry of the page label number tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRange {
    /// Zero-based index of the first page in the range
    pub first_page: u32,
    /// Numbering style; `None` means prefix only
    pub style: Option<LabelStyle>,
    /// Label prefix
    pub prefix: String,
    /// Number of the first page in the range
    pub start: i64,
}

impl LabelRange {
    /// Plain decimal numbering from `first_page`
    pub fn decimal(first_page: u32) -> Self {
        Self {
            first_page,
            style: Some(LabelStyle::Decimal),
            prefix: String::new(),
            start: 1,
        }
    }

    fn label(&self, index: u32) -> String {
        let mut label = self.prefix.clone();
        if let Some(style) = self.style {
            match self.start.checked_add(i64::from(index - self.first_page)) {
                Some(number) => label.push_str(&style.format(number)),
                None => label.push_str(&(u64::from(index) + 1).to_string()),
            }
        }
        label
    }
}

/// Resolves page indices to labels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLabels {
    ranges: Vec<LabelRange>,
}

impl PageLabels {
    /// Build from ranges in any order
    pub fn new(mut ranges: Vec<LabelRange>) -> Self {
        ranges.sort_by_key(|r| r.first_page);
        Self { ranges }
    }

    /// Label of the page at a zero-based index
    ///
    /// Pages not covered by any range get their 1-based number.
    pub fn label(&self, index: u32) -> String {
        self.ranges
            .iter()
            .rev()
            .find(|r| r.first_page <= index)
            .map(|r| r.label(index))
            .unwrap_or_else(|| (u64::from(index) + 1).to_string())
    }

    /// Labels for the first `count` pages
    pub fn labels(&self, count: u32) -> Vec<String> {
        (0..count).map(|i| self.label(i)).collect()
    }
}

#[cfg(feature = "pdf")]
pub(crate) use reader::read_page_labels;

#[cfg(feature = "pdf")]
mod reader {
    use lopdf::{Dictionary, Document, Object, ObjectId};
    use std::collections::HashSet;

    use super::{LabelRange, LabelStyle, PageLabels};

    // Guards against reference cycles in malformed number trees
    const MAX_TREE_DEPTH: usize = 32;

    /// Read the catalog's `/PageLabels` tree, if any
    pub(crate) fn read_page_labels(doc: &Document) -> PageLabels {
        let tree = doc
            .trailer
            .get(b"Root")
            .ok()
            .and_then(|root| resolve_dict(doc, root))
            .and_then(|catalog| catalog.get(b"PageLabels").ok())
            .and_then(|labels| resolve_dict(doc, labels));

        let mut ranges = Vec::new();
        if let Some(tree) = tree {
            collect_ranges(doc, tree, 0, &mut HashSet::new(), &mut ranges);
        }
        if !ranges.is_empty() {
            tracing::debug!("PDF declares {} page label ranges", ranges.len());
        }
        PageLabels::new(ranges)
    }

    fn resolve<'a>(doc: &'a Document, object: &'a Object) -> Option<&'a Object> {
        let mut current = object;
        for _ in 0..MAX_TREE_DEPTH {
            match current {
                Object::Reference(id) => current = doc.get_object(*id).ok()?,
                other => return Some(other),
            }
        }
        None
    }

    fn resolve_dict<'a>(doc: &'a Document, object: &'a Object) -> Option<&'a Dictionary> {
        match resolve(doc, object)? {
            Object::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }

    fn collect_ranges(
        doc: &Document,
        node: &Dictionary,
        depth: usize,
        visited: &mut HashSet<ObjectId>,
        out: &mut Vec<LabelRange>,
    ) {
        if depth > MAX_TREE_DEPTH {
            tracing::warn!("Page label tree deeper than {} levels, ignoring the rest", MAX_TREE_DEPTH);
            return;
        }

        if let Some(Object::Array(nums)) = node.get(b"Nums").ok().and_then(|n| resolve(doc, n)) {
            for pair in nums.chunks(2) {
                let [key, value] = pair else { continue };
                let first_page = match resolve(doc, key) {
                    Some(Object::Integer(i)) => match u32::try_from(*i) {
                        Ok(first_page) => first_page,
                        Err(_) => continue,
                    },
                    _ => continue,
                };
                if let Some(dict) = resolve_dict(doc, value) {
                    out.push(range_from_dict(doc, first_page, dict));
                }
            }
        }

        if let Some(Object::Array(kids)) = node.get(b"Kids").ok().and_then(|k| resolve(doc, k)) {
            for kid in kids {
                // Each referenced node is read once, however often it is listed
                if let Object::Reference(id) = kid {
                    if !visited.insert(*id) {
                        continue;
                    }
                }
                if let Some(child) = resolve_dict(doc, kid) {
                    collect_ranges(doc, child, depth + 1, visited, out);
                }
            }
        }
    }

    fn range_from_dict(doc: &Document, first_page: u32, dict: &Dictionary) -> LabelRange {
        let style = match dict.get(b"S").ok().and_then(|s| resolve(doc, s)) {
            Some(Object::Name(name)) => LabelStyle::from_name(name),
            _ => None,
        };
        let prefix = match dict.get(b"P").ok().and_then(|p| resolve(doc, p)) {
            Some(Object::String(bytes, _)) => decode_text_string(bytes),
            _ => String::new(),
        };
        let start = match dict.get(b"St").ok().and_then(|s| resolve(doc, s)) {
            Some(Object::Integer(i)) if *i >= 1 => *i,
            _ => 1,
        };

        LabelRange {
            first_page,
            style,
            prefix,
            start,
        }
    }

    /// Decode a PDF text string (UTF-16BE with BOM, else single-byte)
    fn decode_text_string(bytes: &[u8]) -> String {
        match bytes {
            [0xFE, 0xFF, rest @ ..] => {
                let units: Vec<u16> = rest
                    .chunks_exact(2)
                    .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16_lossy(&units)
            }
            _ => bytes.iter().map(|&b| char::from(b)).collect(),
        }
    }

}
