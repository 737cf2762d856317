//! Decoding libraries behind cargo features
//!
//! Each format's decoder is an optional dependency. A build without the
//! feature still resolves the parser, but `parse` reports which library is
//! absent and how to turn it on.

use std::fmt;

/// An optional decoding library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    /// Crate name of the decoding library
    pub name: &'static str,
    /// Cargo feature that compiles it in
    pub feature: &'static str,
    /// Whether the feature is enabled in this build
    pub available: bool,
}

/// PDF decoder
pub const LOPDF: Dependency = Dependency {
    name: "lopdf",
    feature: "pdf",
    available: cfg!(feature = "pdf"),
};

/// Word document decoder
pub const DOCX_RS: Dependency = Dependency {
    name: "docx-rs",
    feature: "docx",
    available: cfg!(feature = "docx"),
};

/// Spreadsheet decoder
pub const CALAMINE: Dependency = Dependency {
    name: "calamine",
    feature: "xlsx",
    available: cfg!(feature = "xlsx"),
};

impl Dependency {
    /// Instruction for obtaining the library
    pub fn install_hint(&self) -> String {
        format!(
            "enable the `{}` feature of struct-store (`cargo add struct-store --features {}`)",
            self.feature, self.feature
        )
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (feature `{}`)", self.name, self.feature)
    }
}
