//! In-memory word-processing document.
//!
//! Templates populate a [`Document`] through a small set of primitives:
//! styled paragraphs, text runs with independent bold/italic/colour,
//! a per-document named style cache and section page margins. Nothing is
//! laid out here; [`Document::to_bytes`] hands the finished model to the
//! `.docx` packager.

mod docx;
pub mod style;

use std::collections::HashMap;

use thiserror::Error;

pub use style::{Alignment, Length, PageMargins, ParagraphStyle, Rgb};

/// MIME type of the serialized output.
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Style '{0}' is not defined in this document")]
    UnknownStyle(String),

    #[error("Text contains characters that cannot be stored in a document: {0:?}")]
    InvalidText(String),

    #[error("Failed to package document: {0}")]
    Package(String),
}

/// Characters allowed in XML 1.0 character data.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Runs and paragraphs
// ────────────────────────────────────────────────────────────────────────────

/// A contiguous piece of text with its own character formatting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub color: Option<Rgb>,
}

impl Run {
    pub fn bold(&mut self) -> &mut Self {
        self.bold = true;
        self
    }

    pub fn italic(&mut self) -> &mut Self {
        self.italic = true;
        self
    }

    pub fn color(&mut self, color: Rgb) -> &mut Self {
        self.color = Some(color);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    style: Option<String>,
    runs: Vec<Run>,
    left_indent: Option<Length>,
}

impl Paragraph {
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Concatenated text of every run.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Appends a run. A `\n` in the text becomes a line break within the
    /// paragraph; other control characters are rejected.
    pub fn add_run(&mut self, text: impl Into<String>) -> Result<&mut Run, DocumentError> {
        let text = text.into();
        if !text.chars().all(is_xml_char) {
            return Err(DocumentError::InvalidText(text));
        }
        self.runs.push(Run {
            text,
            ..Run::default()
        });
        let last = self.runs.len() - 1;
        Ok(&mut self.runs[last])
    }

    pub fn left_indent(&self) -> Option<Length> {
        self.left_indent
    }

    pub fn indent(&mut self, left: Length) -> &mut Self {
        self.left_indent = Some(left);
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

/// A single-section document. Owned by one generation call and never shared.
#[derive(Debug, Default)]
pub struct Document {
    styles: Vec<ParagraphStyle>,
    style_index: HashMap<String, usize>,
    paragraphs: Vec<Paragraph>,
    margins: Option<PageMargins>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the named style, creating it with default properties on first
    /// request. Later requests for the same name return the same style.
    pub fn style(&mut self, name: &str) -> &mut ParagraphStyle {
        let idx = match self.style_index.get(name) {
            Some(&idx) => idx,
            None => {
                self.styles.push(ParagraphStyle::new(name));
                let idx = self.styles.len() - 1;
                self.style_index.insert(name.to_string(), idx);
                idx
            }
        };
        &mut self.styles[idx]
    }

    pub fn find_style(&self, name: &str) -> Option<&ParagraphStyle> {
        self.style_index.get(name).map(|&idx| &self.styles[idx])
    }

    pub fn styles(&self) -> &[ParagraphStyle] {
        &self.styles
    }

    /// Appends an empty paragraph using a previously registered style.
    pub fn add_paragraph(&mut self, style: &str) -> Result<&mut Paragraph, DocumentError> {
        if !self.style_index.contains_key(style) {
            return Err(DocumentError::UnknownStyle(style.to_string()));
        }
        Ok(self.push(Paragraph {
            style: Some(style.to_string()),
            ..Paragraph::default()
        }))
    }

    /// Appends a paragraph holding a single plain run.
    pub fn add_text(
        &mut self,
        style: &str,
        text: impl Into<String>,
    ) -> Result<&mut Paragraph, DocumentError> {
        let text = text.into();
        if !text.chars().all(is_xml_char) {
            return Err(DocumentError::InvalidText(text));
        }
        let paragraph = self.add_paragraph(style)?;
        paragraph.add_run(text)?;
        Ok(paragraph)
    }

    /// Appends a blank paragraph in the document's default style.
    pub fn add_spacer(&mut self) {
        self.push(Paragraph::default());
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn set_margins(&mut self, margins: PageMargins) {
        self.margins = Some(margins);
    }

    pub fn margins(&self) -> Option<&PageMargins> {
        self.margins.as_ref()
    }

    /// Serializes the document as a `.docx` package.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DocumentError> {
        docx::pack(self)
    }

    fn push(&mut self, paragraph: Paragraph) -> &mut Paragraph {
        self.paragraphs.push(paragraph);
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }
}
