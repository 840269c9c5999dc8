//! `.docx` packaging for [`Document`] via `docx-rs`.

use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, LineSpacing, PageMargin, Paragraph as DocxParagraph, Run as DocxRun,
    RunFonts, Style, StyleType,
};

use super::style::{Alignment, ParagraphStyle};
use super::{Document, DocumentError, Paragraph, Run};

pub(super) fn pack(doc: &Document) -> Result<Vec<u8>, DocumentError> {
    let mut docx = Docx::new();

    for style in doc.styles() {
        docx = docx.add_style(convert_style(style));
    }

    for paragraph in doc.paragraphs() {
        docx = docx.add_paragraph(convert_paragraph(doc, paragraph));
    }

    if let Some(margins) = doc.margins() {
        docx = docx.page_margin(
            PageMargin::new()
                .top(margins.top.twips())
                .bottom(margins.bottom.twips())
                .left(margins.left.twips())
                .right(margins.right.twips()),
        );
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| DocumentError::Package(e.to_string()))?;
    Ok(buffer.into_inner())
}

fn convert_style(style: &ParagraphStyle) -> Style {
    let mut out = Style::new(style.id(), StyleType::Paragraph).name(style.name());

    if let Some(name) = &style.font.name {
        out = out.fonts(
            RunFonts::new()
                .ascii(name.as_str())
                .hi_ansi(name.as_str())
                .cs(name.as_str()),
        );
    }
    if let Some(size) = style.font.size {
        out = out.size(size.half_points());
    }
    if style.font.bold == Some(true) {
        out = out.bold();
    }
    if let Some(color) = style.font.color {
        out = out.color(color.hex());
    }
    if let Some(alignment) = style.alignment {
        out = out.align(alignment_type(alignment));
    }

    if style.space_before.is_some() || style.space_after.is_some() {
        let mut spacing = LineSpacing::new();
        if let Some(before) = style.space_before {
            spacing = spacing.before(before.twips().max(0) as u32);
        }
        if let Some(after) = style.space_after {
            spacing = spacing.after(after.twips().max(0) as u32);
        }
        out = out.line_spacing(spacing);
    }

    out
}

fn convert_paragraph(doc: &Document, paragraph: &Paragraph) -> DocxParagraph {
    let mut out = DocxParagraph::new();

    if let Some(id) = paragraph
        .style()
        .and_then(|name| doc.find_style(name))
        .map(|style| style.id())
    {
        out = out.style(&id);
    }
    if let Some(indent) = paragraph.left_indent() {
        out = out.indent(Some(indent.twips()), None, None, None);
    }

    for run in paragraph.runs() {
        out = out.add_run(convert_run(run));
    }

    out
}

// Each `\n` becomes a text-wrapping break.
fn convert_run(run: &Run) -> DocxRun {
    let mut out = DocxRun::new();
    for (i, line) in run.text.split('\n').enumerate() {
        if i > 0 {
            out = out.add_break(BreakType::TextWrapping);
        }
        if !line.is_empty() {
            out = out.add_text(line);
        }
    }
    if run.bold {
        out = out.bold();
    }
    if run.italic {
        out = out.italic();
    }
    if let Some(color) = run.color {
        out = out.color(color.hex());
    }
    out
}

fn alignment_type(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
        Alignment::Right => AlignmentType::Right,
        Alignment::Justify => AlignmentType::Both,
    }
}
