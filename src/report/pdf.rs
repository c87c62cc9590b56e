use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use log::debug;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use serde_json::Value;

use crate::models::Snapshot;

const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const MARGIN_MM: f64 = 15.0;
const LINE_HEIGHT_MM: f64 = 5.0;

const TITLE_SIZE: f64 = 14.0;
const HEADER_SIZE: f64 = 12.0;
const BODY_SIZE: f64 = 10.0;

/// Characters that fit one body line between the margins.
const MAX_LINE_CHARS: usize = 96;

/// Sequence-valued sections show at most this many entries; the structured
/// report always carries all of them.
pub const SEQUENCE_PREVIEW_LIMIT: usize = 20;

const DOCUMENT_TITLE: &str = "ForensicX - Digital Forensics Report";

#[derive(Debug, Clone, Copy, PartialEq)]
enum LineKind {
    Title,
    Header,
    Body,
}

#[derive(Debug)]
struct DocLine {
    text: String,
    kind: LineKind,
}

impl DocLine {
    fn blank() -> Self {
        DocLine {
            text: String::new(),
            kind: LineKind::Body,
        }
    }
}

/// Render the snapshot as a paginated PDF document.
pub fn write_pdf_report(snapshot: &Snapshot, path: &Path) -> Result<()> {
    let lines = document_lines(snapshot);

    let (doc, first_page, first_layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm(PAGE_WIDTH_MM as f32),
        Mm(PAGE_HEIGHT_MM as f32),
        "Layer 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| anyhow!("Failed to load document font: {e}"))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| anyhow!("Failed to load document font: {e}"))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut cursor = PAGE_HEIGHT_MM - MARGIN_MM;

    for line in &lines {
        if cursor < MARGIN_MM {
            let (page, layer_index) =
                doc.add_page(Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "Layer 1");
            layer = doc.get_page(page).get_layer(layer_index);
            cursor = PAGE_HEIGHT_MM - MARGIN_MM;
        }

        if !line.text.is_empty() {
            let (font, size, x) = match line.kind {
                LineKind::Title => (&bold, TITLE_SIZE, centered_x(&line.text, TITLE_SIZE)),
                LineKind::Header => (&bold, HEADER_SIZE, MARGIN_MM),
                LineKind::Body => (&regular, BODY_SIZE, MARGIN_MM),
            };
            layer.use_text(line.text.clone(), size as f32, Mm(x as f32), Mm(cursor as f32), font);
        }
        cursor -= LINE_HEIGHT_MM;
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create document at {}", path.display()))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| anyhow!("Failed to write PDF document: {e}"))?;

    debug!("Document report written to {}", path.display());
    Ok(())
}

/// Build the full line sequence: title, then one section per snapshot field.
fn document_lines(snapshot: &Snapshot) -> Vec<DocLine> {
    let mut lines = vec![
        DocLine {
            text: DOCUMENT_TITLE.to_string(),
            kind: LineKind::Title,
        },
        DocLine::blank(),
    ];

    for (name, value) in snapshot.sections() {
        lines.push(DocLine {
            text: name.to_uppercase(),
            kind: LineKind::Header,
        });
        lines.extend(section_body_lines(&value));
        lines.push(DocLine::blank());
    }
    lines
}

/// Body lines for one section value.
///
/// Sequences show their first [`SEQUENCE_PREVIEW_LIMIT`] entries, one
/// compact entry per line; everything else is dumped as indented JSON.
fn section_body_lines(value: &Value) -> Vec<DocLine> {
    let mut lines = Vec::new();
    match value {
        Value::Array(items) => {
            for item in items.iter().take(SEQUENCE_PREVIEW_LIMIT) {
                let text = match item {
                    Value::String(s) => s.clone(),
                    other => serde_json::to_string(other).unwrap_or_else(|_| other.to_string()),
                };
                push_wrapped(&mut lines, &text);
            }
        }
        other => {
            let dump =
                serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string());
            for raw in dump.lines() {
                push_wrapped(&mut lines, raw);
            }
        }
    }
    lines
}

fn push_wrapped(lines: &mut Vec<DocLine>, text: &str) {
    for chunk in wrap_text(&sanitize(text), MAX_LINE_CHARS) {
        lines.push(DocLine {
            text: chunk,
            kind: LineKind::Body,
        });
    }
}

/// The builtin PDF fonts only cover WinAnsi; anything else degrades to '?'.
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if (' '..='~').contains(&c) { c } else { '?' })
        .collect()
}

fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if text.len() <= width {
        return vec![text.to_string()];
    }
    text.as_bytes()
        .chunks(width)
        .map(|chunk| String::from_utf8_lossy(chunk).to_string())
        .collect()
}

/// Approximate centering for the title line (Helvetica averages about half
/// an em per character).
fn centered_x(text: &str, font_size: f64) -> f64 {
    let width_mm = text.chars().count() as f64 * font_size * 0.5 * 0.3528;
    ((PAGE_WIDTH_MM - width_mm) / 2.0).max(MARGIN_MM)
}
