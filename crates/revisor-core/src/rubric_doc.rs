//! Externally supplied rubric documents
//!
//! A rubric document is read for reference only: its non-empty paragraphs
//! are extracted and shown next to the rubric, but scoring always uses the
//! built-in [`Rubric`](crate::rubric::Rubric). Word documents (`.docx`) are
//! read from their `word/document.xml` part; anything else is read as UTF-8
//! text. Documents that cannot be read (missing files, corrupt archives,
//! undecodable bytes) are not an error; they downgrade to the built-in
//! rubric with a warning.

use std::fs::{self, File};
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Serialize;
use tracing::{debug, warn};
use zip::ZipArchive;

use crate::error::{Result, RevisorError};

/// File names looked up in the root when no rubric document is configured
pub const DEFAULT_DOCUMENT_NAMES: [&str; 3] = ["rubric.docx", "rubric.md", "rubric.txt"];

/// Archive member holding the body of a `.docx` document
const DOCUMENT_PART: &str = "word/document.xml";

/// Text extracted from a rubric document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RubricDocument {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

/// What to show as the rubric reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum RubricReference {
    /// Nothing supplied; the built-in rubric is shown
    Builtin,
    /// Text extracted from a supplied document
    Document(RubricDocument),
    /// The supplied document could not be read; the built-in rubric is used
    Unreadable { path: PathBuf, reason: String },
}

impl RubricReference {
    /// Load a reference from an optional document path
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return RubricReference::Builtin;
        };
        match extract_lines(path) {
            Ok(lines) if !lines.is_empty() => {
                debug!(path = %path.display(), lines = lines.len(), "rubric document loaded");
                RubricReference::Document(RubricDocument {
                    path: path.to_path_buf(),
                    lines,
                })
            }
            Ok(_) => unreadable(path, "document contains no text".to_string()),
            Err(e) => unreadable(path, e.to_string()),
        }
    }

    /// First of [`DEFAULT_DOCUMENT_NAMES`] present in `root`
    pub fn discover(root: &Path) -> Option<PathBuf> {
        DEFAULT_DOCUMENT_NAMES
            .iter()
            .map(|name| root.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// User-facing warning for a document that could not be used
    pub fn warning(&self) -> Option<String> {
        match self {
            RubricReference::Unreadable { path, reason } => Some(format!(
                "could not read rubric document {} ({}); using the default rubric",
                path.display(),
                reason
            )),
            _ => None,
        }
    }
}

fn unreadable(path: &Path, reason: String) -> RubricReference {
    warn!(path = %path.display(), %reason, "rubric document unreadable");
    RubricReference::Unreadable {
        path: path.to_path_buf(),
        reason,
    }
}

fn is_docx(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"))
}

/// Non-empty, trimmed lines (or paragraphs, for `.docx`) of a document
fn extract_lines(path: &Path) -> Result<Vec<String>> {
    if is_docx(path) {
        return docx_paragraphs(File::open(path)?);
    }
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Paragraph texts of a `.docx` archive
fn docx_paragraphs<R: Read + Seek>(reader: R) -> Result<Vec<String>> {
    let mut archive =
        ZipArchive::new(reader).map_err(|e| RevisorError::failed("open .docx archive", e))?;
    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| RevisorError::failed("find word/document.xml", e))?
        .read_to_string(&mut xml)?;
    paragraph_text(&xml)
}

/// Join the `<w:t>` runs of every `<w:p>`, dropping empty paragraphs
fn paragraph_text(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| RevisorError::failed("parse word/document.xml", e))?;
        match event {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => current.clear(),
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => current.push('\t'),
                b"w:br" => current.push(' '),
                _ => {}
            },
            Event::Text(text) if in_text => {
                let text = text
                    .unescape()
                    .map_err(|e| RevisorError::failed("parse word/document.xml", e))?;
                current.push_str(&text);
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => {
                    let line = current.trim();
                    if !line.is_empty() {
                        paragraphs.push(line.to_string());
                    }
                    current.clear();
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
