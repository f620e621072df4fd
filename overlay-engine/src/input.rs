//! Page input sources

use crate::error::Result;
use overlay_core::Chunk;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Chunks of one document page, in retrieval order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Owning document, if the source named one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    /// Page number within the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    /// OCR chunks on the page
    pub chunks: Vec<Chunk>,
}

impl Page {
    /// Page with no document metadata
    pub fn from_chunks(chunks: Vec<Chunk>) -> Self {
        Self {
            chunks,
            ..Self::default()
        }
    }

    /// Decode a page from JSON: either a bare chunk array or a page object
    pub fn from_json(text: &str) -> Result<Self> {
        let shape: PageShape = serde_json::from_str(text)?;
        Ok(shape.into())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PageShape {
    Bare(Vec<Chunk>),
    Page(Page),
}

impl From<PageShape> for Page {
    fn from(shape: PageShape) -> Self {
        match shape {
            PageShape::Bare(chunks) => Page::from_chunks(chunks),
            PageShape::Page(page) => page,
        }
    }
}

/// Input source for processing
#[derive(Debug, Clone)]
pub enum Input {
    /// JSON text
    Text(String),
    /// Path to a JSON file
    File(PathBuf),
    /// UTF-8 JSON bytes
    Bytes(Vec<u8>),
    /// Already decoded chunks
    Chunks(Vec<Chunk>),
}

impl Input {
    /// Create input from JSON text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from decoded chunks
    pub fn from_chunks(chunks: Vec<Chunk>) -> Self {
        Input::Chunks(chunks)
    }

    /// Read and decode the page
    pub fn into_page(self) -> Result<Page> {
        match self {
            Input::Text(text) => Page::from_json(&text),
            Input::File(path) => Page::from_json(&fs::read_to_string(path)?),
            Input::Bytes(bytes) => Page::from_json(&String::from_utf8(bytes)?),
            Input::Chunks(chunks) => Ok(Page::from_chunks(chunks)),
        }
    }
}
