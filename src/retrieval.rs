//! Knowledge-base retrieval seam.
//!
//! Curriculum prompts can be grounded with reference material. The
//! [`ContextStore`] trait keeps the orchestrator decoupled from any
//! particular retrieval backend; [`MemoryStore`] is the built-in
//! implementation, a small in-process lexical index over plain-text
//! documents.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;

use crate::{CurriculaError, Result};

/// A scored piece of reference material returned from a lookup.
#[derive(Debug, Clone)]
pub struct ContextSnippet {
    /// The document text.
    pub text: String,
    /// Where the text came from, usually a file name.
    pub source: String,
    /// Similarity to the query, in `[0, 1]`.
    pub score: f32,
}

/// A searchable store of reference documents.
#[async_trait]
pub trait ContextStore: Send + Sync {
    /// Identifier used in logs.
    fn name(&self) -> &str;

    /// Return up to `limit` snippets most similar to `query`, best first.
    async fn similar(&self, query: &str, limit: usize) -> Result<Vec<ContextSnippet>>;
}

/// In-process lexical store.
///
/// Documents are indexed as term-frequency vectors over lowercased
/// alphanumeric tokens and ranked by cosine similarity. Good enough for a
/// directory of syllabus notes; swap in a real vector database behind
/// [`ContextStore`] when the corpus outgrows it.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Vec<Document>,
}

#[derive(Debug)]
struct Document {
    text: String,
    source: String,
    terms: HashMap<String, f32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index one document.
    pub fn add(&mut self, text: impl Into<String>, source: impl Into<String>) {
        let text = text.into();
        let terms = term_frequencies(&text);
        self.documents.push(Document {
            text,
            source: source.into(),
            terms,
        });
    }

    /// Load every `.md` and `.txt` file in `dir`, in path order.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir).map_err(|e| {
            CurriculaError::Configuration(format!(
                "failed to read knowledge directory {}: {e}",
                dir.display()
            ))
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                CurriculaError::Configuration(format!(
                    "failed to read knowledge directory {}: {e}",
                    dir.display()
                ))
            })?;
            let path = entry.path();
            let is_text = matches!(
                path.extension().and_then(|ext| ext.to_str()),
                Some("md" | "txt")
            );
            if path.is_file() && is_text {
                paths.push(path);
            }
        }
        paths.sort();

        let mut store = Self::new();
        for path in paths {
            let text = std::fs::read_to_string(&path).map_err(|e| {
                CurriculaError::Configuration(format!("failed to read {}: {e}", path.display()))
            })?;
            let source = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            store.add(text, source);
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl ContextStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn similar(&self, query: &str, limit: usize) -> Result<Vec<ContextSnippet>> {
        let query_terms = term_frequencies(query);
        if query_terms.is_empty() {
            return Ok(Vec::new());
        }

        let mut scored: Vec<ContextSnippet> = self
            .documents
            .iter()
            .filter_map(|doc| {
                let score = cosine(&query_terms, &doc.terms);
                (score > 0.0).then(|| ContextSnippet {
                    text: doc.text.clone(),
                    source: doc.source.clone(),
                    score,
                })
            })
            .collect();
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(limit);
        Ok(scored)
    }
}

fn term_frequencies(text: &str) -> HashMap<String, f32> {
    let mut terms: HashMap<String, f32> = HashMap::new();
    for token in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
    {
        *terms.entry(token.to_lowercase()).or_insert(0.0) += 1.0;
    }
    terms
}

fn cosine(a: &HashMap<String, f32>, b: &HashMap<String, f32>) -> f32 {
    let dot: f32 = a
        .iter()
        .filter_map(|(term, weight)| b.get(term).map(|other| weight * other))
        .sum();
    if dot == 0.0 {
        return 0.0;
    }
    let norm_a: f32 = a.values().map(|w| w * w).sum::<f32>().sqrt();
    let norm_b: f32 = b.values().map(|w| w * w).sum::<f32>().sqrt();
    dot / (norm_a * norm_b)
}
