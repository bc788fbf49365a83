//! Article records and the reference corpus built from them

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// NewsAPI truncates `content` and appends a marker such as `"… [+1234 chars]"`
static TRUNCATION_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*…?\s*\[\+\d+ chars\]\s*$").expect("truncation marker pattern is valid")
});

/// Source of a fetched article
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A fetched news article
///
/// Field names follow the NewsAPI wire format so a snapshot can be written
/// and read back without loss.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub source: Option<ArticleSource>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Article {
    /// Create an article that only carries content
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Content usable as a corpus entry, if any
    pub fn corpus_text(&self) -> Option<String> {
        let content = self.content.as_deref()?;
        let cleaned = TRUNCATION_MARKER.replace(content, "");

        if cleaned.trim().is_empty() {
            None
        } else {
            Some(cleaned.into_owned())
        }
    }
}

/// Ordered reference texts the similarity check compares against
///
/// Every entry is non-empty after trimming. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleCorpus {
    entries: Vec<String>,
}

impl ArticleCorpus {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a corpus from raw texts, dropping blank entries
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = texts
            .into_iter()
            .map(Into::into)
            .filter(|text| !text.trim().is_empty())
            .collect();

        Self { entries }
    }

    /// Build a corpus from the `content` field of fetched articles
    pub fn from_articles(articles: &[Article]) -> Self {
        Self {
            entries: articles.iter().filter_map(Article::corpus_text).collect(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
