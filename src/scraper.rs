use serde::{Deserialize, Serialize};

use crate::{
    document::Document,
    errors::{ParseError, QueryError},
    quini6_scraper::Quini6Scraper,
    quiniela_scraper::QuinielaScraper,
    telekino_scraper::TelekinoScraper,
};

/// One draw as shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedResult {
    #[serde(rename = "sorteo")]
    pub draw: String,
    #[serde(rename = "fecha")]
    pub date: String,
    // Kept as text so leading zeros survive.
    #[serde(rename = "numeros")]
    pub numbers: Vec<String>,
}

/// Draws in the order their sections appear on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet(Vec<NormalizedResult>);

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a draw unless it has no numbers. Returns whether it was kept.
    pub fn push(&mut self, draw: String, date: String, numbers: Vec<String>) -> bool {
        if numbers.is_empty() {
            return false;
        }
        self.0.push(NormalizedResult {
            draw,
            date,
            numbers,
        });
        true
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedResult> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[NormalizedResult] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a NormalizedResult;
    type IntoIter = std::slice::Iter<'a, NormalizedResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Turns one page family's markup into normalized draws.
pub trait Scraper {
    fn scrape(&self, document: &Document) -> Result<ResultSet, ParseError>;
}

/// Which page layout a source URL serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Quiniela,
    Telekino,
    Quini6,
}

impl PageKind {
    pub fn scrape(self, html: &str) -> Result<ResultSet, ParseError> {
        let document = Document::parse(html);
        match self {
            PageKind::Quiniela => QuinielaScraper.scrape(&document),
            PageKind::Telekino => TelekinoScraper.scrape(&document),
            PageKind::Quini6 => Quini6Scraper::default().scrape(&document),
        }
    }
}

/// A query result with "nothing published" and "could not fetch" kept apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    Empty,
    Populated(ResultSet),
    Failed(QueryError),
}

impl From<Result<ResultSet, QueryError>> for DrawOutcome {
    fn from(result: Result<ResultSet, QueryError>) -> Self {
        match result {
            Ok(results) if results.is_empty() => DrawOutcome::Empty,
            Ok(results) => DrawOutcome::Populated(results),
            Err(e) => DrawOutcome::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_drops_draws_without_numbers() {
        let mut results = ResultSet::new();
        assert!(!results.push("Vacio".into(), "hoy".into(), vec![]));
        assert!(results.push("Lleno".into(), "hoy".into(), vec!["07".into()]));
        assert_eq!(results.len(), 1);
        assert_eq!(results.as_slice()[0].draw, "Lleno");
    }

    #[test]
    fn serializes_with_client_field_names() {
        let mut results = ResultSet::new();
        results.push(
            "Quiniela Nacional".into(),
            "05-06-2024".into(),
            vec!["0042".into(), "1234".into()],
        );
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "sorteo": "Quiniela Nacional",
                "fecha": "05-06-2024",
                "numeros": ["0042", "1234"]
            }])
        );
    }

    #[test]
    fn outcome_separates_empty_from_failed() {
        assert_eq!(DrawOutcome::from(Ok(ResultSet::new())), DrawOutcome::Empty);
        let failed = QueryError::UpstreamFailure {
            game: "quini6".into(),
        };
        assert_eq!(
            DrawOutcome::from(Err(failed.clone())),
            DrawOutcome::Failed(failed)
        );
    }
}
