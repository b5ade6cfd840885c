use log::debug;

use crate::{
    document::{Document, Node},
    errors::ParseError,
    scraper::{ResultSet, Scraper},
};

pub const INFO_UNAVAILABLE: &str = "Info no disponible";

/// Headings containing this text introduce a bonus pool.
pub const BONUS_POOL_MARKER: &str = "Pozo extra";

/// Rows holding the numbers of a bonus-pool draw, counted from the row right
/// after its heading.
pub const BONUS_POOL_ROWS: usize = 3;

/// Scrapes the latest Quini 6 draw. Everything lives in one striped table:
/// a `th.lead` per draw followed by the row(s) holding its numbers.
#[derive(Debug, Clone, Copy)]
pub struct Quini6Scraper {
    bonus_pool_rows: usize,
}

impl Default for Quini6Scraper {
    fn default() -> Self {
        Self {
            bonus_pool_rows: BONUS_POOL_ROWS,
        }
    }
}

impl Quini6Scraper {
    pub fn with_bonus_pool_rows(bonus_pool_rows: usize) -> Self {
        Self { bonus_pool_rows }
    }

    fn rows_for(&self, draw: &str) -> usize {
        if is_bonus_pool(draw) {
            self.bonus_pool_rows
        } else {
            1
        }
    }
}

fn is_bonus_pool(draw: &str) -> bool {
    draw.contains(BONUS_POOL_MARKER)
}

fn numbers_in_rows(first_row: Option<Node<'_>>, count: usize) -> Vec<String> {
    std::iter::successors(first_row, |row| row.next_sibling("tr"))
        .take(count)
        .flat_map(|row| row.find_all("span", Some("numero")).map(|span| span.text()))
        .collect()
}

impl Scraper for Quini6Scraper {
    fn scrape(&self, document: &Document) -> Result<ResultSet, ParseError> {
        let table = document
            .root()
            .find_first("table", Some("table-striped"))
            .ok_or(ParseError::MissingElement("table.table-striped"))?;
        let caption = table
            .find_first("caption", None)
            .map(|caption| caption.text())
            .unwrap_or_else(|| INFO_UNAVAILABLE.to_string());

        let mut results = ResultSet::new();
        for heading in table.find_all("th", Some("lead")) {
            let draw = heading.text();
            let first_row = heading
                .parent("tr")
                .ok_or(ParseError::MissingElement("tr around th.lead"))?
                .next_sibling("tr");
            // Only a bonus pool may run short of rows.
            if first_row.is_none() && !is_bonus_pool(&draw) {
                return Err(ParseError::MissingElement("tr after th.lead"));
            }
            let numbers = numbers_in_rows(first_row, self.rows_for(&draw));
            if !results.push(draw, caption.clone(), numbers) {
                debug!("skipping quini6 heading without numbers");
            }
        }

        Ok(results)
    }
}
