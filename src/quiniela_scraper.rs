use log::debug;

use crate::{
    document::Document,
    errors::ParseError,
    scraper::{ResultSet, Scraper},
    text_manipulators::split_quiniela_heading,
};

/// The site's own notice for a day without draws.
const NO_DRAWS_NOTICE: &str = "Aún no tenemos información";

/// Scrapes the quiniela result pages (Nacional, Mendoza). Every bordered table
/// is a draw whose `h3` carries `"<name>, <shift>. <date>"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuinielaScraper;

impl Scraper for QuinielaScraper {
    fn scrape(&self, document: &Document) -> Result<ResultSet, ParseError> {
        let root = document.root();
        let mut results = ResultSet::new();

        let no_draws = root
            .find_first("p", Some("alert-warning"))
            .is_some_and(|alert| alert.text().contains(NO_DRAWS_NOTICE));
        if no_draws {
            debug!("quiniela page reports no draws yet");
            return Ok(results);
        }

        for table in root.find_all("table", Some("table-bordered")) {
            let Some(heading) = table.find_first("h3", None) else {
                debug!("skipping quiniela table without heading");
                continue;
            };
            let (draw, date) = split_quiniela_heading(&heading.text());
            let numbers = table
                .find_all("span", Some("nro"))
                .map(|span| span.text())
                .collect();
            if !results.push(draw, date, numbers) {
                debug!("skipping quiniela table without numbers");
            }
        }

        Ok(results)
    }
}
