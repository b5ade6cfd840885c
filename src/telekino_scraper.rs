use log::debug;

use crate::{
    document::Document,
    errors::ParseError,
    scraper::{ResultSet, Scraper},
    text_manipulators::DATE_UNAVAILABLE,
};

/// Scrapes the latest Telekino draw. The page has a single `h3` caption that
/// dates every draw; each captioned bordered table is one draw.
#[derive(Debug, Default, Clone, Copy)]
pub struct TelekinoScraper;

impl Scraper for TelekinoScraper {
    fn scrape(&self, document: &Document) -> Result<ResultSet, ParseError> {
        let root = document.root();
        let date = root
            .find_first("h3", None)
            .map(|heading| heading.text())
            .unwrap_or_else(|| DATE_UNAVAILABLE.to_string());

        let mut results = ResultSet::new();
        for table in root.find_all("table", Some("table-bordered")) {
            let Some(caption) = table.find_first("caption", None) else {
                continue;
            };
            let numbers = table
                .find_all("span", Some("numero"))
                .map(|span| span.text())
                .collect();
            if !results.push(caption.text(), date.clone(), numbers) {
                debug!("skipping telekino table without numbers");
            }
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrape(html: &str) -> ResultSet {
        TelekinoScraper.scrape(&Document::parse(html)).unwrap()
    }

    fn draw_table(caption: &str, numbers: &[&str]) -> String {
        let spans: String = numbers
            .iter()
            .map(|n| format!(r#"<span class="numero">{n}</span>"#))
            .collect();
        format!(
            r#"<table class="table table-bordered"><caption>{caption}</caption>
                 <tbody><tr><td>{spans}</td></tr></tbody></table>"#
        )
    }

    #[test]
    fn page_heading_dates_every_draw() {
        let html = format!(
            "<h3>Sorteo 2301 del 02/06/2024</h3>{}{}",
            draw_table("Telekino", &["01", "05", "12"]),
            draw_table("Rekino", &["03", "07"]),
        );
        let results = scrape(&html);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|d| d.date == "Sorteo 2301 del 02/06/2024"));
        assert_eq!(results.as_slice()[0].draw, "Telekino");
        assert_eq!(results.as_slice()[1].numbers, vec!["03", "07"]);
    }

    #[test]
    fn missing_page_heading_uses_sentinel() {
        let html = draw_table("Telekino", &["01"]);
        assert_eq!(scrape(&html).as_slice()[0].date, DATE_UNAVAILABLE);
    }

    #[test]
    fn skips_uncaptioned_and_empty_tables() {
        let html = format!(
            r#"<h3>Sorteo</h3>
               <table class="table-bordered"><tr><td><span class="numero">99</span></td></tr></table>
               {}{}"#,
            draw_table("Premios", &[]),
            draw_table("Telekino", &["10"]),
        );
        let results = scrape(&html);
        assert_eq!(results.len(), 1);
        assert_eq!(results.as_slice()[0].draw, "Telekino");
    }
}
