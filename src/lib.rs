mod scraper;
mod text_manipulators;

pub mod config;
pub mod dispatcher;
pub mod document;
pub mod errors;
pub mod quini6_scraper;
pub mod quiniela_scraper;
pub mod requests;
pub mod response;
pub mod scraping_context;
pub mod telekino_scraper;

pub use crate::scraper::{DrawOutcome, NormalizedResult, PageKind, ResultSet, Scraper};
pub use dispatcher::{DateToken, Dispatcher, Game, Route, SourceQuery};
pub use document::{Document, Node};
pub use errors::{ExtractError, FetchError, ParseError, QueryError};
pub use quini6_scraper::{BONUS_POOL_MARKER, BONUS_POOL_ROWS, Quini6Scraper};
pub use quiniela_scraper::QuinielaScraper;
pub use requests::{Fetch, RequestClient};
pub use response::ApiResponse;
pub use scraping_context::ScrapingContext;
pub use telekino_scraper::TelekinoScraper;
pub use text_manipulators::DATE_UNAVAILABLE;
