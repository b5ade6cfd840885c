//! Maps a `(game, date)` query onto a source page and the scraper for it.

use std::{fmt, sync::LazyLock};

use chrono::NaiveDate;
use log::{error, info};
use regex::Regex;

use crate::{
    errors::{ExtractError, QueryError},
    requests::Fetch,
    scraper::{PageKind, ResultSet},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Game {
    Nacional,
    Mendoza,
    Telekino,
    Quini6,
}

impl Game {
    pub fn parse(game: &str) -> Option<Self> {
        match game {
            "nacional" => Some(Game::Nacional),
            "mendoza" => Some(Game::Mendoza),
            "telekino" => Some(Game::Telekino),
            "quini6" => Some(Game::Quini6),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Game::Nacional => "nacional",
            Game::Mendoza => "mendoza",
            Game::Telekino => "telekino",
            Game::Quini6 => "quini6",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// `%Y` alone would also take signs, short years and leading blanks.
static RE_ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$").expect("invalid regex: iso date"));

fn parse_iso_date(token: &str) -> Option<NaiveDate> {
    if !RE_ISO_DATE.is_match(token) {
        return None;
    }
    NaiveDate::parse_from_str(token, "%Y-%m-%d").ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateToken {
    Hoy,
    Ayer,
    Ultimo,
    On(NaiveDate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceQuery {
    game: Game,
    date: DateToken,
}

impl SourceQuery {
    pub fn game(&self) -> Game {
        self.game
    }

    pub fn date(&self) -> DateToken {
        self.date
    }

    /// Validates a raw query. The game is checked first, so an unknown game
    /// is unsupported whatever the date looks like.
    pub fn parse(game: &str, date: &str) -> Result<Self, QueryError> {
        let unsupported = || QueryError::UnsupportedQuery {
            game: game.to_string(),
            date: date.to_string(),
        };
        let parsed_game = Game::parse(game).ok_or_else(unsupported)?;
        let token = match (parsed_game, date) {
            (Game::Nacional | Game::Mendoza, "hoy") => DateToken::Hoy,
            (Game::Nacional | Game::Mendoza, "ayer") => DateToken::Ayer,
            (Game::Nacional | Game::Mendoza, _) => parse_iso_date(date)
                .map(DateToken::On)
                .ok_or_else(|| QueryError::InvalidDateFormat(date.to_string()))?,
            (Game::Telekino | Game::Quini6, "ultimo") => DateToken::Ultimo,
            (Game::Telekino | Game::Quini6, _) => return Err(unsupported()),
        };
        Ok(Self {
            game: parsed_game,
            date: token,
        })
    }
}

/// A concrete page to fetch and how to read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub game: Game,
    pub url: String,
    pub kind: PageKind,
}

impl Route {
    pub fn for_query(base_url: &str, query: &SourceQuery) -> Self {
        let game = query.game;
        let (url, kind) = match (game, query.date) {
            (Game::Nacional | Game::Mendoza, DateToken::Hoy) => (
                format!("{base_url}/quinielas/{game}/resultados-de-hoy"),
                PageKind::Quiniela,
            ),
            (Game::Nacional | Game::Mendoza, DateToken::Ayer) => (
                format!("{base_url}/quinielas/{game}/resultados-de-ayer"),
                PageKind::Quiniela,
            ),
            (Game::Nacional | Game::Mendoza, DateToken::On(day)) => (
                format!(
                    "{base_url}/quinielas/{game}/resultados-del-{}",
                    day.format("%d-%m-%Y")
                ),
                PageKind::Quiniela,
            ),
            (Game::Telekino, DateToken::Ultimo) => (
                format!("{base_url}/telekino/resultados/ultimo-sorteo"),
                PageKind::Telekino,
            ),
            (Game::Quini6, DateToken::Ultimo) => (
                format!("{base_url}/quini6/resultados/ultimo-sorteo"),
                PageKind::Quini6,
            ),
            (game, date) => unreachable!("SourceQuery::parse rejects {game} with {date:?}"),
        };
        Self { game, url, kind }
    }
}

pub struct Dispatcher<F> {
    base_url: String,
    fetcher: F,
}

impl<F: Fetch> Dispatcher<F> {
    pub fn new(base_url: &str, fetcher: F) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            fetcher,
        }
    }

    /// Validates the query and picks the page. Never touches the network.
    pub fn resolve(&self, game: &str, date: &str) -> Result<Route, QueryError> {
        let query = SourceQuery::parse(game, date)?;
        Ok(Route::for_query(&self.base_url, &query))
    }

    /// One fetch, one parse. Any fetch or parse failure is logged and reported
    /// as an upstream failure for the game, never as partial results.
    pub async fn query(&self, game: &str, date: &str) -> Result<ResultSet, QueryError> {
        let route = self.resolve(game, date)?;
        match self.extract(&route).await {
            Ok(results) => {
                info!("{} results for {} from {}", results.len(), route.game, route.url);
                Ok(results)
            }
            Err(e) => {
                error!("could not scrape {} ({}): {}", route.game, route.url, e);
                Err(QueryError::UpstreamFailure {
                    game: route.game.to_string(),
                })
            }
        }
    }

    async fn extract(&self, route: &Route) -> Result<ResultSet, ExtractError> {
        info!("fetching {}", route.url);
        let html = self.fetcher.fetch(&route.url).await?;
        Ok(route.kind.scrape(&html)?)
    }
}
