use reqwest::StatusCode;

/// Transport failures surfaced by a [`crate::Fetch`] implementation.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: StatusCode },
}

/// The page does not have the structure a scraper needs.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("missing required element: {0}")]
    MissingElement(&'static str),
}

#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Outcomes a caller of [`crate::Dispatcher::query`] can see. Messages are
/// the ones shown to API clients, so internal details never appear here.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Formato de fecha inválido. Usar YYYY-MM-DD")]
    InvalidDateFormat(String),
    #[error("Juego o fecha no válidos para la consulta")]
    UnsupportedQuery { game: String, date: String },
    #[error("No se pudieron obtener los resultados de {game}")]
    UpstreamFailure { game: String },
}

impl QueryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidDateFormat(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedQuery { .. } => StatusCode::NOT_FOUND,
            Self::UpstreamFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
