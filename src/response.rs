use reqwest::StatusCode;
use serde::Serialize;
use serde_json::{Value, json};

use crate::{errors::QueryError, scraper::ResultSet};

/// What an HTTP front end would send back for a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn is_success(&self) -> bool {
        self.status_code().is_success()
    }
}

impl From<&Result<ResultSet, QueryError>> for ApiResponse {
    fn from(result: &Result<ResultSet, QueryError>) -> Self {
        match result {
            Ok(results) => Self {
                status: StatusCode::OK.as_u16(),
                body: json!(results),
            },
            Err(e) => Self {
                status: e.status_code().as_u16(),
                body: json!({ "error": e.to_string() }),
            },
        }
    }
}
