use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to fetch data. Status Code: {}", .0.as_u16())]
    Status(reqwest::StatusCode),

    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
