pub mod config;
pub mod logging;

// Parsing layer
pub mod error;
pub mod headers;
pub mod import;
pub mod platform;
pub mod query;

pub use error::{LiteralError, ParseError};
pub use headers::{
    parse_curl_headers, parse_fetch_headers, parse_header_lines, HeaderMap, ParseResult,
};
pub use query::{parse_curl_url_and_params, UrlQueryResult};
