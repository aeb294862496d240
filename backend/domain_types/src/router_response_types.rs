//! Raw transport response handed back to the connector for interpretation.

#[derive(Debug, Clone)]
pub struct Response {
    pub headers: Option<http::HeaderMap>,
    pub response: bytes::Bytes,
    pub status_code: u16,
}
