//! Error types shared across the workspace.

/// The result type threaded through every fallible layer of the workspace.
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Failures raised while converting between wire payloads and structured data.
#[derive(Debug, thiserror::Error)]
pub enum ParsingError {
    #[error("Failed to parse {0} from the response body")]
    StructParseFailure(&'static str),
    #[error("Failed to serialize {0} into the wire envelope")]
    EncodeFailure(&'static str),
}
