//! Static mapping from processor reason codes to human-readable messages.
//!
//! The processor groups its codes by hundred: bank declines (1xx), risk
//! blocks (2xx), gateway system errors (3xx) and request rejections (4xx).

/// The reason code signalling success. Reserved: it never appears in the
/// table below and must never reach the error path.
pub const SUCCESS_REASON_CODE: i64 = 0;

/// Fallback message for codes the table does not list. The raw code and the
/// full original payload stay attached to the error either way.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error from the gateway";

/// Looks up the message for a non-zero reason code.
pub fn reason_message(code: i64) -> Option<&'static str> {
    let message = match code {
        // 1xx: bank declines
        100 => "Declined – No matching transaction",
        101 => "Declined – Transaction cannot be voided",
        102 => "Declined – Transaction cannot be credited",
        103 => "Declined – Transaction cannot be ticketed",
        104 => "Declined – Declined by bank",
        105 => "Declined – Over limit",
        106 => "Declined – CVV2 failure",
        107 => "Declined – Expired card",
        108 => "Declined – Call card issuer",
        109 => "Declined – Pickup card",
        110 => "Declined – Excessive use",
        111 => "Declined – Invalid card",
        112 => "Declined – Invalid expiration",
        113 => "Declined – Bank unavailable",
        117 => "Declined – Address verification failed",
        123 => "Declined – Declined by user",
        // 2xx: risk blocks
        200 => "Blocked – Failed risk check",
        201 => "Blocked – Customer blocked",
        // 3xx: gateway system errors
        300 => "System error - DNS failure",
        301 => "System error - Unable to connect",
        302 => "System error - Transmission error",
        303 => "System error - Read timeout",
        304 => "System error - Read error",
        307 => "System error - Internal failure",
        311 => "System error - Bank communication error",
        321 => "System error - Web service failure",
        // 4xx: request rejections
        400 => "Rejected - Invalid XML",
        401 => "Rejected - Invalid amount",
        402 => "Rejected - Invalid merchant ID",
        403 => "Rejected - Invalid merchant account",
        404 => "Rejected - Incompatible card type",
        405 => "Rejected - No suitable account",
        406 => "Rejected - Invalid transaction type",
        407 => "Rejected - Invalid Card Number",
        408 => "Rejected - Invalid expiration date",
        409 => "Rejected - Invalid credit amount",
        411 => "Rejected - Invalid reference GUID",
        412 => "Rejected - Invalid access code",
        413 => "Rejected - Invalid customer data length",
        414 => "Rejected - Invalid external data",
        415 => "Rejected - Invalid Customer ID",
        418 => "Rejected - Invalid currency",
        419 => "Rejected - Incompatible currency",
        420 => "Rejected - Invalid rebill arguments",
        _ => return None,
    };
    Some(message)
}
