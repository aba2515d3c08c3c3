//! Classify fetch errors into the four reported failure kinds.

use super::FetchError;

/// Reported failure kind, checked most specific first: connection problems,
/// then timeouts, then the general request bucket, then everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Transport could not establish or keep the connection.
    Connection,
    /// The whole-request timeout expired.
    Timeout,
    /// Client/protocol-level failure, including non-success HTTP status.
    Request { status: Option<u32> },
    /// Outside the taxonomy (e.g. destination I/O failure).
    Unexpected,
}

/// True for curl errors that mean the server (or the path to it) refused or
/// dropped the connection, rather than a protocol-level problem.
fn is_connection_error(e: &curl::Error) -> bool {
    e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_ssl_connect_error()
        || e.is_peer_failed_verification()
        || e.is_got_nothing()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_partial_file()
}

/// Classify a fetch error into a FailureKind for reporting.
pub fn classify(e: &FetchError) -> FailureKind {
    match e {
        FetchError::Transport(ce) => {
            if is_connection_error(ce) {
                FailureKind::Connection
            } else if ce.is_operation_timedout() {
                FailureKind::Timeout
            } else {
                FailureKind::Request { status: None }
            }
        }
        FetchError::Http(code) => FailureKind::Request {
            status: Some(*code),
        },
        FetchError::Storage(_) => FailureKind::Unexpected,
    }
}
