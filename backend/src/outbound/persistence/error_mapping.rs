//! Shared MongoDB error classification for the repository adapters.

use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use tracing::debug;

/// Server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11_000;

/// Coarse failure class used to pick a port error variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailureClass {
    Connection,
    DuplicateKey,
    Query,
}

pub(crate) fn classify(error: &MongoError) -> FailureClass {
    match error.kind.as_ref() {
        ErrorKind::InsertMany(failure) => {
            let codes = failure
                .write_errors
                .iter()
                .flatten()
                .map(|write_error| write_error.code);
            class_for_write_codes(codes)
        }
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            class_for_write_codes([write_error.code])
        }
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::DnsResolve { .. }
        | ErrorKind::ConnectionPoolCleared { .. } => FailureClass::Connection,
        _ => FailureClass::Query,
    }
}

fn class_for_write_codes(codes: impl IntoIterator<Item = i32>) -> FailureClass {
    if codes.into_iter().any(|code| code == DUPLICATE_KEY_CODE) {
        FailureClass::DuplicateKey
    } else {
        FailureClass::Query
    }
}

/// Map a driver error onto a port error through per-class constructors.
pub(crate) fn map_mongo_error<E>(
    error: &MongoError,
    connection: impl FnOnce(String) -> E,
    duplicate_key: impl FnOnce(String) -> E,
    query: impl FnOnce(String) -> E,
) -> E {
    let class = classify(error);
    debug!(?class, error = %error, "MongoDB operation failed");
    let message = error.to_string();
    match class {
        FailureClass::Connection => connection(message),
        FailureClass::DuplicateKey => duplicate_key(message),
        FailureClass::Query => query(message),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(vec![11_000], FailureClass::DuplicateKey)]
    #[case(vec![121, 11_000], FailureClass::DuplicateKey)]
    #[case(vec![121], FailureClass::Query)]
    #[case(Vec::new(), FailureClass::Query)]
    fn write_codes_pick_failure_class(#[case] codes: Vec<i32>, #[case] expected: FailureClass) {
        assert_eq!(class_for_write_codes(codes), expected);
    }
}
