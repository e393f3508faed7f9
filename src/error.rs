use mongodb::error::{Error as DriverError, ErrorKind, WriteFailure};
use thiserror::Error;

const DUPLICATE_KEY: i32 = 11000;
const UNAUTHORIZED: i32 = 13;

/// Initialization failure, classified by underlying cause.
///
/// An already-present collection or index is not an error; the driver
/// loop treats it as a no-op before any engine call is made.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("cannot reach the database engine")]
    ConnectionFailure(#[source] DriverError),

    #[error("credentials lack schema-mutation rights")]
    PermissionDenied(#[source] DriverError),

    #[error("unique index conflicts with existing data")]
    ConstraintViolation(#[source] DriverError),

    #[error("database engine error")]
    Driver(#[source] DriverError),
}

enum ErrorClass {
    Connection,
    Permission,
    Constraint,
    Other,
}

fn classify(kind: &ErrorKind) -> ErrorClass {
    match kind {
        ErrorKind::ServerSelection { .. } | ErrorKind::DnsResolve { .. } | ErrorKind::Io(_) => {
            ErrorClass::Connection
        }
        ErrorKind::Authentication { .. } => ErrorClass::Permission,
        ErrorKind::Command(command) if command.code == UNAUTHORIZED => ErrorClass::Permission,
        ErrorKind::Command(command) if command.code == DUPLICATE_KEY => ErrorClass::Constraint,
        ErrorKind::Write(WriteFailure::WriteError(write)) if write.code == DUPLICATE_KEY => {
            ErrorClass::Constraint
        }
        _ => ErrorClass::Other,
    }
}

impl From<DriverError> for InitError {
    fn from(err: DriverError) -> Self {
        match classify(&err.kind) {
            ErrorClass::Connection => InitError::ConnectionFailure(err),
            ErrorClass::Permission => InitError::PermissionDenied(err),
            ErrorClass::Constraint => InitError::ConstraintViolation(err),
            ErrorClass::Other => InitError::Driver(err),
        }
    }
}

pub type InitResult<T> = Result<T, InitError>;
