use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseErrorKind {
    Connection,
    Query,
    Decode,
}

#[derive(Debug, Error)]
#[error("database {kind:?} error: {message}")]
pub struct DatabaseError {
    pub kind: DatabaseErrorKind,
    pub message: String,
}

impl DatabaseError {
    pub fn new(kind: DatabaseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn from_sqlx(err: sqlx::Error) -> Self {
        let kind = match &err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => DatabaseErrorKind::Connection,
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => DatabaseErrorKind::Decode,
            _ => DatabaseErrorKind::Query,
        };
        Self::new(kind, err.to_string())
    }
}

impl From<DatabaseError> for StoreError {
    fn from(err: DatabaseError) -> Self {
        match err.kind {
            DatabaseErrorKind::Connection => StoreError::Connection(err.message),
            DatabaseErrorKind::Query => StoreError::Query(err.message),
            DatabaseErrorKind::Decode => StoreError::Serialization(err.message),
        }
    }
}
