//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::NotFound | Self::SalesOrderNotFound | Self::InventoryNotFound => {
                StatusCode::NOT_FOUND
            }

            Self::AlreadyExists | Self::InventoryInUse => StatusCode::CONFLICT,

            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::RequiredField
            | Self::ValueOutOfRange
            | Self::InventoryLinkMissing
            | Self::InventoryLinkUnresolved => StatusCode::BAD_REQUEST,

            Self::Unknown | Self::InternalError | Self::ConfigError | Self::SnapshotLoadFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
