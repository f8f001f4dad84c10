//! Unified error codes for the ledger
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Sales order errors
//! - 6xxx: Inventory errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Sales ====================
    SalesOrderNotFound = 4001,
    /// Inventory-backed order without an inventory link
    InventoryLinkMissing = 4002,
    /// Inventory link points at an unknown resource
    InventoryLinkUnresolved = 4003,

    // ==================== 6xxx: Inventory ====================
    InventoryNotFound = 6001,
    /// Resource still referenced by at least one sales order
    InventoryInUse = 6002,

    // ==================== 9xxx: System ====================
    InternalError = 9001,
    ConfigError = 9005,
    SnapshotLoadFailed = 9101,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Sales
            ErrorCode::SalesOrderNotFound => "Sales order not found",
            ErrorCode::InventoryLinkMissing => "Inventory link is required for this sales type",
            ErrorCode::InventoryLinkUnresolved => "Inventory link does not match any resource",

            // Inventory
            ErrorCode::InventoryNotFound => "Inventory resource not found",
            ErrorCode::InventoryInUse => "Inventory resource is linked by sales orders",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::SnapshotLoadFailed => "Failed to load data snapshot",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Sales
            4001 => Ok(ErrorCode::SalesOrderNotFound),
            4002 => Ok(ErrorCode::InventoryLinkMissing),
            4003 => Ok(ErrorCode::InventoryLinkUnresolved),

            // Inventory
            6001 => Ok(ErrorCode::InventoryNotFound),
            6002 => Ok(ErrorCode::InventoryInUse),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9005 => Ok(ErrorCode::ConfigError),
            9101 => Ok(ErrorCode::SnapshotLoadFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::SalesOrderNotFound.code(), 4001);
        assert_eq!(ErrorCode::InventoryLinkMissing.code(), 4002);
        assert_eq!(ErrorCode::InventoryNotFound.code(), 6001);
        assert_eq!(ErrorCode::InventoryInUse.code(), 6002);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::SnapshotLoadFailed.code(), 9101);
    }

    #[test]
    fn test_try_from_round_trips_every_code() {
        let all = [
            ErrorCode::Success,
            ErrorCode::Unknown,
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::AlreadyExists,
            ErrorCode::InvalidRequest,
            ErrorCode::RequiredField,
            ErrorCode::ValueOutOfRange,
            ErrorCode::SalesOrderNotFound,
            ErrorCode::InventoryLinkMissing,
            ErrorCode::InventoryLinkUnresolved,
            ErrorCode::InventoryNotFound,
            ErrorCode::InventoryInUse,
            ErrorCode::InternalError,
            ErrorCode::ConfigError,
            ErrorCode::SnapshotLoadFailed,
        ];
        for code in all {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_invalid_code_rejected() {
        assert_eq!(ErrorCode::try_from(6), Err(InvalidErrorCode(6)));
        assert_eq!(ErrorCode::try_from(12345), Err(InvalidErrorCode(12345)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::InventoryInUse).unwrap();
        assert_eq!(json, "6002");
        let code: ErrorCode = serde_json::from_str("4001").unwrap();
        assert_eq!(code, ErrorCode::SalesOrderNotFound);
    }
}
