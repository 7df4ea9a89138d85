//! Result type aliases for the GoREST proxy.

use crate::GorestError;

/// A specialized `Result` type for proxy operations.
pub type GorestResult<T> = Result<T, GorestError>;
