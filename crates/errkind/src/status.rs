//! HTTP status values used by the client-error constructors.

pub const BAD_REQUEST: i32 = 400;
pub const FORBIDDEN: i32 = 403;
pub const NOT_FOUND: i32 = 404;
pub const NOT_IMPLEMENTED: i32 = 501;
