//! Crate constants and construction defaults

/// Origin component used by constructors that take no explicit origin
pub const DEFAULT_ORIGIN: i64 = 0;

/// Label carried by every out-of-range error raised by checked access
pub const OUT_OF_RANGE_LABEL: &str = "2D grid";
