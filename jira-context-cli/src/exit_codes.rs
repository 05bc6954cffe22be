//! Process exit codes

/// Successful completion
pub const EXIT_SUCCESS: i32 = 0;

/// Completed with warnings
pub const EXIT_WARNING: i32 = 1;

/// Failed with errors
pub const EXIT_ERROR: i32 = 2;
