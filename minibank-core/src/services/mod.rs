//! Service layer
//!
//! Services support callers of the domain. The domain itself stays free of
//! I/O; anything that touches the filesystem lives here.

pub mod logging;

pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
