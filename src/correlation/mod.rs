//! Request/response correlation logging.
//!
//! # Data Flow
//! ```text
//! pre-send:
//!     RequestDescriptor
//!     → key.rs (canonical string → SHA-256 → CorrelationKey)
//!     → table.rs (insert key → issue instant)
//!     → networking record (method, URL, headers, private body)
//!
//! post-receive:
//!     RequestDescriptor + ResponseMeta + body + error
//!     → key.rs (same key from the *request* fields)
//!     → table.rs (take: one-shot lookup + remove)
//!     → timing.rs ("450 ms" / "1.234 s" / "unknown")
//!     → networking record (duration, URL, status, headers, body, error)
//!
//! background:
//!     sweeper.rs evicts entries whose response never arrived
//! ```
//!
//! # Design Decisions
//! - The pending table is owned by a NetworkLogger, never a process global
//! - The table lock covers only the map operation, never log emission
//! - Every optional input degrades the record; nothing is returned as an error

pub mod descriptor;
pub mod key;
pub mod network;
pub mod sweeper;
pub mod table;
pub mod timing;

pub use descriptor::{RequestDescriptor, ResponseMeta};
pub use key::{generate_key, CorrelationKey};
pub use network::{NetworkLogger, RoundTrip};
pub use sweeper::{spawn_sweeper, SweeperHandle};
pub use table::PendingTable;
pub use timing::{format_elapsed, log_timestamp, UNKNOWN_DURATION};
