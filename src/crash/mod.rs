//! Crash capture.
//!
//! # Data Flow
//! ```text
//! panic (any thread)
//!     → hook.rs (panic hook: message, location, backtrace)
//!     → FatalEvent
//!     → FatalEventObserver::on_fatal
//!         → CrashLogger (one Fault record, category `crash`)
//!     → previous hook (default: print to stderr)
//!     → normal unwinding / abort continues
//!
//! fatal OS signal (wired by the embedding application)
//!     → FatalEvent::from_signal → same observer
//! ```
//!
//! # Design Decisions
//! - Observation only: nothing here recovers or suppresses a crash
//! - Signal registration stays with the application; handlers for
//!   SIGSEGV and friends have constraints only it can satisfy

pub mod hook;
pub mod observer;

pub use hook::install_panic_hook;
pub use observer::{CrashLogger, FatalCause, FatalEvent, FatalEventObserver, FATAL_SIGNALS};
