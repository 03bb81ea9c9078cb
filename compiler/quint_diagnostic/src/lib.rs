//! Diagnostics for the Quint front end.
//!
//! - Error codes for searchability (`QNT007`, ...)
//! - Clear messages (what went wrong)
//! - The offending node's identifier (where it went wrong; resolve through
//!   the `SourceMap` for a location)
//! - Notes (why it's wrong)
//!
//! Diagnostics never stop lowering. They are gathered by a
//! [`DiagnosticCollector`] and returned next to the IR.

mod collector;
mod diagnostic;
mod error_code;

pub use collector::DiagnosticCollector;
pub use diagnostic::{
    leaked_stack_elements, lowercase_type_name, multiple_record_spreads, Diagnostic, Severity,
};
pub use error_code::ErrorCode;
