//! Quint front end: syntax tree to IR lowering.
//!
//! The parser driver walks a concrete syntax tree bottom-up and reports each
//! completed [`Construct`]. The engine reduces constructs one at a time
//! against per-category stacks of already-lowered children, desugaring as it
//! goes, and produces:
//!
//! - the lowered [`Module`](quint_ir::Module)s, declarations in source order
//! - a [`SourceMap`](quint_ir::SourceMap) entry for every identifier issued
//! - structural [`Diagnostic`](quint_diagnostic::Diagnostic)s
//! - [`RecoveryNote`]s describing how malformed input was patched up
//!
//! Lowering never fails. A broken tree yields placeholders and notes, so
//! later phases can still analyse the rest of the module.
//!
//! # Sessions
//!
//! A session is one [`LoweringState`]: one registry, one set of stacks.
//! Sessions share nothing, so independent inputs can be lowered in
//! parallel with [`lower_parallel`].
//!
//! # Tracing
//!
//! Recovery events log at `debug`, every reduction at `trace`, stack leaks
//! at `warn`. Call [`init_tracing`] and set `RUST_LOG=quint_lower=debug`.

mod config;
mod construct;
mod desugar;
mod docs;
mod lower;
mod recovery;
mod result;
mod stacks;
pub mod testing;
mod validate;

use std::sync::Once;

use rayon::prelude::*;

pub use config::LoweringConfig;
pub use construct::{Construct, ConstructKind};
pub use lower::LoweringState;
pub use recovery::{RecoveryNote, RecoveryReason, RECOVERED_NAME};
pub use result::LoweringResult;
pub use stacks::StackCategory;
pub use validate::{validate, ValidationError};

/// Lower one session's construct stream.
pub fn lower(
    config: LoweringConfig,
    constructs: impl IntoIterator<Item = Construct>,
) -> LoweringResult {
    let mut state = LoweringState::new(config);
    for construct in constructs {
        state.reduce(&construct);
    }
    state.finish()
}

/// Lower independent construct streams concurrently.
///
/// Every stream is its own session with its own identifier numbering
/// starting at `config.first_id`; results come back in input order and
/// match what [`lower`] produces for each stream.
pub fn lower_parallel(
    config: &LoweringConfig,
    streams: Vec<Vec<Construct>>,
) -> Vec<LoweringResult> {
    streams
        .into_par_iter()
        .map(|stream| lower(config.clone(), stream))
        .collect()
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_runs_once() {
        init_tracing();
        init_tracing();
        assert!(TRACING_INIT.is_completed());
    }
}
