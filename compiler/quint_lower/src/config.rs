//! Lowering session configuration.

use quint_ir::Registry;

/// Options for one lowering session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoweringConfig {
    /// First identifier issued by the session's registry.
    pub first_id: u64,
    /// Warn about components left on the stacks when a module completes.
    pub check_stack_leaks: bool,
}

impl Default for LoweringConfig {
    fn default() -> Self {
        LoweringConfig {
            first_id: Registry::FIRST_ID,
            check_stack_leaks: true,
        }
    }
}

impl LoweringConfig {
    /// Continue numbering after `last_id`, e.g. across REPL inputs.
    #[must_use]
    pub fn continuing_after(mut self, last_id: u64) -> Self {
        self.first_id = last_id.saturating_add(1);
        self
    }

    #[must_use]
    pub fn with_leak_check(mut self, enabled: bool) -> Self {
        self.check_stack_leaks = enabled;
        self
    }
}
