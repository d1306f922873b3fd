use crate::config::Config;
use crate::core::diagnostics::Diagnostics;

/// Explicit per-run state handed to every stage instead of globals:
/// the loaded configuration and the issues collected so far.
#[derive(Debug, Default)]
pub struct RunContext {
    pub config: Config,
    pub diagnostics: Diagnostics,
}

impl RunContext {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            diagnostics: Diagnostics::new(),
        }
    }
}
