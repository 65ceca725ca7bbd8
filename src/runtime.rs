//! Runtime context handed to every operation.

use crate::config::RtagConfig;
use crate::i18n::{self, Messages};
use crate::cli::OutputManager;
use crate::store::TagStore;

/// Resolved configuration plus the output channel and message table
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    config: RtagConfig,
    output: OutputManager,
    messages: &'static Messages,
}

impl RuntimeConfig {
    /// Create a runtime context printing to the terminal
    pub fn new(config: RtagConfig) -> Self {
        Self::with_output(config, OutputManager::new(false))
    }

    /// Create a runtime context that only prints errors
    pub fn quiet(config: RtagConfig) -> Self {
        Self::with_output(config, OutputManager::new(true))
    }

    fn with_output(config: RtagConfig, output: OutputManager) -> Self {
        let messages = i18n::messages(config.language);
        Self {
            config,
            output,
            messages,
        }
    }

    /// Resolved configuration
    pub fn config(&self) -> &RtagConfig {
        &self.config
    }

    /// Message table for the active language
    pub fn messages(&self) -> &'static Messages {
        self.messages
    }

    /// Tag store at the configured path
    pub fn store(&self) -> TagStore {
        TagStore::new(&self.config.store_path)
    }

    /// Print message
    pub fn println(&self, message: &str) {
        let _ = self.output.println(message);
    }

    /// Print error message (always shown)
    pub fn error_println(&self, message: &str) {
        self.output.error(message);
    }

    /// Print warning message
    pub fn warning_println(&self, message: &str) {
        let _ = self.output.warn(message);
    }

    /// Print success message
    pub fn success_println(&self, message: &str) {
        let _ = self.output.success(message);
    }

    /// Print info message
    pub fn info_println(&self, message: &str) {
        let _ = self.output.info(message);
    }

    /// Print a list item
    pub fn indent(&self, message: &str) {
        let _ = self.output.indent(message);
    }

    /// Print a prompt and flush stdout
    pub fn prompt(&self, message: &str) {
        let _ = self.output.prompt(message);
    }
}
