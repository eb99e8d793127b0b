use crate::model::PatternId;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_ROOT: &str = "sample_output";

/// Runtime settings for a session. Nothing is read from disk; the binary fills this in
/// from its command-line flags and falls back to [`Default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestratorConfig {
    /// Directory under which each solution gets its own timestamped folder
    pub output_root: PathBuf,

    /// Pattern used for generation
    pub pattern: PatternId,

    /// Emit debug-level diagnostics
    pub verbose: bool,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            pattern: PatternId::ExpenseApproval,
            verbose: false,
        }
    }
}

impl OrchestratorConfig {
    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OrchestratorConfig::default();
        assert_eq!(config.output_root, PathBuf::from("sample_output"));
        assert_eq!(config.pattern, PatternId::ExpenseApproval);
        assert!(!config.verbose);
    }

    #[test]
    fn test_builders() {
        let config = OrchestratorConfig::default()
            .with_output_root("/tmp/out")
            .with_verbose(true);
        assert_eq!(config.output_root, PathBuf::from("/tmp/out"));
        assert!(config.verbose);
    }
}
