//! Centralized reader for PR_THREADS_* environment variables.
//!
//! Environment variable names are defined as private constants here;
//! external code accesses values through the `EnvVars` struct.

const LOG: &str = "PR_THREADS_LOG";

/// Snapshot of all PR_THREADS_* environment variables at load time.
pub struct EnvVars {
    /// Tracing filter directive, e.g. "debug" or "pr_threads=trace".
    pub log_filter: Option<String>,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvVars {
    /// Read all PR_THREADS_* environment variables from the current process.
    pub fn load() -> Self {
        Self {
            log_filter: non_empty_var(LOG),
        }
    }
}
