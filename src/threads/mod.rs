mod format;
mod inventory;
pub(crate) mod models;

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use thiserror::Error;
use tracing::debug;

pub use format::write_inventory;
pub use inventory::{load_document, open_threads};

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Review thread #{index} is malformed")]
    MalformedThread {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Review thread #{index} is not outdated and has no isResolved flag")]
    MissingResolvedFlag { index: usize },

    #[error("Review thread {id} has no comments")]
    NoComments { id: String },
}

pub type Result<T> = std::result::Result<T, InventoryError>;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct InventoryArgs {
    /// Review threads JSON exported from the GitHub GraphQL API
    #[arg(value_name = "THREADS_JSON")]
    pub threads_json: PathBuf,

    /// Anything after the path is accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<OsString>,
}

pub fn run(args: &InventoryArgs) -> Result<()> {
    if !args.ignored.is_empty() {
        debug!(count = args.ignored.len(), "ignoring extra arguments");
    }

    let document = load_document(&args.threads_json)?;

    let mut stdout = io::stdout().lock();
    let written = write_inventory(&mut stdout, open_threads(&document));
    stdout.flush()?;

    written
}
