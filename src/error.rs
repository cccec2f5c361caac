use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutomatonError {
    #[error("failed to read the automaton description at `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("the automaton description is malformed")]
    Malformed(#[from] serde_json::Error),
}
