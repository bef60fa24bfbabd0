use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("duplicate key in union-find: {label}")]
    DuplicateKey { label: String },

    #[error("unknown key in union-find: {label}")]
    UnknownKey { label: String },

    #[error(transparent)]
    Graph(#[from] wayfind_graphlib::Error),

    #[error("missing heuristic estimate for ({from}, {to})")]
    MissingHeuristic { from: String, to: String },

    #[error("{origin}:{line}: {message}")]
    Parse {
        origin: String,
        line: usize,
        message: String,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "no spanning tree exists: {vertices} vertices in {components} disconnected components"
    )]
    Disconnected { vertices: usize, components: usize },
}
