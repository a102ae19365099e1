use thiserror::Error;

/// Convenient result alias for the flight route library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the dataset stream yields no lines at all, not even a header.
    #[error("routes dataset is empty")]
    EmptyDataset,

    /// Raised when every data row was rejected and the graph holds no edges.
    #[error("no routes admitted from dataset ({skipped} rows skipped)")]
    NoRoutesAdmitted { skipped: usize },

    /// Raised when a queried airport code does not exist in the graph.
    #[error("unknown airport code: {code}")]
    UnknownAirport { code: String },

    /// Raised when no route could be found between two airports.
    #[error("no route found between {from} and {to}")]
    RouteNotFound { from: String, to: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
