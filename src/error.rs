use thiserror::Error;

/// Top-level error type for the plotgeo kernel.
#[derive(Debug, Error)]
pub enum PlotgeoError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Precondition violations on geometric values.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("polygon has no lines")]
    EmptyPolygon,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised while reading path commands or SVG path data.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("unknown path command '{0}'")]
    UnknownCommand(char),

    #[error("invalid number at offset {offset}")]
    InvalidNumber { offset: usize },

    #[error("path command '{command}' is missing arguments")]
    MissingArguments { command: char },

    #[error("path draws before any move-to")]
    MissingMoveTo,
}

/// Errors related to kernel operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("polygon has {edges} edges, limit is {limit}")]
    TooManyEdges { edges: usize, limit: usize },

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`PlotgeoError`].
pub type Result<T> = std::result::Result<T, PlotgeoError>;
