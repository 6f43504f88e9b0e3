use pathviz_core::Cell;

/// Why a run could not be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRun {
    #[error("no start cell is set")]
    MissingStart,
    #[error("no end cell is set")]
    MissingEnd,
    #[error("start cell {0} is outside the grid")]
    StartOutOfBounds(Cell),
    #[error("end cell {0} is outside the grid")]
    EndOutOfBounds(Cell),
    #[error("start cell {0} is an obstacle")]
    StartBlocked(Cell),
    #[error("end cell {0} is an obstacle")]
    EndBlocked(Cell),
}

/// Errors reported by [`SearchEngine`](crate::SearchEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The run configuration is unusable; fix it and start again.
    #[error("invalid run: {0}")]
    InvalidRun(#[from] InvalidRun),
}
