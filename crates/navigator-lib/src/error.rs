use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the Navigator library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A graph mutation referenced a node that is not part of the graph.
    #[error("node {id} does not exist in the graph")]
    MissingNode { id: String },

    /// Raised when extracting from an empty priority queue.
    #[error("cannot extract from an empty heap")]
    EmptyHeap,

    /// Raised when decreasing the priority of a key that is not queued.
    #[error("key {key} not found in the heap")]
    KeyNotFound { key: String },

    /// Raised when a location name could not be resolved against the graph.
    #[error("unknown location: {name}{}", format_suggestions(.suggestions))]
    UnknownNode {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route could be found between two locations.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when an algorithm name is not recognised.
    #[error("unsupported algorithm {name}; expected 'bfs' or 'dijkstra'")]
    UnsupportedAlgorithm { name: String },

    /// Raised when a computed route plan lacks any steps.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Dataset file could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the default data directory")]
    ProjectDirsUnavailable,

    /// An edge record did not contain `from,to,weight`.
    #[error("malformed edge on line {line}: {content}")]
    MalformedEdge { line: u64, content: String },

    /// An edge weight was not a non-negative integer.
    #[error("invalid weight '{value}' on line {line}")]
    InvalidWeight { line: u64, value: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_node_without_suggestions() {
        let err = Error::UnknownNode {
            name: "Mordor".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown location: Mordor");
    }

    #[test]
    fn unknown_node_lists_suggestions() {
        let err = Error::UnknownNode {
            name: "Rivendel".to_string(),
            suggestions: vec!["Rivendell".to_string(), "Rohan".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown location: Rivendel. Did you mean one of: 'Rivendell', 'Rohan'?"
        );
    }
}
