#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected a calorie count, got {value:?}")]
    MalformedItem {
        line: usize,
        value: String,
        #[source]
        source: nom::error::Error<String>,
    },

    #[error("asked for the top {requested} elves but there are only {available}")]
    TooFewGroups { requested: usize, available: usize },

    #[error("no elves in input")]
    NoGroups,
}
