use thiserror::Error;

/// Errors raised while scoring Pokémon against the type chart.
///
/// `UnknownType` is a per-entity failure that the run counts before moving on to the next entry.
/// `EmptyTypeChart` is raised while building the type chart during setup and aborts the run.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The record has a type that the type chart does not know about.
    ///
    /// Usually means the type chart cache predates a catalog update; rerun with
    /// `--refresh-cache` to rebuild it.
    #[error("Type {type_name:?} is missing from the type chart")]
    UnknownType { type_name: String },
    /// The type list endpoint returned no battle types, so nothing can be scored.
    #[error("Type chart is empty, the catalog returned no battle types")]
    EmptyTypeChart,
}
