use thiserror::Error;

use crate::game::scenario::ScenarioId;

/// Defects in a scenario graph, caught by `ScenarioGraph::validate` before play starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("scenario '{0}' is missing from the graph")]
    MissingScenario(ScenarioId),

    #[error("scenario '{0}' has no choices")]
    NoChoices(ScenarioId),

    #[error("scenario '{scenario}' lists the choice \"{label}\" more than once")]
    DuplicateLabel {
        scenario: ScenarioId,
        label: &'static str,
    },

    #[error("a choice in '{from}' leads to '{to}', which is not in the graph")]
    DanglingTarget { from: ScenarioId, to: ScenarioId },
}
