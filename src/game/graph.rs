use std::collections::{HashMap, HashSet};

use crate::error::GraphError;
use crate::game::scenario::{Choice, Effect, Item, Line, Scenario, ScenarioId};

/// The full story: a map of scenario id -> Scenario. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct ScenarioGraph {
    scenarios: HashMap<ScenarioId, Scenario>,
    pub start: ScenarioId,
}

impl ScenarioGraph {
    pub fn new(scenarios: Vec<Scenario>, start: ScenarioId) -> Self {
        let mut map = HashMap::new();
        for scenario in scenarios {
            map.insert(scenario.id, scenario);
        }
        Self {
            scenarios: map,
            start,
        }
    }

    pub fn get(&self, id: ScenarioId) -> Option<&Scenario> {
        self.scenarios.get(&id)
    }

    /// Ordered choices for a scenario. Empty only for a graph that failed
    /// `validate`.
    pub fn choices(&self, id: ScenarioId) -> &[Choice] {
        self.scenarios
            .get(&id)
            .map(|s| s.choices.as_slice())
            .unwrap_or(&[])
    }

    /// Scenario ids reachable in one step from `id`, in choice order.
    pub fn targets(&self, id: ScenarioId) -> Vec<ScenarioId> {
        self.choices(id)
            .iter()
            .filter_map(|c| c.effect.target())
            .collect()
    }

    /// Check that every scenario exists, has at least one choice, has unique
    /// labels, and only points at scenarios that exist.
    pub fn validate(&self) -> Result<(), GraphError> {
        for id in ScenarioId::ALL {
            let scenario = self.get(id).ok_or(GraphError::MissingScenario(id))?;
            if scenario.choices.is_empty() {
                return Err(GraphError::NoChoices(id));
            }

            let mut seen = HashSet::new();
            for choice in &scenario.choices {
                if !seen.insert(choice.label) {
                    return Err(GraphError::DuplicateLabel {
                        scenario: id,
                        label: choice.label,
                    });
                }
            }
            for to in self.targets(id) {
                if !self.scenarios.contains_key(&to) {
                    return Err(GraphError::DanglingTarget { from: id, to });
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// The Adventure
// ---------------------------------------------------------------------------

pub fn the_adventure() -> ScenarioGraph {
    let scenarios = vec![
        Scenario {
            id: ScenarioId::Start,
            choices: vec![Choice::new(
                "You wake up in a dark room. What do you do?",
                Effect::Goto {
                    line: Line::info("You're in a dark room."),
                    to: ScenarioId::Room,
                },
            )],
        },
        Scenario {
            id: ScenarioId::Room,
            choices: vec![
                Choice::new(
                    "You see a door. Do you open it?",
                    Effect::Goto {
                        line: Line::good("You open the door and find yourself in a corridor."),
                        to: ScenarioId::Corridor,
                    },
                ),
                Choice::new(
                    "You sit down and wait.",
                    Effect::Goto {
                        line: Line::bad("Nothing happens. You're still in the dark room."),
                        to: ScenarioId::Room,
                    },
                ),
            ],
        },
        Scenario {
            id: ScenarioId::Corridor,
            choices: vec![
                Choice::new(
                    "You see a staircase going up. Do you take it?",
                    Effect::Goto {
                        line: Line::good(
                            "You climb the stairs and find yourself in a bright room.",
                        ),
                        to: ScenarioId::BrightRoom,
                    },
                ),
                Choice::new(
                    "You see a hallway leading left. Do you go that way?",
                    Effect::Goto {
                        line: Line::good("You walk down the hallway and find a locked door."),
                        to: ScenarioId::LockedDoor,
                    },
                ),
                Choice::new(
                    "You go back to the room.",
                    Effect::Goto {
                        line: Line::info("You return to the dark room."),
                        to: ScenarioId::Room,
                    },
                ),
                Choice::new(
                    "Exit",
                    Effect::Quit {
                        line: Line::info("Exiting game..."),
                    },
                ),
            ],
        },
        Scenario {
            id: ScenarioId::BrightRoom,
            choices: vec![
                Choice::new(
                    "You see a key on the table. Do you take it?",
                    Effect::Take {
                        line: Line::good("You take the key."),
                        item: Item::Key,
                        to: ScenarioId::KeyTaken,
                    },
                ),
                Choice::new(
                    "You look out the window.",
                    Effect::Goto {
                        line: Line::good("You see a beautiful garden outside."),
                        to: ScenarioId::Corridor,
                    },
                ),
            ],
        },
        // The second door choice never looks at the inventory, whatever its
        // label says. Kept as authored.
        Scenario {
            id: ScenarioId::LockedDoor,
            choices: vec![
                Choice::new(
                    "You use the key to unlock the door.",
                    Effect::Unlock {
                        requires: Item::Key,
                        opened: Line::good(
                            "The door unlocks and you find a treasure chest! You win!",
                        ),
                        refused: Line::bad("You don't have the key."),
                        retreat: ScenarioId::Corridor,
                    },
                ),
                Choice::new(
                    "You try to open the door without a key.",
                    Effect::Force {
                        line: Line::bad("The door is locked."),
                        retreat: ScenarioId::Corridor,
                    },
                ),
            ],
        },
        Scenario {
            id: ScenarioId::KeyTaken,
            choices: vec![Choice::new(
                "You go back to the corridor.",
                Effect::Goto {
                    line: Line::info("You return to the corridor."),
                    to: ScenarioId::Corridor,
                },
            )],
        },
    ];

    ScenarioGraph::new(scenarios, ScenarioId::Start)
}
