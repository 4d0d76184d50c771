use std::fmt;

/// Identifier of a node in the story graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioId {
    Start,
    Room,
    Corridor,
    BrightRoom,
    LockedDoor,
    KeyTaken,
}

impl ScenarioId {
    pub const ALL: [ScenarioId; 6] = [
        ScenarioId::Start,
        ScenarioId::Room,
        ScenarioId::Corridor,
        ScenarioId::BrightRoom,
        ScenarioId::LockedDoor,
        ScenarioId::KeyTaken,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScenarioId::Start => "start",
            ScenarioId::Room => "room",
            ScenarioId::Corridor => "corridor",
            ScenarioId::BrightRoom => "brightRoom",
            ScenarioId::LockedDoor => "lockedDoor",
            ScenarioId::KeyTaken => "keyTaken",
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Item {
    Key,
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Key => f.write_str("key"),
        }
    }
}

/// Colour class of a narration line. The renderer decides what it looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Good,
    Bad,
}

/// One line of narration printed after a choice is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub tone: Tone,
    pub text: &'static str,
}

impl Line {
    pub const fn info(text: &'static str) -> Self {
        Self { tone: Tone::Info, text }
    }

    pub const fn good(text: &'static str) -> Self {
        Self { tone: Tone::Good, text }
    }

    pub const fn bad(text: &'static str) -> Self {
        Self { tone: Tone::Bad, text }
    }
}

/// What selecting a choice does. Effects are plain data; `effect::resolve`
/// turns one into narration plus a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Narrate and move on.
    Goto { line: Line, to: ScenarioId },
    /// Pick up an item, narrate and move on.
    Take {
        line: Line,
        item: Item,
        to: ScenarioId,
    },
    /// Win if `requires` is held, otherwise take damage and fall back to `retreat`.
    Unlock {
        requires: Item,
        opened: Line,
        refused: Line,
        retreat: ScenarioId,
    },
    /// Always take damage and fall back to `retreat`.
    Force { line: Line, retreat: ScenarioId },
    /// Leave the game immediately.
    Quit { line: Line },
}

impl Effect {
    /// Scenario this effect can lead to, if any.
    pub fn target(&self) -> Option<ScenarioId> {
        match self {
            Effect::Goto { to, .. } | Effect::Take { to, .. } => Some(*to),
            Effect::Unlock { retreat, .. } | Effect::Force { retreat, .. } => Some(*retreat),
            Effect::Quit { .. } => None,
        }
    }
}

/// A player-selectable option. The label is display text only; dispatch goes
/// by position in the scenario's choice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: &'static str,
    pub effect: Effect,
}

impl Choice {
    pub fn new(label: &'static str, effect: Effect) -> Self {
        Self { label, effect }
    }
}

#[derive(Debug, Clone)]
pub struct Scenario {
    pub id: ScenarioId,
    /// Presentation order only.
    pub choices: Vec<Choice>,
}
