use crate::game::scenario::{Effect, Line, ScenarioId};
use crate::game::state::PlayerState;

/// Something the renderer has to show after a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Narration {
    Say(Line),
    /// One health point lost; `remaining` is the new total.
    HealthLost { remaining: u8 },
}

/// Where play goes after a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Scene(ScenarioId),
    Win,
    GameOver,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub narration: Vec<Narration>,
    pub next: Transition,
}

/// Apply an effect to the player and describe the outcome. Player state is
/// the only thing touched.
pub fn resolve(effect: &Effect, player: &mut PlayerState) -> Resolution {
    match effect {
        Effect::Goto { line, to } => Resolution {
            narration: vec![Narration::Say(*line)],
            next: Transition::Scene(*to),
        },
        Effect::Take { line, item, to } => {
            player.add_item(*item);
            Resolution {
                narration: vec![Narration::Say(*line)],
                next: Transition::Scene(*to),
            }
        }
        Effect::Unlock {
            requires,
            opened,
            refused,
            retreat,
        } => {
            if player.has_item(*requires) {
                Resolution {
                    narration: vec![Narration::Say(*opened)],
                    next: Transition::Win,
                }
            } else {
                penalty(*refused, *retreat, player)
            }
        }
        Effect::Force { line, retreat } => penalty(*line, *retreat, player),
        Effect::Quit { line } => Resolution {
            narration: vec![Narration::Say(*line)],
            next: Transition::Exit,
        },
    }
}

fn penalty(line: Line, retreat: ScenarioId, player: &mut PlayerState) -> Resolution {
    let remaining = player.lose_health();
    let next = if player.is_dead() {
        Transition::GameOver
    } else {
        Transition::Scene(retreat)
    };
    Resolution {
        narration: vec![Narration::Say(line), Narration::HealthLost { remaining }],
        next,
    }
}
