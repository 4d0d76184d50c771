pub mod effect;
pub mod graph;
pub mod scenario;
pub mod state;

use std::io::Write;

use anyhow::{bail, Result};
use log::{debug, info, warn};

use crate::prompt::Prompter;
use crate::render::Renderer;
use effect::{resolve, Resolution, Transition};
use graph::ScenarioGraph;
use scenario::{Choice, ScenarioId};
use state::{PlayerState, Rules};

const MENU_MESSAGE: &str = "What do you do?";
const REPLAY_MESSAGE: &str = "Do you want to play again?";

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The door was opened with the key.
    Win,
    /// The player picked "Exit".
    Exit,
    /// The player died and declined to play again.
    Declined,
}

/// Outcome of a single round, from `start` to a terminal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundOutcome {
    Win,
    Exit,
    GameOver,
}

/// Map a raw answer to a choice index. Answers are 1-based menu numbers.
pub fn resolve_selection(answer: &str, choices: &[Choice]) -> Option<usize> {
    let n: usize = answer.trim().parse().ok()?;
    (1..=choices.len()).contains(&n).then(|| n - 1)
}

/// Apply the `index`-th choice of scenario `id`. `None` if there is no such choice,
/// in which case `player` is untouched.
pub fn step(
    graph: &ScenarioGraph,
    player: &mut PlayerState,
    id: ScenarioId,
    index: usize,
) -> Option<Resolution> {
    let choice = graph.choices(id).get(index)?;
    Some(resolve(&choice.effect, player))
}

// ---------------------------------------------------------------------------
// Single game round
// ---------------------------------------------------------------------------

fn play_round<P: Prompter, W: Write>(
    graph: &ScenarioGraph,
    player: &mut PlayerState,
    prompter: &mut P,
    renderer: &mut Renderer<W>,
) -> Result<RoundOutcome> {
    let mut current = graph.start;
    info!("Round started at {current} ({player})");

    loop {
        let choices = graph.choices(current);
        let labels: Vec<&str> = choices.iter().map(|c| c.label).collect();
        let answer = prompter.select(MENU_MESSAGE, &labels)?;

        let Some(index) = resolve_selection(&answer, choices) else {
            warn!("Invalid selection {answer:?} at {current}");
            renderer.invalid_choice()?;
            continue;
        };

        let Some(resolution) = step(graph, player, current, index) else {
            bail!("choice {index} out of range for {current}");
        };
        debug!("{current}[{index}] resolved to {resolution:?}");

        for narration in &resolution.narration {
            renderer.narrate(narration)?;
        }

        match resolution.next {
            Transition::Scene(next) => {
                info!("Transition: {current} -> {next} (health={})", player.health);
                current = next;
            }
            Transition::Win => {
                info!("Player won at {current}");
                return Ok(RoundOutcome::Win);
            }
            Transition::GameOver => {
                info!("Player died at {current}");
                return Ok(RoundOutcome::GameOver);
            }
            Transition::Exit => {
                info!("Player exited at {current}");
                return Ok(RoundOutcome::Exit);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry point — plays rounds until the session ends
// ---------------------------------------------------------------------------

pub fn run<P: Prompter, W: Write>(
    graph: &ScenarioGraph,
    rules: &Rules,
    prompter: &mut P,
    renderer: &mut Renderer<W>,
) -> Result<Ending> {
    let mut player = PlayerState::new(rules);
    renderer.welcome()?;

    loop {
        match play_round(graph, &mut player, prompter, renderer)? {
            RoundOutcome::Win => return Ok(Ending::Win),
            RoundOutcome::Exit => return Ok(Ending::Exit),
            RoundOutcome::GameOver => {
                renderer.game_over()?;
                if !prompter.confirm(REPLAY_MESSAGE)? {
                    renderer.farewell()?;
                    return Ok(Ending::Declined);
                }
                player.reset_for_replay(rules);
                info!("Player chose to replay with health={}", player.health);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use anyhow::anyhow;

    use super::*;
    use crate::game::graph::the_adventure;
    use crate::game::scenario::Item;

    /// Plays back canned answers and records every menu it was shown.
    #[derive(Default)]
    struct Script {
        answers: VecDeque<&'static str>,
        confirms: VecDeque<bool>,
        menus: Vec<Vec<String>>,
        confirm_count: usize,
    }

    impl Script {
        fn new(answers: &[&'static str], confirms: &[bool]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                confirms: confirms.iter().copied().collect(),
                ..Self::default()
            }
        }

        fn exhausted(&self) -> bool {
            self.answers.is_empty() && self.confirms.is_empty()
        }
    }

    impl Prompter for Script {
        fn select(&mut self, _message: &str, options: &[&str]) -> Result<String> {
            self.menus
                .push(options.iter().map(|s| s.to_string()).collect());
            self.answers
                .pop_front()
                .map(str::to_string)
                .ok_or_else(|| anyhow!("script ran out of answers"))
        }

        fn confirm(&mut self, _message: &str) -> Result<bool> {
            self.confirm_count += 1;
            self.confirms
                .pop_front()
                .ok_or_else(|| anyhow!("script ran out of confirmations"))
        }
    }

    fn play(script: &mut Script) -> (Result<Ending>, String) {
        let mut renderer = Renderer::new(Vec::new(), Rules::default().max_health);
        let ending = run(&the_adventure(), &Rules::default(), script, &mut renderer);
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        (ending, out)
    }

    // start -> room -> corridor
    const TO_CORRIDOR: [&str; 2] = ["1", "1"];

    #[test]
    fn selection_is_one_based_and_bounded() {
        let graph = the_adventure();
        let choices = graph.choices(ScenarioId::Corridor);
        assert_eq!(resolve_selection("1", choices), Some(0));
        assert_eq!(resolve_selection(" 4 ", choices), Some(3));
        assert_eq!(resolve_selection("0", choices), None);
        assert_eq!(resolve_selection("5", choices), None);
        assert_eq!(resolve_selection("Exit", choices), None);
        assert_eq!(resolve_selection("", choices), None);
    }

    #[test]
    fn step_rejects_out_of_range_without_touching_state() {
        let graph = the_adventure();
        let mut player = PlayerState::new(&Rules::default());
        let before = player.clone();
        assert_eq!(step(&graph, &mut player, ScenarioId::LockedDoor, 2), None);
        assert_eq!(player, before);

        let resolution = step(&graph, &mut player, ScenarioId::Start, 0).unwrap();
        assert_eq!(resolution.next, Transition::Scene(ScenarioId::Room));
    }

    #[test]
    fn invalid_answers_repeat_the_same_menu() {
        let mut script = Script::new(&["1", "nope", "7", "0", "1", "4"], &[]);
        let (ending, out) = play(&mut script);

        assert_eq!(ending.unwrap(), Ending::Exit);
        assert_eq!(
            out.matches("Invalid choice! Please select a valid option.")
                .count(),
            3
        );
        // menus[1..5] are the room menu, re-shown after each bad answer
        let room = &script.menus[1];
        assert_eq!(room.len(), 2);
        for menu in &script.menus[2..5] {
            assert_eq!(menu, room);
        }
        assert!(out.contains("Exiting game..."));
    }

    #[test]
    fn key_then_door_wins() {
        // corridor -> brightRoom -> take key -> keyTaken -> corridor -> lockedDoor -> unlock
        let mut script = Script::new(&["1", "1", "1", "1", "1", "2", "1"], &[]);
        let (ending, out) = play(&mut script);

        assert_eq!(ending.unwrap(), Ending::Win);
        assert!(out.contains("You take the key."));
        assert!(out.contains("The door unlocks and you find a treasure chest! You win!"));
        assert!(!out.contains("You lost 1 health point"));
        assert!(script.exhausted());
        assert_eq!(script.confirm_count, 0);
    }

    /// corridor -> lockedDoor -> fail, five times over
    fn five_failures() -> Vec<&'static str> {
        let mut answers = TO_CORRIDOR.to_vec();
        for i in 0..5 {
            answers.push("2");
            answers.push(if i % 2 == 0 { "1" } else { "2" });
        }
        answers
    }

    #[test]
    fn game_over_on_the_fifth_failure_then_decline() {
        let mut script = Script::new(&five_failures(), &[false]);
        let (ending, out) = play(&mut script);

        assert_eq!(ending.unwrap(), Ending::Declined);
        assert_eq!(out.matches("You lost 1 health point").count(), 5);
        assert_eq!(out.matches("Game Over!").count(), 1);
        assert!(out.contains("Thanks for playing!"));
        // No prompt after declining.
        assert!(script.exhausted());
        assert_eq!(script.confirm_count, 1);
        assert_eq!(script.menus.len(), 12);
    }

    #[test]
    fn failures_without_death_go_back_to_the_corridor() {
        let graph = the_adventure();
        let mut player = PlayerState::new(&Rules::default());
        for expected in (1..5).rev() {
            let resolution = step(&graph, &mut player, ScenarioId::LockedDoor, 1).unwrap();
            assert_eq!(player.health, expected);
            assert_eq!(resolution.next, Transition::Scene(ScenarioId::Corridor));
        }
        let resolution = step(&graph, &mut player, ScenarioId::LockedDoor, 0).unwrap();
        assert_eq!(player.health, 0);
        assert_eq!(resolution.next, Transition::GameOver);
    }

    #[test]
    fn replay_restarts_at_start_with_four_health() {
        let mut answers = five_failures();
        // Second round: four more failures are enough to die again.
        answers.extend(TO_CORRIDOR);
        for _ in 0..4 {
            answers.extend(["2", "2"]);
        }
        let mut script = Script::new(&answers, &[true, false]);
        let (ending, out) = play(&mut script);

        assert_eq!(ending.unwrap(), Ending::Declined);
        assert_eq!(out.matches("Game Over!").count(), 2);
        assert_eq!(out.matches("You lost 1 health point").count(), 9);

        let start_menu = the_adventure()
            .choices(ScenarioId::Start)
            .iter()
            .map(|c| c.label.to_string())
            .collect::<Vec<_>>();
        // First menu after the replay is the start scenario.
        assert_eq!(script.menus[12], start_menu);
        assert!(script.exhausted());
    }

    #[test]
    fn replay_clears_the_key() {
        let rules = Rules::default();
        let graph = the_adventure();
        let mut player = PlayerState::new(&rules);
        step(&graph, &mut player, ScenarioId::BrightRoom, 0);
        assert!(player.has_item(Item::Key));

        player.reset_for_replay(&rules);
        assert_eq!(player.health, 4);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn closed_input_propagates() {
        let mut script = Script::new(&["1"], &[]);
        let (ending, _) = play(&mut script);
        assert!(ending.is_err());
    }
}
