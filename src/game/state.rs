use std::fmt;

use crate::game::scenario::Item;

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Tunables for a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Health on the very first run.
    pub starting_health: u8,
    /// Health after accepting a replay. One less than the first run.
    pub replay_health: u8,
    /// Number of hearts drawn in the health bar.
    pub max_health: u8,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            starting_health: 5,
            replay_health: 4,
            max_health: 5,
        }
    }
}

// ---------------------------------------------------------------------------
// Player state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub health: u8,
    pub inventory: Vec<Item>,
}

impl PlayerState {
    pub fn new(rules: &Rules) -> Self {
        Self {
            health: rules.starting_health,
            inventory: Vec::new(),
        }
    }

    pub fn reset_for_replay(&mut self, rules: &Rules) {
        self.health = rules.replay_health;
        self.inventory.clear();
    }

    pub fn has_item(&self, item: Item) -> bool {
        self.inventory.contains(&item)
    }

    /// Add an item. Holding it already is a no-op.
    pub fn add_item(&mut self, item: Item) {
        if !self.has_item(item) {
            self.inventory.push(item);
        }
    }

    /// Take one point of damage and return what is left.
    pub fn lose_health(&mut self) -> u8 {
        self.health = self.health.saturating_sub(1);
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.inventory.iter().map(Item::to_string).collect();
        write!(f, "health={}, inventory=[{}]", self.health, items.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_run_and_replay_health_differ() {
        let rules = Rules::default();
        let mut state = PlayerState::new(&rules);
        assert_eq!(state.health, 5);
        assert!(state.inventory.is_empty());

        state.add_item(Item::Key);
        state.lose_health();
        state.reset_for_replay(&rules);
        assert_eq!(state.health, 4);
        assert!(state.inventory.is_empty());
    }

    #[test]
    fn adding_an_item_twice_keeps_one() {
        let mut state = PlayerState::new(&Rules::default());
        assert!(!state.has_item(Item::Key));

        state.add_item(Item::Key);
        state.add_item(Item::Key);
        assert!(state.has_item(Item::Key));
        assert_eq!(state.inventory, [Item::Key]);
    }

    #[test]
    fn health_bottoms_out_at_zero() {
        let mut state = PlayerState {
            health: 1,
            inventory: Vec::new(),
        };
        assert!(!state.is_dead());
        assert_eq!(state.lose_health(), 0);
        assert!(state.is_dead());
        assert_eq!(state.lose_health(), 0);
    }

    #[test]
    fn display_names_items() {
        let mut state = PlayerState::new(&Rules::default());
        assert_eq!(state.to_string(), "health=5, inventory=[]");

        state.add_item(Item::Key);
        assert_eq!(state.to_string(), "health=5, inventory=[key]");
    }
}
