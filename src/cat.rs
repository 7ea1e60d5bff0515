use tracing::debug;

use crate::animal::{Animal, AnimalState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cat {
    state: AnimalState,
}

impl Cat {
    pub fn new() -> Self {
        let mut state = AnimalState::new();
        state.set_habit("crawl");
        state.set_sound("Meow");
        debug!(habit = state.habit(), sound = state.sound(), "built cat");
        Self { state }
    }
}

impl Default for Cat {
    fn default() -> Self {
        Self::new()
    }
}

impl Animal for Cat {
    fn state(&self) -> &AnimalState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut AnimalState {
        &mut self.state
    }
}

/// A `Cat` that would rather play. Keeps the cat's sound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfulCat {
    cat: Cat,
}

impl PlayfulCat {
    pub fn new() -> Self {
        let mut cat = Cat::new();
        cat.set_habit("play");
        debug!(habit = cat.habit(), "built playful cat");
        Self { cat }
    }

    /// The playful cat seen as a plain `Cat`.
    pub fn as_cat(&self) -> &Cat {
        &self.cat
    }
}

impl Default for PlayfulCat {
    fn default() -> Self {
        Self::new()
    }
}

impl Animal for PlayfulCat {
    fn state(&self) -> &AnimalState {
        self.cat.state()
    }

    fn state_mut(&mut self) -> &mut AnimalState {
        self.cat.state_mut()
    }
}
