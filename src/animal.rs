//! The shared animal record and the line every animal speaks.
//!
//! Every variant owns an [`AnimalState`]. The [`Animal`] trait supplies the
//! behavior once, against that state, so a variant only decides which values
//! go in at construction.

use std::fmt;
use std::io::Write;

use tracing::trace;

use crate::error::Result;

/// Renders the fixed line format: `"<sound> I like to <habit>."`
pub fn render(sound: &str, habit: &str) -> String {
    format!("{sound} I like to {habit}.")
}

/// Habit and sound of one animal.
///
/// `habit` is public through [`Animal::set_habit`]. `sound` can only be set
/// from inside this crate, by the variant constructors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimalState {
    habit: String,
    sound: String,
}

impl AnimalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn habit(&self) -> &str {
        &self.habit
    }

    pub fn sound(&self) -> &str {
        &self.sound
    }

    pub fn set_habit(&mut self, habit: impl Into<String>) {
        self.habit = habit.into();
    }

    pub(crate) fn set_sound(&mut self, sound: impl Into<String>) {
        self.sound = sound.into();
    }
}

impl fmt::Display for AnimalState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render(&self.sound, &self.habit))
    }
}

pub trait Animal {
    fn state(&self) -> &AnimalState;

    fn state_mut(&mut self) -> &mut AnimalState;

    fn habit(&self) -> &str {
        self.state().habit()
    }

    fn set_habit(&mut self, habit: &str) {
        self.state_mut().set_habit(habit);
    }

    /// The line `tick` would print, without the trailing newline.
    fn line(&self) -> String {
        let state = self.state();
        render(state.sound(), state.habit())
    }

    /// Writes the line plus a newline to `out`.
    fn tick_into(&self, out: &mut dyn Write) -> Result<()> {
        let line = self.line();
        trace!(%line, "tick");
        writeln!(out, "{line}")?;
        Ok(())
    }

    fn tick(&self) {
        println!("{}", self.line());
    }
}

// The bare base animal: empty habit, empty sound.
impl Animal for AnimalState {
    fn state(&self) -> &AnimalState {
        self
    }

    fn state_mut(&mut self) -> &mut AnimalState {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticked(animal: &dyn Animal) -> String {
        let mut out = Vec::new();
        animal.tick_into(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_format() {
        assert_eq!(render("Woof", "dig"), "Woof I like to dig.");
        assert_eq!(render("", ""), " I like to .");
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = AnimalState::new();
        assert_eq!(state.habit(), "");
        assert_eq!(state.sound(), "");
        assert_eq!(state, AnimalState::default());
    }

    #[test]
    fn test_base_animal_ticks_with_empty_fields() {
        let animal = AnimalState::new();
        assert_eq!(ticked(&animal), " I like to .\n");
    }

    #[test]
    fn test_set_habit_round_trip() {
        let mut animal = AnimalState::new();
        Animal::set_habit(&mut animal, "swim");
        assert_eq!(Animal::habit(&animal), "swim");

        Animal::set_habit(&mut animal, "");
        assert_eq!(Animal::habit(&animal), "");
    }

    #[test]
    fn test_line_follows_current_state() {
        let mut animal = AnimalState::new();
        animal.set_sound("Hiss");
        animal.set_habit("hide");
        assert_eq!(animal.line(), "Hiss I like to hide.");
        assert_eq!(animal.to_string(), animal.line());

        animal.set_habit("sleep");
        assert_eq!(ticked(&animal), "Hiss I like to sleep.\n");
    }
}
