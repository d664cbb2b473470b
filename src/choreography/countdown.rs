use std::rc::Rc;

use yew::Reducible;

use crate::config::{COUNTDOWN_DONE_LABEL, COUNTDOWN_START};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

pub enum CountdownAction {
    Tick,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::starting_at(COUNTDOWN_START)
    }
}

impl Countdown {
    pub fn starting_at(remaining: u32) -> Self {
        Self { remaining }
    }

    #[cfg(test)]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    pub fn tick(self) -> Self {
        Self {
            remaining: self.remaining.saturating_sub(1),
        }
    }

    pub fn display(&self) -> String {
        if self.is_finished() {
            COUNTDOWN_DONE_LABEL.to_string()
        } else {
            self.remaining.to_string()
        }
    }
}

impl Reducible for Countdown {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CountdownAction::Tick if self.is_finished() => self,
            CountdownAction::Tick => Rc::new(self.tick()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_five() {
        let countdown = Countdown::default();
        assert_eq!(countdown.remaining(), 5);
        assert_eq!(countdown.display(), "5");
    }

    #[test]
    fn five_ticks_reach_the_terminal_label() {
        let mut countdown = Rc::new(Countdown::default());
        for expected in ["4", "3", "2", "1"] {
            countdown = countdown.reduce(CountdownAction::Tick);
            assert_eq!(countdown.display(), expected);
        }
        countdown = countdown.reduce(CountdownAction::Tick);
        assert!(countdown.is_finished());
        assert_eq!(countdown.display(), "ACTN");
    }

    #[test]
    fn stays_frozen_after_finishing() {
        let mut countdown = Rc::new(Countdown::starting_at(1));
        countdown = countdown.reduce(CountdownAction::Tick);
        let finished = countdown.clone();

        for _ in 0..10 {
            countdown = countdown.reduce(CountdownAction::Tick);
        }
        assert_eq!(countdown.remaining(), 0);
        assert_eq!(countdown.display(), "ACTN");
        // no new state is produced once frozen
        assert!(Rc::ptr_eq(&finished, &countdown));
    }
}
