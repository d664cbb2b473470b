use super::timeline::PanelSample;
use crate::config::REVEAL_STAGGER_MS;

// Play-on-enter, reverse-on-leave-back state for each panel's reveal group
#[derive(Clone, Debug, PartialEq)]
pub struct RevealTracker {
    revealed: Vec<bool>,
    has_text: Vec<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealChange {
    Play(usize),
    Reverse(usize),
}

impl RevealTracker {
    // reveal_counts[i] is the number of reveal-text elements panel i owns
    pub fn new(reveal_counts: &[usize]) -> Self {
        Self {
            revealed: vec![false; reveal_counts.len()],
            has_text: reveal_counts.iter().map(|&count| count > 0).collect(),
        }
    }

    #[cfg(test)]
    pub fn is_revealed(&self, panel: usize) -> bool {
        self.revealed.get(panel).copied().unwrap_or(false)
    }

    pub fn update(&mut self, panels: &[PanelSample]) -> Vec<RevealChange> {
        let mut changes = Vec::new();
        for (index, sample) in panels.iter().enumerate() {
            if !self.has_text.get(index).copied().unwrap_or(false) {
                continue;
            }
            if self.revealed[index] != sample.revealed {
                self.revealed[index] = sample.revealed;
                changes.push(if sample.revealed {
                    RevealChange::Play(index)
                } else {
                    RevealChange::Reverse(index)
                });
            }
        }
        changes
    }
}

pub fn stagger_delay_ms(index: usize) -> u32 {
    index as u32 * REVEAL_STAGGER_MS
}

// Reversing runs the stagger backwards: the last element of the group leaves first
pub fn reverse_stagger_delay_ms(index: usize, count: usize) -> u32 {
    let from_end = count.saturating_sub(index + 1);
    stagger_delay_ms(from_end)
}
