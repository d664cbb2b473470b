pub mod countdown;
pub mod cursor;
pub mod mode;
pub mod reveal;
pub mod scrub;
pub mod sprockets;
pub mod timeline;

use cursor::{CursorState, CursorTween, Point};
use reveal::{RevealChange, RevealTracker};
use scrub::Scrub;
use timeline::{ScrollTimeline, TimelineSample};

use crate::config::{CURSOR_EASE_MS, SCRUB_LAG_MS};

#[derive(Clone, Debug, PartialEq)]
pub struct FrameUpdate {
    // scrollbar progress, drives the scrubber and REC counter
    pub progress: f64,
    pub frame_index: usize,
    // lagging track position, drives translation, parallax and reveals
    pub motion: TimelineSample,
    pub reveals: Vec<RevealChange>,
    pub cursor_position: Point,
    // only set when the hover state changed since the previous frame
    pub cursor_hover: Option<CursorHover>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CursorHover {
    pub hovered: bool,
    pub label: String,
}

pub struct Choreographer {
    timeline: ScrollTimeline,
    scrub: Scrub,
    reveals: RevealTracker,
    cursor: CursorState,
    tween: CursorTween,
    raw_offset: f64,
}

impl Choreographer {
    pub fn new(reveal_counts: &[usize], viewport_width: f64) -> Self {
        Self {
            timeline: ScrollTimeline::new(reveal_counts.len(), viewport_width),
            scrub: Scrub::new(0.0, SCRUB_LAG_MS),
            reveals: RevealTracker::new(reveal_counts),
            cursor: CursorState::default(),
            tween: CursorTween::new(CURSOR_EASE_MS),
            raw_offset: 0.0,
        }
    }

    #[cfg(test)]
    pub fn timeline(&self) -> &ScrollTimeline {
        &self.timeline
    }

    // offset is how far the page has scrolled past the top of the pinned region
    pub fn scroll_to(&mut self, offset: f64) {
        self.raw_offset = self.timeline.clamp_offset(offset);
        self.scrub.set_target(self.raw_offset);
    }

    // Places the track at offset without easing, for the first read of a session
    pub fn jump_to(&mut self, offset: f64) {
        self.raw_offset = self.timeline.clamp_offset(offset);
        self.scrub.reset(self.raw_offset);
    }

    // New geometry: the track jumps rather than easing across stale coordinates
    pub fn resize(&mut self, viewport_width: f64, offset: f64) {
        self.timeline.set_viewport_width(viewport_width);
        self.jump_to(offset);
    }

    pub fn pointer_moved(&mut self, to: Point, now: f64) {
        self.tween.retarget(to, now);
    }

    pub fn hover_enter(&mut self, label: Option<&str>) {
        self.cursor.enter(label);
    }

    pub fn hover_leave(&mut self) {
        self.cursor.leave();
    }

    pub fn tick(&mut self, now: f64) -> FrameUpdate {
        let progress = self.timeline.progress(self.raw_offset);
        let smoothed = self.scrub.tick(now);
        let motion = self.timeline.sample(smoothed);
        let reveals = self.reveals.update(&motion.panels);

        let cursor_hover = self.cursor.take_dirty().then(|| CursorHover {
            hovered: self.cursor.is_hovered(),
            label: self.cursor.label().to_string(),
        });

        FrameUpdate {
            progress,
            frame_index: self.timeline.frame_index(progress),
            motion,
            reveals,
            cursor_position: self.tween.tick(now),
            cursor_hover,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f64 = 1000.0;

    fn choreographer() -> Choreographer {
        Choreographer::new(&[0, 3, 0, 0, 0, 0], WIDTH)
    }

    fn run_until(choreographer: &mut Choreographer, from: f64, to: f64) -> FrameUpdate {
        let mut now = from;
        let mut update = choreographer.tick(now);
        while now < to {
            now += 16.0;
            update = choreographer.tick(now);
        }
        update
    }

    #[test]
    fn indicators_follow_the_scrollbar_immediately() {
        let mut choreographer = choreographer();
        choreographer.tick(0.0);
        choreographer.scroll_to(2500.0);

        let update = choreographer.tick(16.0);
        assert_eq!(update.progress, 0.5);
        assert_eq!(update.frame_index, 4);
        assert!(update.motion.offset < 2500.0);
    }

    #[test]
    fn track_catches_up_with_the_scrollbar() {
        let mut choreographer = choreographer();
        choreographer.scroll_to(5000.0);

        let update = run_until(&mut choreographer, 0.0, 3000.0);
        assert_eq!(update.motion.translate_x, -5000.0);
        assert_eq!(update.motion.frame_index, 6);
    }

    #[test]
    fn reveal_plays_once_and_reverses_on_the_way_back() {
        let mut choreographer = choreographer();
        choreographer.tick(0.0);

        choreographer.scroll_to(600.0);
        let mut played = Vec::new();
        let mut now = 0.0;
        while now < 3000.0 {
            now += 16.0;
            played.extend(choreographer.tick(now).reveals);
        }
        assert_eq!(played, vec![RevealChange::Play(1)]);

        choreographer.scroll_to(0.0);
        let mut reversed = Vec::new();
        while now < 6000.0 {
            now += 16.0;
            reversed.extend(choreographer.tick(now).reveals);
        }
        assert_eq!(reversed, vec![RevealChange::Reverse(1)]);
    }

    #[test]
    fn session_starting_mid_scroll_lands_on_the_scrolled_frame() {
        let mut choreographer = choreographer();
        choreographer.jump_to(4000.0);

        let first = choreographer.tick(0.0);
        assert_eq!(first.motion.offset, 4000.0);
        assert_eq!(first.motion.translate_x, -4000.0);
        assert_eq!(first.progress, 0.8);
        assert_eq!(first.frame_index, 5);
        assert_eq!(first.motion.frame_index, first.frame_index);
        // already past the hook, so its reveal plays at once
        assert_eq!(first.reveals, vec![RevealChange::Play(1)]);

        let later = choreographer.tick(300.0);
        assert_eq!(later.motion.offset, 4000.0);
        assert!(later.reveals.is_empty());
    }

    #[test]
    fn resize_jumps_to_the_new_geometry() {
        let mut choreographer = choreographer();
        choreographer.scroll_to(4000.0);
        choreographer.resize(800.0, 10_000.0);

        let update = choreographer.tick(0.0);
        assert_eq!(update.motion.offset, 4000.0);
        assert_eq!(update.progress, 1.0);
        assert_eq!(choreographer.timeline().scroll_distance(), 4000.0);
    }

    #[test]
    fn hover_is_reported_once_per_change() {
        let mut choreographer = choreographer();
        choreographer.hover_enter(Some("PLAY"));

        let update = choreographer.tick(0.0);
        assert_eq!(
            update.cursor_hover,
            Some(CursorHover {
                hovered: true,
                label: "PLAY".to_string()
            })
        );
        assert_eq!(choreographer.tick(16.0).cursor_hover, None);

        choreographer.hover_leave();
        let update = choreographer.tick(32.0);
        assert_eq!(
            update.cursor_hover,
            Some(CursorHover {
                hovered: false,
                label: String::new()
            })
        );
    }

    #[test]
    fn cursor_eases_to_the_pointer() {
        let mut choreographer = choreographer();
        choreographer.pointer_moved(Point::new(300.0, 200.0), 0.0);

        let early = choreographer.tick(20.0).cursor_position;
        assert!(early.x > 0.0 && early.x < 300.0);
        assert_eq!(choreographer.tick(120.0).cursor_position, Point::new(300.0, 200.0));
    }
}
