#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTimeline {
    panel_count: usize,
    viewport_width: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineSample {
    pub offset: f64,
    pub translate_x: f64,
    pub progress: f64,
    // 1-based
    pub frame_index: usize,
    pub panels: Vec<PanelSample>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelSample {
    pub parallax: f64,
    pub revealed: bool,
}

impl ScrollTimeline {
    pub fn new(panel_count: usize, viewport_width: f64) -> Self {
        Self {
            panel_count: panel_count.max(1),
            viewport_width: viewport_width.max(0.0),
        }
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width.max(0.0);
    }

    pub fn scroll_distance(&self) -> f64 {
        (self.panel_count - 1) as f64 * self.viewport_width
    }

    pub fn clamp_offset(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.scroll_distance())
    }

    pub fn progress(&self, offset: f64) -> f64 {
        let distance = self.scroll_distance();
        if distance <= 0.0 {
            return 0.0;
        }
        (offset / distance).clamp(0.0, 1.0)
    }

    pub fn frame_index(&self, progress: f64) -> usize {
        frame_index(progress, self.panel_count)
    }

    // Drifts from when the panel's left edge meets the viewport's right edge
    // until its right edge passes the viewport's left edge
    pub fn parallax_progress(&self, panel: usize, offset: f64) -> f64 {
        let width = self.viewport_width;
        if width <= 0.0 {
            return 0.0;
        }
        let enters_at = (panel as f64 - 1.0) * width;
        ((offset - enters_at) / (2.0 * width)).clamp(0.0, 1.0)
    }

    pub fn reveal_trigger(&self, panel: usize) -> f64 {
        panel as f64 * self.viewport_width - self.viewport_width / 2.0
    }

    pub fn is_revealed(&self, panel: usize, offset: f64) -> bool {
        offset >= self.reveal_trigger(panel)
    }

    pub fn sample(&self, offset: f64) -> TimelineSample {
        let offset = self.clamp_offset(offset);
        let progress = self.progress(offset);

        let panels = (0..self.panel_count)
            .map(|panel| PanelSample {
                parallax: self.parallax_progress(panel, offset),
                revealed: self.is_revealed(panel, offset),
            })
            .collect();

        TimelineSample {
            offset,
            translate_x: -offset,
            progress,
            frame_index: self.frame_index(progress),
            panels,
        }
    }
}

// nearest panel, clamped to 1..=panel_count
pub fn frame_index(progress: f64, panel_count: usize) -> usize {
    let panel_count = panel_count.max(1);
    let steps = (panel_count - 1) as f64;
    let nearest = (progress.clamp(0.0, 1.0) * steps).round() as usize + 1;
    nearest.clamp(1, panel_count)
}

pub fn frame_label(index: usize) -> String {
    format!("{:03}", index)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f64 = 1440.0;

    fn timeline() -> ScrollTimeline {
        ScrollTimeline::new(6, WIDTH)
    }

    #[test]
    fn distance_is_one_viewport_per_extra_panel() {
        assert_eq!(timeline().scroll_distance(), 5.0 * WIDTH);
        assert_eq!(ScrollTimeline::new(1, WIDTH).scroll_distance(), 0.0);
    }

    #[test]
    fn frame_labels_at_known_progress() {
        assert_eq!(frame_label(frame_index(0.0, 6)), "001");
        assert_eq!(frame_label(frame_index(0.5, 6)), "004");
        assert_eq!(frame_label(frame_index(1.0, 6)), "006");
    }

    #[test]
    fn frame_index_is_clamped() {
        assert_eq!(frame_index(-0.3, 6), 1);
        assert_eq!(frame_index(1.7, 6), 6);
        assert_eq!(frame_index(0.5, 1), 1);
    }

    #[test]
    fn progress_and_frame_never_go_backwards() {
        let timeline = timeline();
        let max = timeline.scroll_distance();
        let mut last_progress = 0.0;
        let mut last_frame = 1;

        for step in 0..=500 {
            let sample = timeline.sample(max * step as f64 / 500.0);
            assert!(sample.progress >= last_progress);
            assert!(sample.frame_index >= last_frame);
            assert!((0.0..=1.0).contains(&sample.progress));
            assert!((1..=6).contains(&sample.frame_index));
            last_progress = sample.progress;
            last_frame = sample.frame_index;
        }

        assert_eq!(last_progress, 1.0);
        assert_eq!(last_frame, 6);
    }

    #[test]
    fn offsets_outside_the_pin_are_clamped() {
        let timeline = timeline();
        let before = timeline.sample(-200.0);
        assert_eq!(before.progress, 0.0);
        assert_eq!(before.translate_x, 0.0);

        let after = timeline.sample(timeline.scroll_distance() + 500.0);
        assert_eq!(after.progress, 1.0);
        assert_eq!(after.translate_x, -5.0 * WIDTH);
    }

    #[test]
    fn zero_width_viewport_stays_on_first_frame() {
        let sample = ScrollTimeline::new(6, 0.0).sample(300.0);
        assert_eq!(sample.progress, 0.0);
        assert_eq!(sample.frame_index, 1);
    }

    #[test]
    fn parallax_spans_the_viewport_crossing() {
        let timeline = timeline();
        // third panel: enters at 1W, leaves at 3W
        assert_eq!(timeline.parallax_progress(2, 0.0), 0.0);
        assert_eq!(timeline.parallax_progress(2, WIDTH), 0.0);
        assert_eq!(timeline.parallax_progress(2, 2.0 * WIDTH), 0.5);
        assert_eq!(timeline.parallax_progress(2, 3.0 * WIDTH), 1.0);
        assert_eq!(timeline.parallax_progress(2, 4.0 * WIDTH), 1.0);
    }

    #[test]
    fn first_panel_is_revealed_from_the_start() {
        let sample = timeline().sample(0.0);
        assert!(sample.panels[0].revealed);
        assert!(!sample.panels[1].revealed);
    }

    #[test]
    fn reveal_flips_when_left_edge_hits_centre() {
        let timeline = timeline();
        let trigger = timeline.reveal_trigger(1);
        assert_eq!(trigger, WIDTH / 2.0);

        assert!(!timeline.is_revealed(1, trigger - 1.0));
        assert!(timeline.is_revealed(1, trigger));
        // scrolling back before the trigger hides it again
        assert!(!timeline.sample(trigger - 10.0).panels[1].revealed);
    }

    #[test]
    fn resize_rescales_distance() {
        let mut timeline = timeline();
        timeline.set_viewport_width(1000.0);
        assert_eq!(timeline.scroll_distance(), 5000.0);
        assert_eq!(timeline.sample(2500.0).frame_index, 4);
    }
}
