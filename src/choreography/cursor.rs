use crate::config::CURSOR_DEFAULT_LABEL;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn lerp(self, to: Point, t: f64) -> Point {
        Point::new(self.x + (to.x - self.x) * t, self.y + (to.y - self.y) * t)
    }
}

pub fn power2_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

// Every pointer move restarts the tween from where the indicator is now
#[derive(Clone, Debug, PartialEq)]
pub struct CursorTween {
    from: Point,
    to: Point,
    started_at: f64,
    duration_ms: f64,
    position: Point,
}

impl CursorTween {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            from: Point::default(),
            to: Point::default(),
            started_at: 0.0,
            duration_ms,
            position: Point::default(),
        }
    }

    #[cfg(test)]
    pub fn position(&self) -> Point {
        self.position
    }

    #[cfg(test)]
    pub fn is_done(&self) -> bool {
        self.position == self.to
    }

    pub fn retarget(&mut self, to: Point, now: f64) {
        self.from = self.position;
        self.to = to;
        self.started_at = now;
    }

    pub fn tick(&mut self, now: f64) -> Point {
        let t = if self.duration_ms <= 0.0 {
            1.0
        } else {
            (now - self.started_at) / self.duration_ms
        };
        self.position = if t >= 1.0 {
            self.to
        } else {
            self.from.lerp(self.to, power2_out(t))
        };
        self.position
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CursorState {
    label: String,
    hovered: bool,
    dirty: bool,
}

impl CursorState {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn enter(&mut self, label: Option<&str>) {
        self.label = label.unwrap_or(CURSOR_DEFAULT_LABEL).to_string();
        self.hovered = true;
        self.dirty = true;
    }

    // Clears even when the pointer is still inside an outer interactive element
    pub fn leave(&mut self) {
        self.label.clear();
        self.hovered = false;
        self.dirty = true;
    }

    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_hits_endpoints() {
        assert_eq!(power2_out(0.0), 0.0);
        assert_eq!(power2_out(1.0), 1.0);
        assert_eq!(power2_out(0.5), 0.75);
        assert_eq!(power2_out(3.0), 1.0);
    }

    #[test]
    fn tween_arrives_within_duration() {
        let mut tween = CursorTween::new(100.0);
        tween.retarget(Point::new(200.0, 100.0), 0.0);

        let midway = tween.tick(50.0);
        assert_eq!(midway, Point::new(150.0, 75.0));
        assert!(!tween.is_done());

        assert_eq!(tween.tick(100.0), Point::new(200.0, 100.0));
        assert!(tween.is_done());
    }

    #[test]
    fn retarget_continues_from_current_position() {
        let mut tween = CursorTween::new(100.0);
        tween.retarget(Point::new(100.0, 0.0), 0.0);
        tween.tick(50.0);

        tween.retarget(Point::new(0.0, 0.0), 50.0);
        assert_eq!(tween.tick(50.0), Point::new(75.0, 0.0));
        assert_eq!(tween.tick(150.0), Point::new(0.0, 0.0));
    }

    #[test]
    fn hover_shows_label_and_leave_clears_it() {
        let mut cursor = CursorState::default();
        cursor.enter(Some("PLAY"));
        assert_eq!(cursor.label(), "PLAY");
        assert!(cursor.is_hovered());

        cursor.leave();
        assert_eq!(cursor.label(), "");
        assert!(!cursor.is_hovered());
    }

    #[test]
    fn leave_clears_regardless_of_order() {
        let mut cursor = CursorState::default();
        cursor.enter(Some("WATCH"));
        cursor.enter(Some("PLAY"));
        cursor.leave();
        assert_eq!(cursor.label(), "");

        cursor.enter(Some("PLAY"));
        cursor.enter(Some("STEP 01"));
        cursor.leave();
        cursor.leave();
        assert_eq!(cursor.label(), "");
        assert!(!cursor.is_hovered());
    }

    #[test]
    fn unlabelled_elements_read_view() {
        let mut cursor = CursorState::default();
        cursor.enter(None);
        assert_eq!(cursor.label(), "VIEW");
    }

    #[test]
    fn dirty_flag_is_consumed_once() {
        let mut cursor = CursorState::default();
        assert!(!cursor.take_dirty());
        cursor.enter(Some("HIRE US"));
        assert!(cursor.take_dirty());
        assert!(!cursor.take_dirty());
    }
}
