use crate::config::MOBILE_MAX_WIDTH;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Desktop,
    Mobile,
}

impl Mode {
    pub fn from_viewport_width(width: f64) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            Mode::Mobile
        } else {
            Mode::Desktop
        }
    }

    pub fn from_mobile_match(matches: bool) -> Self {
        if matches {
            Mode::Mobile
        } else {
            Mode::Desktop
        }
    }

    pub fn is_desktop(self) -> bool {
        self == Mode::Desktop
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Mode::Desktop => "is-desktop",
            Mode::Mobile => "is-mobile",
        }
    }
}

// Holds the desktop session, if any. A switch drops the old session before
// the next one is created.
pub struct ModeLifecycle<S> {
    active: Option<Mode>,
    session: Option<S>,
}

impl<S> Default for ModeLifecycle<S> {
    fn default() -> Self {
        Self {
            active: None,
            session: None,
        }
    }
}

impl<S> ModeLifecycle<S> {
    pub fn active(&self) -> Option<Mode> {
        self.active
    }

    pub fn is_bound(&self) -> bool {
        self.session.is_some()
    }

    pub fn switch<F>(&mut self, mode: Mode, enter_desktop: F) -> bool
    where
        F: FnOnce() -> Option<S>,
    {
        if self.active == Some(mode) {
            return false;
        }

        drop(self.session.take());
        self.active = Some(mode);
        if mode.is_desktop() {
            self.session = enter_desktop();
        }
        true
    }

    pub fn release(&mut self) {
        drop(self.session.take());
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingSession {
        live: Rc<Cell<i32>>,
    }

    impl CountingSession {
        fn enter(live: &Rc<Cell<i32>>) -> Option<Self> {
            live.set(live.get() + 1);
            Some(Self { live: live.clone() })
        }
    }

    impl Drop for CountingSession {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    #[test]
    fn breakpoint_splits_at_768() {
        assert_eq!(Mode::from_viewport_width(320.0), Mode::Mobile);
        assert_eq!(Mode::from_viewport_width(767.0), Mode::Mobile);
        assert_eq!(Mode::from_viewport_width(767.5), Mode::Desktop);
        assert_eq!(Mode::from_viewport_width(768.0), Mode::Desktop);
        assert_eq!(Mode::from_viewport_width(1920.0), Mode::Desktop);
    }

    #[test]
    fn media_match_means_mobile() {
        assert_eq!(Mode::from_mobile_match(true), Mode::Mobile);
        assert_eq!(Mode::from_mobile_match(false), Mode::Desktop);
    }

    #[test]
    fn crossing_the_breakpoint_flips_once_per_crossing() {
        let live = Rc::new(Cell::new(0));
        let mut lifecycle = ModeLifecycle::default();
        let widths = [1280.0, 1024.0, 800.0, 700.0, 600.0, 500.0, 900.0, 1200.0];

        let flips = widths
            .iter()
            .filter(|&&w| lifecycle.switch(Mode::from_viewport_width(w), || CountingSession::enter(&live)))
            .count();

        // initial desktop, one crossing down, one crossing back up
        assert_eq!(flips, 3);
        assert_eq!(lifecycle.active(), Some(Mode::Desktop));
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn mobile_never_binds() {
        let live = Rc::new(Cell::new(0));
        let mut lifecycle = ModeLifecycle::default();

        assert!(lifecycle.switch(Mode::Mobile, || CountingSession::enter(&live)));
        assert!(!lifecycle.is_bound());
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn reentering_desktop_matches_first_entry() {
        let live = Rc::new(Cell::new(0));
        let mut lifecycle = ModeLifecycle::default();

        lifecycle.switch(Mode::Desktop, || CountingSession::enter(&live));
        let first = live.get();

        lifecycle.switch(Mode::Mobile, || CountingSession::enter(&live));
        assert_eq!(live.get(), 0);

        lifecycle.switch(Mode::Desktop, || CountingSession::enter(&live));
        assert_eq!(live.get(), first);
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn old_session_is_dropped_before_the_new_one_enters() {
        let live = Rc::new(Cell::new(0));
        let mut lifecycle = ModeLifecycle::default();

        lifecycle.switch(Mode::Desktop, || CountingSession::enter(&live));
        lifecycle.switch(Mode::Mobile, || CountingSession::enter(&live));
        lifecycle.switch(Mode::Desktop, || {
            assert_eq!(live.get(), 0, "previous desktop session still alive");
            CountingSession::enter(&live)
        });
    }

    #[test]
    fn same_mode_is_a_no_op() {
        let live = Rc::new(Cell::new(0));
        let mut lifecycle = ModeLifecycle::default();

        assert!(lifecycle.switch(Mode::Desktop, || CountingSession::enter(&live)));
        assert!(!lifecycle.switch(Mode::Desktop, || CountingSession::enter(&live)));
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn release_tears_everything_down() {
        let live = Rc::new(Cell::new(0));
        let mut lifecycle = ModeLifecycle::default();

        lifecycle.switch(Mode::Desktop, || CountingSession::enter(&live));
        lifecycle.release();
        assert_eq!(live.get(), 0);
        assert_eq!(lifecycle.active(), None);

        // a released lifecycle can bind again
        assert!(lifecycle.switch(Mode::Desktop, || CountingSession::enter(&live)));
        assert_eq!(live.get(), 1);
    }
}
