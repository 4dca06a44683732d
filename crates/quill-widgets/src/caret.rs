/// Caret blink phase for an editable control.
///
/// The owner calls [`update`](Self::update) once per frame with the elapsed
/// time and its focus state, and [`reset`](Self::reset) after every edit or
/// caret move so the caret is solid while the user is typing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaretBlink {
    visible: bool,
    enabled: bool,
    elapsed: f32,
    interval: f32,
    was_focused: bool,
}

impl CaretBlink {
    pub const DEFAULT_INTERVAL: f32 = 0.5;

    pub fn new(interval: f32) -> Self {
        Self {
            visible: true,
            enabled: true,
            elapsed: 0.0,
            interval: interval.max(0.05),
            was_focused: false,
        }
    }

    /// A caret that never blinks.
    pub fn steady() -> Self {
        Self {
            enabled: false,
            ..Self::new(Self::DEFAULT_INTERVAL)
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn update(&mut self, delta_time: f32, focused: bool) {
        if focused != self.was_focused {
            // Focus changes restart the phase; the caret shows immediately.
            self.was_focused = focused;
            self.reset();
        }
        if !focused || !self.enabled {
            return;
        }
        self.elapsed += delta_time.max(0.0);
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.visible = !self.visible;
        }
    }

    pub fn reset(&mut self) {
        self.visible = true;
        self.elapsed = 0.0;
    }
}

impl Default for CaretBlink {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_every_interval_while_focused() {
        let mut blink = CaretBlink::new(0.5);
        blink.update(0.0, true);
        assert!(blink.is_visible());
        blink.update(0.3, true);
        assert!(blink.is_visible());
        blink.update(0.3, true);
        assert!(!blink.is_visible());
        blink.update(0.5, true);
        assert!(blink.is_visible());
    }

    #[test]
    fn edits_and_focus_changes_restart_the_phase() {
        let mut blink = CaretBlink::new(0.5);
        blink.update(0.0, true);
        blink.update(0.6, true);
        assert!(!blink.is_visible());
        blink.reset();
        assert!(blink.is_visible());

        blink.update(0.6, true);
        blink.update(0.0, false);
        assert!(blink.is_visible());
        // Unfocused: time does not advance the phase.
        blink.update(10.0, false);
        assert!(blink.is_visible());
    }

    #[test]
    fn steady_caret_never_hides() {
        let mut blink = CaretBlink::steady();
        blink.update(0.0, true);
        blink.update(3.7, true);
        assert!(blink.is_visible());
    }
}
