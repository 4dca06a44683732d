/// Which derived layout values went stale since the last paint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateStatus {
    caret: bool,
    text: bool,
    selection: bool,
}

impl UpdateStatus {
    /// Everything stale; the state of a freshly created editor.
    pub fn all() -> Self {
        Self {
            caret: true,
            text: true,
            selection: true,
        }
    }

    pub fn caret(&self) -> bool {
        self.caret
    }

    pub fn text(&self) -> bool {
        self.text
    }

    pub fn selection(&self) -> bool {
        self.selection
    }

    pub fn mark_caret(&mut self) {
        self.caret = true;
    }

    /// Text changes move every offset, so the caret is stale too.
    pub fn mark_text(&mut self) {
        self.text = true;
        self.caret = true;
    }

    pub fn mark_selection(&mut self) {
        self.selection = true;
    }

    pub fn is_clean(&self) -> bool {
        !(self.caret || self.text || self.selection)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_implies_caret() {
        let mut s = UpdateStatus::default();
        assert!(s.is_clean());
        s.mark_text();
        assert!(s.text() && s.caret() && !s.selection());
        s.clear();
        assert!(s.is_clean());
        assert!(!UpdateStatus::all().is_clean());
    }
}
