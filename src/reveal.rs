/// Options handed to the viewport observer for a tracked section.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    /// CSS margin applied to the viewport, e.g. `"-100px"`.
    pub root_margin: String,
    /// Fraction of the element that has to be visible.
    pub threshold: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            root_margin: "0px".to_string(),
            threshold: 0.0,
        }
    }
}

impl RevealOptions {
    pub fn margin(root_margin: impl Into<String>) -> Self {
        Self {
            root_margin: root_margin.into(),
            ..Default::default()
        }
    }

    pub fn amount(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            ..Default::default()
        }
    }
}

/// One-shot latch for "reveal once" sections.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds an intersection report. Returns true exactly once: on the first
    /// report that the section is in view.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Feeds one observer callback's worth of entries. True means the
    /// section was just revealed and the observer can be disconnected.
    pub fn observe_entries<I>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = bool>,
    {
        let intersecting = entries.into_iter().any(|e| e);
        self.observe(intersecting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_fires_once() {
        let mut latch = RevealLatch::new();
        assert!(!latch.is_revealed());
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());

        assert!(latch.observe(true));
        assert!(latch.is_revealed());

        // leave and re-enter a few times
        for _ in 0..5 {
            assert!(!latch.observe(false));
            assert!(!latch.observe(true));
        }
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_latches_are_independent() {
        let mut experience = RevealLatch::new();
        let mut skills = RevealLatch::new();
        assert!(experience.observe(true));
        assert!(!skills.is_revealed());
        assert!(skills.observe(true));
    }

    #[test]
    fn test_options() {
        let opts = RevealOptions::margin("-100px");
        assert_eq!(opts.root_margin, "-100px");
        assert_eq!(opts.threshold, 0.0);

        assert_eq!(RevealOptions::amount(0.3).threshold, 0.3);
        assert_eq!(RevealOptions::amount(4.0).threshold, 1.0);
        assert_eq!(RevealOptions::amount(0.3).root_margin, "0px");
    }

    #[test]
    fn test_observer_disconnects_once() {
        let mut latch = RevealLatch::new();
        let batches: [&[bool]; 5] = [&[], &[false], &[false, true], &[true], &[false, true]];
        let disconnects = batches
            .iter()
            .filter(|batch| latch.observe_entries(batch.iter().copied()))
            .count();
        assert_eq!(disconnects, 1);
        assert!(latch.is_revealed());
    }
}
