use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSpeeds {
    pub type_speed: Duration,
    pub back_speed: Duration,
    pub back_delay: Duration,
}

impl Default for TypeSpeeds {
    fn default() -> Self {
        Self {
            type_speed: Duration::from_millis(50),
            back_speed: Duration::from_millis(30),
            back_delay: Duration::from_millis(1500),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Typing effect driver. Each call to [`Typewriter::tick`] moves the effect one
/// step forward and says how long to wait before the next call; the caller
/// owns the timer.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    speeds: TypeSpeeds,
    index: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            phrases: phrases
                .into_iter()
                .map(|p| p.as_ref().chars().collect())
                .collect(),
            speeds: TypeSpeeds::default(),
            index: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    pub fn with_speeds(mut self, speeds: TypeSpeeds) -> Self {
        self.speeds = speeds;
        self
    }

    pub fn speeds(&self) -> TypeSpeeds {
        self.speeds
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Currently visible text.
    pub fn text(&self) -> String {
        self.phrases
            .get(self.index)
            .map(|p| p[..self.shown].iter().collect())
            .unwrap_or_default()
    }

    /// Delay before the very first tick.
    pub fn start_delay(&self) -> Option<Duration> {
        if self.phrases.is_empty() {
            None
        } else {
            Some(self.speeds.type_speed)
        }
    }

    /// Advances one step. Returns `None` only when there is nothing to type.
    pub fn tick(&mut self) -> Option<Duration> {
        let len = self.phrases.get(self.index)?.len();
        let next = match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = Phase::Holding;
                    self.speeds.back_delay
                } else {
                    self.speeds.type_speed
                }
            }
            Phase::Holding | Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                    self.speeds.type_speed
                } else {
                    self.phase = Phase::Deleting;
                    self.speeds.back_speed
                }
            }
        };
        Some(next)
    }
}

/// A scheduled timer that can be called off before it fires.
pub trait CancelTimer {
    fn cancel(self);
}

/// The single outstanding tick of a running typewriter. Cancelling it is what
/// stops the loop when the owning component goes away.
#[derive(Debug)]
pub struct PendingTick<H> {
    handle: Option<H>,
}

impl<H> Default for PendingTick<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H: CancelTimer> PendingTick<H> {
    pub fn is_pending(&self) -> bool {
        self.handle.is_some()
    }

    /// Tracks a newly scheduled tick, cancelling any earlier one still held.
    pub fn schedule(&mut self, handle: H) {
        if let Some(previous) = self.handle.replace(handle) {
            previous.cancel();
        }
    }

    /// The tick ran; there is nothing left to cancel.
    pub fn fired(&mut self) {
        self.handle = None;
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    struct FakeTimer {
        id: u32,
        cancelled: Rc<RefCell<Vec<u32>>>,
    }

    impl CancelTimer for FakeTimer {
        fn cancel(self) {
            self.cancelled.borrow_mut().push(self.id);
        }
    }

    fn completed_phrases(tw: &mut Typewriter, ticks: usize) -> Vec<String> {
        let mut done = Vec::new();
        for _ in 0..ticks {
            tw.tick().expect("typewriter should keep running");
            if tw.phase() == Phase::Holding {
                done.push(tw.text());
            }
        }
        done
    }

    #[test]
    fn test_types_one_char_per_tick() {
        let mut tw = Typewriter::new(["abc"]);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.start_delay(), Some(Duration::from_millis(50)));

        assert_eq!(tw.tick(), Some(Duration::from_millis(50)));
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.tick(), Some(Duration::from_millis(50)));
        assert_eq!(tw.text(), "ab");

        // last char waits out the back delay before deleting
        assert_eq!(tw.tick(), Some(Duration::from_millis(1500)));
        assert_eq!(tw.text(), "abc");
        assert_eq!(tw.phase(), Phase::Holding);

        assert_eq!(tw.tick(), Some(Duration::from_millis(30)));
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.phase(), Phase::Deleting);
        assert_eq!(tw.tick(), Some(Duration::from_millis(30)));
        assert_eq!(tw.text(), "a");

        // fully deleted, back to typing
        assert_eq!(tw.tick(), Some(Duration::from_millis(50)));
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phase(), Phase::Typing);
    }

    #[test]
    fn test_cycles_hero_phrases_indefinitely() {
        let mut tw = Typewriter::new(crate::portfolio::HERO_PHRASES);
        let done = completed_phrases(&mut tw, 1000);
        assert!(done.len() >= 6);
        for (i, phrase) in done.iter().enumerate() {
            let expected = if i % 2 == 0 {
                "Software Developer"
            } else {
                "Problem Solver"
            };
            assert_eq!(phrase, expected);
        }
    }

    #[test]
    fn test_multibyte_phrases() {
        let mut tw = Typewriter::new(["né"]);
        tw.tick();
        assert_eq!(tw.text(), "n");
        tw.tick();
        assert_eq!(tw.text(), "né");
    }

    #[test]
    fn test_empty_phrases() {
        let mut tw = Typewriter::new(Vec::<String>::new());
        assert_eq!(tw.start_delay(), None);
        assert_eq!(tw.tick(), None);
        assert_eq!(tw.text(), "");

        // an empty phrase among others is skipped over without stalling
        let mut tw = Typewriter::new(["", "x"]);
        let done = completed_phrases(&mut tw, 20);
        assert!(done.contains(&"x".to_string()));
    }

    #[test]
    fn test_custom_speeds() {
        let speeds = TypeSpeeds {
            type_speed: Duration::from_millis(5),
            back_speed: Duration::from_millis(1),
            back_delay: Duration::from_millis(10),
        };
        let mut tw = Typewriter::new(["ab"]).with_speeds(speeds);
        assert_eq!(tw.speeds(), speeds);
        assert_eq!(tw.tick(), Some(Duration::from_millis(5)));
        assert_eq!(tw.tick(), Some(Duration::from_millis(10)));
        assert_eq!(tw.tick(), Some(Duration::from_millis(1)));
    }

    #[test]
    fn test_pending_tick_cancelled_on_teardown() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let timer = |id| FakeTimer {
            id,
            cancelled: cancelled.clone(),
        };
        let mut pending = PendingTick::default();
        assert!(!pending.is_pending());

        pending.schedule(timer(1));
        pending.fired();
        pending.schedule(timer(2));
        assert!(pending.is_pending());

        pending.cancel();
        assert!(!pending.is_pending());
        assert_eq!(*cancelled.borrow(), vec![2]);

        // nothing left to cancel
        pending.cancel();
        assert_eq!(*cancelled.borrow(), vec![2]);
    }

    #[test]
    fn test_pending_tick_replaces_unfired_timer() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut pending = PendingTick::default();
        pending.schedule(FakeTimer {
            id: 1,
            cancelled: cancelled.clone(),
        });
        pending.schedule(FakeTimer {
            id: 2,
            cancelled: cancelled.clone(),
        });
        assert_eq!(*cancelled.borrow(), vec![1]);
        pending.cancel();
        assert_eq!(*cancelled.borrow(), vec![1, 2]);
    }
}
