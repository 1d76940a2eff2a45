use super::DEBOUNCE_MS;

/// Time-window debouncer for one button.
///
/// An edge is accepted when no edge was accepted in the preceding
/// [`DEBOUNCE_MS`] milliseconds. Rejected edges do not restart the window,
/// so a bouncing contact cannot hold the button off indefinitely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    last_accepted_ms: Option<u64>,
}

impl Debouncer {
    pub const fn new() -> Self {
        Self {
            last_accepted_ms: None,
        }
    }

    /// Report an edge seen at `now_ms` (monotonic milliseconds).
    ///
    /// Returns `true` if the edge counts as a press. The first edge is
    /// always accepted.
    pub fn accept(&mut self, now_ms: u64) -> bool {
        match self.last_accepted_ms {
            Some(last) if now_ms.saturating_sub(last) < DEBOUNCE_MS => false,
            _ => {
                self.last_accepted_ms = Some(now_ms);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_edge_is_accepted() {
        let mut debouncer = Debouncer::new();
        assert!(debouncer.accept(0));
    }

    #[test]
    fn edges_inside_window_are_rejected() {
        let mut debouncer = Debouncer::new();
        assert!(debouncer.accept(1_000));
        assert!(!debouncer.accept(1_001));
        assert!(!debouncer.accept(1_199));
        assert!(debouncer.accept(1_200));
    }

    #[test]
    fn rejected_edges_do_not_extend_window() {
        let mut debouncer = Debouncer::new();
        assert!(debouncer.accept(0));
        for t in (10..200).step_by(10) {
            assert!(!debouncer.accept(t));
        }
        assert!(debouncer.accept(200));
    }

    #[test]
    fn clock_going_backwards_is_rejected() {
        let mut debouncer = Debouncer::new();
        assert!(debouncer.accept(500));
        assert!(!debouncer.accept(100));
    }
}
