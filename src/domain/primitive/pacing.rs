use std::time::Duration;

/// Delay between revealed characters of terminal output.
pub const TERMINAL_CHAR_DELAY: Duration = Duration::from_millis(8);
/// Delay between typed characters on the boot screen.
pub const BOOT_CHAR_DELAY: Duration = Duration::from_millis(5);
/// Pause after a boot line with text.
pub const BOOT_LINE_PAUSE: Duration = Duration::from_millis(80);
/// Pause after a blank boot line.
pub const BOOT_BLANK_LINE_PAUSE: Duration = Duration::from_millis(40);
/// Hold time after the last boot line before the boot screen closes.
pub const BOOT_FINISH_DELAY: Duration = Duration::from_millis(300);
/// Interval between matrix rain frames.
pub const MATRIX_FRAME_INTERVAL: Duration = Duration::from_millis(35);

/// Converts elapsed wall-clock time into a count of fixed-interval steps.
///
/// The remainder that does not make up a whole interval is carried over to
/// the next call, so feeding `3ms` then `5ms` into an `8ms` pacer yields one
/// step on the second call.
#[derive(Debug, Clone)]
pub struct Pacer {
    interval: Duration,
    carry: Duration,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            carry: Duration::ZERO,
        }
    }

    /// Add `elapsed` and return how many whole intervals are now due.
    pub fn due(&mut self, elapsed: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        let total = self.carry + elapsed;
        let steps = (total.as_nanos() / self.interval.as_nanos()) as u32;
        self.carry = total - self.interval * steps;
        steps
    }

    /// Drop any carried time.
    pub fn reset(&mut self) {
        self.carry = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_returns_whole_intervals() {
        let mut pacer = Pacer::new(Duration::from_millis(8));
        assert_eq!(pacer.due(Duration::from_millis(24)), 3);
    }

    #[test]
    fn due_carries_remainder() {
        let mut pacer = Pacer::new(Duration::from_millis(8));
        assert_eq!(pacer.due(Duration::from_millis(3)), 0);
        assert_eq!(pacer.due(Duration::from_millis(5)), 1);
        assert_eq!(pacer.due(Duration::from_millis(7)), 0);
        assert_eq!(pacer.due(Duration::from_millis(1)), 1);
    }

    #[test]
    fn reset_discards_carry() {
        let mut pacer = Pacer::new(Duration::from_millis(8));
        pacer.due(Duration::from_millis(7));
        pacer.reset();
        assert_eq!(pacer.due(Duration::from_millis(1)), 0);
    }

    #[test]
    fn zero_interval_never_fires() {
        let mut pacer = Pacer::new(Duration::ZERO);
        assert_eq!(pacer.due(Duration::from_secs(1)), 0);
    }

    #[test]
    fn terminal_delay_is_8ms() {
        assert_eq!(TERMINAL_CHAR_DELAY, Duration::from_millis(8));
    }
}
