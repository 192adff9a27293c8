/// Phase of the answer flow on the active-session screen. The timer, the
/// recording indicator, and the visible controls are all projections of
/// this one machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerPhase {
    #[default]
    Idle,
    Recording,
    Answered,
}

/// Recording toggle plus elapsed-seconds timer for one question. Calls that
/// do not match the current phase are ignored; the widgets that would issue
/// them are not shown, but the machine stays consistent under any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnswerMachine {
    phase: AnswerPhase,
    elapsed_secs: u32,
    answered_secs: Option<u32>,
}

impl AnswerMachine {
    pub fn phase(&self) -> AnswerPhase {
        self.phase
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    /// Elapsed seconds snapshotted when the user stopped recording.
    pub fn answered_secs(&self) -> Option<u32> {
        self.answered_secs
    }

    pub fn is_recording(&self) -> bool {
        self.phase == AnswerPhase::Recording
    }

    pub fn start(&mut self) {
        if self.phase == AnswerPhase::Idle {
            self.phase = AnswerPhase::Recording;
        }
    }

    pub fn stop(&mut self) {
        if self.phase == AnswerPhase::Recording {
            self.phase = AnswerPhase::Answered;
            self.answered_secs = Some(self.elapsed_secs);
        }
    }

    /// One-second timer tick; counts only while recording.
    pub fn tick_second(&mut self) {
        if self.phase == AnswerPhase::Recording {
            self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        }
    }

    /// Discards the answer and returns to a clean Idle before a new take.
    pub fn re_record(&mut self) {
        if self.phase == AnswerPhase::Answered {
            *self = Self::default();
        }
    }

    /// Reset when moving to the next question (or leaving the screen).
    pub fn advance_reset(&mut self) {
        *self = Self::default();
    }
}

/// `m:ss`, as shown next to the recording indicator.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_snapshots_elapsed_on_stop() {
        let mut machine = AnswerMachine::default();
        machine.start();
        assert!(machine.is_recording());
        machine.tick_second();
        machine.tick_second();
        machine.stop();
        assert_eq!(machine.phase(), AnswerPhase::Answered);
        assert_eq!(machine.answered_secs(), Some(2));
        assert_eq!(machine.elapsed_secs(), 2);
    }

    #[test]
    fn ticks_count_only_while_recording() {
        let mut machine = AnswerMachine::default();
        machine.tick_second();
        assert_eq!(machine.elapsed_secs(), 0);
        machine.start();
        machine.tick_second();
        machine.stop();
        machine.tick_second();
        machine.tick_second();
        assert_eq!(machine.elapsed_secs(), 1);
    }

    #[test]
    fn re_record_returns_to_idle_with_zero_elapsed() {
        let mut machine = AnswerMachine::default();
        machine.start();
        machine.tick_second();
        machine.stop();
        machine.re_record();
        assert_eq!(machine.phase(), AnswerPhase::Idle);
        assert_eq!(machine.elapsed_secs(), 0);
        assert_eq!(machine.answered_secs(), None);
    }

    #[test]
    fn mismatched_transitions_are_ignored() {
        let mut machine = AnswerMachine::default();
        machine.stop();
        machine.re_record();
        assert_eq!(machine.phase(), AnswerPhase::Idle);
        machine.start();
        machine.start();
        machine.re_record();
        assert!(machine.is_recording());
    }

    #[test]
    fn clock_formats_minutes_and_padded_seconds() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(9), "0:09");
        assert_eq!(format_clock(61), "1:01");
        assert_eq!(format_clock(600), "10:00");
    }
}
