//! Typewriter: the typing/pausing/deleting state machine.
//!
//! The engine is a plain value. It owns one primary timer (start, type,
//! pause, delete) and one caret-blink interval, and only changes state
//! when the host advances its clock past a pending deadline.
//!
//! ```text
//!  Idle ──start_delay──▶ Typing ──full──▶ Pausing ──between_words_delay──▶ Deleting
//!                          ▲                 │                               │
//!                          │                 │ !loop && last phrase          │ empty
//!                          │                 ▼                               │
//!                          │                Done                             │
//!                          └────────────── next phrase ◀─────────────────────┘
//! ```

use super::config::TypewriterConfig;
use super::phase::Phase;
use super::phrase::Phrase;
use super::timer::{duration_from_nanos, Interval, Timer};
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Period of the caret blink.
pub const CARET_BLINK_INTERVAL: Duration = Duration::from_millis(450);

/// Action attached to the primary timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Start,
    TypeChar,
    BeginDelete,
    DeleteChar,
}

/// What a host renders: the typed text, the caret state and whether the
/// animation has finished.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    /// Prefix of the current phrase.
    pub text: String,
    /// Caret blink state.
    pub caret_visible: bool,
    /// The non-looping animation has stopped on its last phrase.
    pub done: bool,
}

/// A typewriter text animation driven by virtual time.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use typewriter::{Typewriter, TypewriterConfig};
///
/// let config = TypewriterConfig::new(["Hobbyist"]).with_loop(false);
/// let mut typewriter = Typewriter::new(config);
///
/// typewriter.advance(Duration::from_secs(5));
/// assert_eq!(typewriter.text(), "Hobbyist");
/// assert!(typewriter.is_done());
/// ```
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Phrase>,
    typing_speed: Duration,
    deleting_speed: Duration,
    start_delay: Duration,
    between_words_delay: Duration,
    looping: bool,
    /// Index into `phrases`; always in range when `phrases` is non-empty.
    index: usize,
    /// Graphemes of the current phrase on display.
    shown: usize,
    phase: Phase,
    caret_visible: bool,
    /// Engine clock, measured from construction.
    clock: Duration,
    /// Length of one full loop through every phrase.
    cycle: Duration,
    /// Most primary steps that may fire at one instant: `Start` plus one
    /// full cycle through every phrase.
    burst_limit: usize,
    /// Instant of the latest primary step and how many fired at it.
    burst: Option<(Duration, usize)>,
    step: Timer<Step>,
    blink: Interval,
    destroyed: bool,
}

impl Typewriter {
    /// Create a typewriter. It starts in [`Phase::Idle`] with the start
    /// delay already running.
    pub fn new(config: TypewriterConfig) -> Self {
        let TypewriterConfig {
            words,
            typing_speed,
            deleting_speed,
            start_delay,
            between_words_delay,
            looping,
        } = config;
        let phrases: Vec<Phrase> = words.into_iter().filter_map(Phrase::new).collect();
        // type, begin delete and delete steps per phrase
        let burst_limit = 1 + phrases.iter().map(|p| 2 * p.len() + 1).sum::<usize>();
        let cycle = phrases.iter().fold(Duration::ZERO, |total, phrase| {
            let len = u32::try_from(phrase.len()).unwrap_or(u32::MAX);
            total
                .saturating_add(typing_speed.saturating_mul(len))
                .saturating_add(between_words_delay)
                .saturating_add(deleting_speed.saturating_mul(len))
        });

        debug!(phrases = phrases.len(), looping, "typewriter created");

        let mut typewriter = Self {
            phrases,
            typing_speed,
            deleting_speed,
            start_delay,
            between_words_delay,
            looping,
            index: 0,
            shown: 0,
            phase: Phase::Idle,
            caret_visible: true,
            clock: Duration::ZERO,
            cycle,
            burst_limit,
            burst: None,
            step: Timer::new(),
            blink: Interval::start(Duration::ZERO, CARET_BLINK_INTERVAL),
            destroyed: false,
        };
        typewriter.settle();
        typewriter
    }

    /// The text currently on display.
    pub fn text(&self) -> &str {
        self.phrases
            .get(self.index)
            .map_or("", |phrase| phrase.prefix(self.shown))
    }

    /// The phrase currently being typed or deleted.
    pub fn current_phrase(&self) -> Option<&str> {
        self.phrases.get(self.index).map(Phrase::as_str)
    }

    /// Index of the current phrase.
    #[inline]
    pub const fn current_index(&self) -> usize {
        self.index
    }

    /// Number of phrases left after dropping empty ones.
    #[inline]
    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// Caret blink state.
    #[inline]
    pub const fn caret_visible(&self) -> bool {
        self.caret_visible
    }

    /// Current phase.
    #[inline]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the non-looping animation has finished.
    #[inline]
    pub const fn is_done(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Whether [`Self::destroy`] has been called.
    #[inline]
    pub const fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Engine clock, measured from construction.
    #[inline]
    pub const fn elapsed(&self) -> Duration {
        self.clock
    }

    /// Snapshot of everything a host renders.
    pub fn frame(&self) -> Frame {
        Frame {
            text: self.text().to_owned(),
            caret_visible: self.caret_visible,
            done: self.is_done(),
        }
    }

    /// Time until the next pending timer, or `None` once destroyed.
    pub fn time_until_next(&self) -> Option<Duration> {
        [self.step.deadline(), self.blink.deadline()]
            .into_iter()
            .flatten()
            .min()
            .map(|at| at.saturating_sub(self.clock))
    }

    /// Move the clock forward by `elapsed`.
    ///
    /// Returns `true` if the observable frame changed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.advance_to(self.clock.saturating_add(elapsed))
    }

    /// Move the clock to `target` (measured from construction), firing every
    /// due timer in order. Targets in the past leave the clock where it is.
    ///
    /// Returns `true` if the observable frame changed.
    pub fn advance_to(&mut self, target: Duration) -> bool {
        if self.destroyed {
            return false;
        }
        let before = self.observable();
        let target = target.max(self.clock);

        loop {
            let step_at = self.step.due(target);

            // Blink ticks strictly before the next step; on a tie the
            // primary timer fires first.
            let blink_end = match step_at {
                Some(at) => at.checked_sub(Duration::from_nanos(1)),
                None => Some(target),
            };
            if let Some((ticks, last)) = blink_end.and_then(|end| self.blink.fire_until(end)) {
                self.clock = self.clock.max(last);
                if ticks % 2 == 1 {
                    self.caret_visible = !self.caret_visible;
                }
            }

            let Some((mut at, step)) = step_at.and_then(|_| self.step.take()) else {
                break;
            };
            if step == Step::TypeChar {
                at = self.skip_cycles(at, target);
            }
            self.clock = self.clock.max(at);
            self.fire(step);
            self.check_burst(at);
        }

        self.clock = target;
        self.observable() != before
    }

    /// Cancel both timers. Idempotent; afterwards nothing changes.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.step.cancel();
        self.blink.cancel();
        self.destroyed = true;
        debug!(elapsed = ?self.clock, "typewriter destroyed");
    }

    /// Identity of the visible output, cheap to compare.
    fn observable(&self) -> (Option<(usize, usize)>, bool, bool) {
        (
            (self.shown > 0).then_some((self.index, self.shown)),
            self.caret_visible,
            self.is_done(),
        )
    }

    /// Move the first keystroke of a loop forward by every whole cycle that
    /// fits before `target`. The state after a full cycle is unchanged, so
    /// only the deadline moves.
    fn skip_cycles(&self, at: Duration, target: Duration) -> Duration {
        if !self.looping || self.index != 0 || self.shown != 0 || self.cycle.is_zero() {
            return at;
        }
        let cycle = self.cycle.as_nanos();
        let cycles = (target - at).as_nanos() / cycle;
        if cycles == 0 {
            return at;
        }
        trace!(cycles, "skipping whole cycles");
        at.saturating_add(duration_from_nanos(cycles * cycle))
    }

    /// Count steps fired at `at`. A looping animation whose delays are all
    /// zero would cycle forever at one instant; it stops after one cycle.
    fn check_burst(&mut self, at: Duration) {
        let fired = match self.burst {
            Some((instant, fired)) if instant == at => fired + 1,
            _ => 1,
        };
        self.burst = Some((at, fired));

        if fired >= self.burst_limit && self.step.deadline() == Some(at) {
            warn!(at = ?at, "every delay is zero, stopping the animation");
            self.step.cancel();
        }
    }

    fn is_last_phrase(&self) -> bool {
        self.index % self.phrases.len() == self.phrases.len() - 1
    }

    fn schedule(&mut self, delay: Duration, step: Step) {
        self.step.arm(self.clock, delay, step);
    }

    fn enter(&mut self, phase: Phase) {
        trace!(from = %self.phase, to = %phase, index = self.index, "phase transition");
        self.phase = phase;
    }

    fn fire(&mut self, step: Step) {
        match step {
            Step::Start => self.enter(Phase::Typing),
            Step::TypeChar => {
                let len = self.phrases.get(self.index).map_or(0, Phrase::len);
                self.shown = (self.shown + 1).min(len);
            }
            Step::BeginDelete => self.enter(Phase::Deleting),
            Step::DeleteChar => self.shown = self.shown.saturating_sub(1),
        }
        self.settle();
    }

    /// Apply every zero-time transition, then arm the timer for the next
    /// delayed one.
    fn settle(&mut self) {
        let count = self.phrases.len();
        if count == 0 {
            return;
        }

        loop {
            let len = self.phrases[self.index].len();
            match self.phase {
                Phase::Idle => {
                    self.schedule(self.start_delay, Step::Start);
                    return;
                }
                Phase::Typing if self.shown < len => {
                    self.schedule(self.typing_speed, Step::TypeChar);
                    return;
                }
                Phase::Typing => self.enter(Phase::Pausing),
                Phase::Pausing if !self.looping && self.is_last_phrase() => {
                    self.enter(Phase::Done);
                    debug!(phrase = self.phrases[self.index].as_str(), "typewriter finished");
                }
                Phase::Pausing => {
                    self.schedule(self.between_words_delay, Step::BeginDelete);
                    return;
                }
                Phase::Deleting if self.shown > 0 => {
                    self.schedule(self.deleting_speed, Step::DeleteChar);
                    return;
                }
                Phase::Deleting => {
                    let next = self.index + 1;
                    if !self.looping && next >= count {
                        // Pausing stops on the last phrase, so this means a broken transition.
                        warn!(index = self.index, "deleted past the last phrase, stopping");
                        debug_assert!(self.looping, "deleted past the last phrase without looping");
                        self.enter(Phase::Done);
                    } else {
                        self.index = next % count;
                        debug!(
                            index = self.index,
                            phrase = self.phrases[self.index].as_str(),
                            "next phrase"
                        );
                        self.enter(Phase::Typing);
                    }
                }
                Phase::Done => {
                    self.step.cancel();
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MS: Duration = Duration::from_millis(1);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Step the clock 1ms at a time and record every distinct text.
    fn texts_until(typewriter: &mut Typewriter, until: Duration) -> Vec<String> {
        let mut texts = vec![typewriter.text().to_owned()];
        while typewriter.elapsed() < until {
            typewriter.advance(MS);
            if texts.last().map(String::as_str) != Some(typewriter.text()) {
                texts.push(typewriter.text().to_owned());
            }
        }
        texts
    }

    #[test]
    fn test_starts_idle() {
        let typewriter = Typewriter::new(TypewriterConfig::new(["Rust"]));

        assert_eq!(typewriter.phase(), Phase::Idle);
        assert_eq!(typewriter.text(), "");
        assert!(typewriter.caret_visible());
        assert!(!typewriter.is_done());
        assert_eq!(typewriter.time_until_next(), Some(ms(400)));
    }

    #[test]
    fn test_single_phrase_without_loop() {
        let config = TypewriterConfig::new(["Hobbyist"])
            .with_loop(false)
            .with_timing(ms(10), ms(40), Duration::ZERO, ms(50));
        let mut typewriter = Typewriter::new(config);

        typewriter.advance(Duration::ZERO);
        assert_eq!(typewriter.phase(), Phase::Typing);
        assert_eq!(typewriter.text(), "");

        typewriter.advance(ms(70));
        assert_eq!(typewriter.text(), "Hobbyis");
        assert_eq!(typewriter.phase(), Phase::Typing);

        typewriter.advance(ms(10));
        assert_eq!(typewriter.text(), "Hobbyist");
        assert!(typewriter.is_done());

        typewriter.advance(ms(50));
        assert!(typewriter.is_done());
        assert_eq!(typewriter.text(), "Hobbyist");

        typewriter.advance(Duration::from_secs(60));
        assert_eq!(typewriter.text(), "Hobbyist");
        assert_eq!(typewriter.phase(), Phase::Done);
    }

    #[test]
    fn test_loop_cycles_through_phrases() {
        let config = TypewriterConfig::new(["Go", "Rust"])
            .with_timing(ms(10), ms(5), Duration::ZERO, ms(20));
        let mut typewriter = Typewriter::new(config);

        let texts = texts_until(&mut typewriter, ms(150));
        assert_eq!(
            texts,
            [
                "", "G", "Go", "G", "", "R", "Ru", "Rus", "Rust", "Rus", "Ru", "R", "", "G", "Go"
            ]
        );
        assert_eq!(typewriter.current_index(), 0);
        assert!(!typewriter.is_done());
    }

    #[test]
    fn test_loop_never_finishes() {
        let config = TypewriterConfig::new(["Go", "Rust"])
            .with_timing(ms(10), ms(5), Duration::ZERO, ms(20));
        let mut typewriter = Typewriter::new(config);

        for _ in 0..10_000 {
            typewriter.advance(ms(3));
            assert!(!typewriter.is_done());
        }
    }

    #[test]
    fn test_without_loop_stops_on_last_phrase() {
        let config = TypewriterConfig::new(["Tech Enthusiast", "Hobbyist", "Software Developer"])
            .with_loop(false)
            .with_timing(ms(70), ms(40), ms(400), ms(100));
        let mut typewriter = Typewriter::new(config);

        let texts = texts_until(&mut typewriter, Duration::from_secs(10));
        assert!(texts.contains(&"Tech Enthusiast".to_owned()));
        assert!(texts.contains(&"Hobbyist".to_owned()));
        assert_eq!(texts.last().map(String::as_str), Some("Software Developer"));

        assert!(typewriter.is_done());
        assert_eq!(typewriter.current_index(), 2);
        assert_eq!(typewriter.text(), "Software Developer");
    }

    #[test]
    fn test_first_phrase_timing() {
        let mut typewriter = Typewriter::new(TypewriterConfig::new(["Rust"]));

        // start_delay + typing_speed * len
        typewriter.advance_to(ms(400 + 70 * 4 - 1));
        assert_eq!(typewriter.text(), "Rus");
        typewriter.advance_to(ms(400 + 70 * 4));
        assert_eq!(typewriter.text(), "Rust");
        assert_eq!(typewriter.phase(), Phase::Pausing);
    }

    #[test]
    fn test_caret_blinks_independently() {
        let config = TypewriterConfig::new(["Hobbyist"])
            .with_loop(false)
            .with_timing(ms(10), ms(40), Duration::ZERO, ms(50));
        let mut typewriter = Typewriter::new(config);

        typewriter.advance_to(ms(449));
        assert!(typewriter.caret_visible());
        assert!(typewriter.is_done());

        typewriter.advance_to(ms(450));
        assert!(!typewriter.caret_visible());
        typewriter.advance_to(ms(900));
        assert!(typewriter.caret_visible());

        // 22 toggles by 10s, 23 by 10.35s
        typewriter.advance_to(ms(10_000));
        assert!(typewriter.caret_visible());
        typewriter.advance_to(ms(10_350));
        assert!(!typewriter.caret_visible());
        assert_eq!(typewriter.text(), "Hobbyist");
    }

    #[test]
    fn test_advance_reports_changes() {
        let mut typewriter = Typewriter::new(TypewriterConfig::new(["Rust"]));

        assert!(!typewriter.advance(ms(100)));
        // start fires at 400 but the text is still empty
        assert!(!typewriter.advance(ms(300)));
        assert_eq!(typewriter.phase(), Phase::Typing);
        assert!(typewriter.advance(ms(70)));
        assert_eq!(typewriter.frame().text, "R");
    }

    #[test]
    fn test_destroy_freezes_output() {
        let mut typewriter = Typewriter::new(TypewriterConfig::new(["Rust"]));
        typewriter.advance(ms(500));
        let frame = typewriter.frame();

        typewriter.destroy();
        typewriter.destroy();

        assert!(typewriter.is_destroyed());
        assert_eq!(typewriter.time_until_next(), None);
        assert!(!typewriter.advance(Duration::from_secs(60)));
        assert_eq!(typewriter.frame(), frame);
    }

    #[test]
    fn test_empty_words_stay_blank() {
        let mut typewriter = Typewriter::new(TypewriterConfig::new(["", ""]));

        assert_eq!(typewriter.phrase_count(), 0);
        assert_eq!(typewriter.current_phrase(), None);
        assert_eq!(typewriter.time_until_next(), Some(CARET_BLINK_INTERVAL));

        typewriter.advance(Duration::from_secs(10));
        assert_eq!(typewriter.text(), "");
        assert_eq!(typewriter.phase(), Phase::Idle);
        assert!(!typewriter.is_done());
    }

    #[test]
    fn test_empty_entries_are_skipped() {
        let config = TypewriterConfig::new(["", "Go", ""]).with_loop(false);
        let mut typewriter = Typewriter::new(config);

        assert_eq!(typewriter.phrase_count(), 1);
        typewriter.advance(Duration::from_secs(5));
        assert_eq!(typewriter.text(), "Go");
        assert!(typewriter.is_done());
    }

    #[test]
    fn test_zero_typing_speed_types_phrase_at_once() {
        let config = TypewriterConfig::new(["Rust"])
            .with_timing(Duration::ZERO, ms(40), ms(100), ms(1000));
        let mut typewriter = Typewriter::new(config);

        typewriter.advance_to(ms(99));
        assert_eq!(typewriter.text(), "");
        typewriter.advance_to(ms(100));
        assert_eq!(typewriter.text(), "Rust");
        assert_eq!(typewriter.phase(), Phase::Pausing);

        // Each 1160ms cycle retypes "Rust" at once; the ninth starts at 9380ms.
        typewriter.advance_to(Duration::from_secs(10));
        assert_eq!(typewriter.text(), "Rust");
        assert_eq!(typewriter.phase(), Phase::Pausing);
    }

    #[test]
    fn test_zero_delays_do_not_depend_on_call_count() {
        let config = TypewriterConfig::new(["Go", "Rust"])
            .with_timing(Duration::ZERO, Duration::ZERO, Duration::ZERO, ms(20));
        let mut stepped = Typewriter::new(config.clone());
        let mut jumped = Typewriter::new(config);

        for _ in 0..200 {
            stepped.advance(MS);
        }
        jumped.advance_to(ms(200));

        // Every 20ms one phrase is deleted and the next typed in full.
        assert_eq!(jumped.text(), "Go");
        assert_eq!(jumped.current_index(), 0);
        assert_eq!(stepped.frame(), jumped.frame());
        assert_eq!(stepped.current_index(), jumped.current_index());
    }

    #[test]
    fn test_all_zero_without_loop_finishes_in_one_advance() {
        let config = TypewriterConfig::new(["ab", "c"])
            .with_loop(false)
            .with_timing(Duration::ZERO, Duration::ZERO, Duration::ZERO, Duration::ZERO);
        let mut typewriter = Typewriter::new(config);

        assert!(typewriter.advance(Duration::ZERO));
        assert!(typewriter.is_done());
        assert_eq!(typewriter.text(), "c");
    }

    #[test]
    fn test_all_zero_loop_stops_after_one_cycle() {
        let config = TypewriterConfig::new(["ab"])
            .with_timing(Duration::ZERO, Duration::ZERO, Duration::ZERO, Duration::ZERO);
        let mut typewriter = Typewriter::new(config);

        typewriter.advance(Duration::ZERO);
        assert_eq!(typewriter.text(), "");
        assert_eq!(typewriter.phase(), Phase::Typing);
        // only the caret is still scheduled
        assert_eq!(typewriter.time_until_next(), Some(CARET_BLINK_INTERVAL));

        typewriter.advance(Duration::from_secs(1));
        assert_eq!(typewriter.text(), "");
        assert!(!typewriter.is_done());
    }

    #[test]
    fn test_far_future_advance_is_cheap() {
        let config = TypewriterConfig::new(["Hobbyist"]).with_loop(false);
        let mut done = Typewriter::new(config);
        done.advance(Duration::from_millis(u64::MAX));
        assert!(done.is_done());
        assert_eq!(done.text(), "Hobbyist");

        let mut looping = Typewriter::new(TypewriterConfig::new(["Go", "Rust"]));
        looping.advance(Duration::from_millis(u64::MAX));
        assert!(!looping.is_done());
        assert!(looping.current_phrase().unwrap().starts_with(looping.text()));
    }

    #[test]
    fn test_loop_skips_whole_cycles() {
        // One cycle: "Go" 2*10 + 20 + 2*5, "Rust" 4*10 + 20 + 4*5 = 130ms
        let config = TypewriterConfig::new(["Go", "Rust"])
            .with_timing(ms(10), ms(5), Duration::ZERO, ms(20));
        let mut stepped = Typewriter::new(config.clone());
        let mut jumped = Typewriter::new(config);

        texts_until(&mut stepped, ms(130 * 7 + 15));
        jumped.advance_to(ms(130 * 7 + 15));

        assert_eq!(jumped.text(), "G");
        assert_eq!(stepped.frame(), jumped.frame());
        assert_eq!(stepped.phase(), jumped.phase());
    }

    #[test]
    fn test_late_advance_catches_up() {
        let config = TypewriterConfig::new(["Go", "Rust"])
            .with_timing(ms(10), ms(5), Duration::ZERO, ms(20));
        let mut stepped = Typewriter::new(config.clone());
        let mut jumped = Typewriter::new(config);

        texts_until(&mut stepped, ms(1_234));
        jumped.advance_to(ms(1_234));

        assert_eq!(stepped.frame(), jumped.frame());
        assert_eq!(stepped.phase(), jumped.phase());
    }

    #[test]
    fn test_types_graphemes() {
        let config = TypewriterConfig::new(["日本"]).with_timing(ms(10), ms(10), Duration::ZERO, ms(10));
        let mut typewriter = Typewriter::new(config);

        typewriter.advance_to(ms(10));
        assert_eq!(typewriter.text(), "日");
        typewriter.advance_to(ms(20));
        assert_eq!(typewriter.text(), "日本");
    }

    fn config_strategy() -> impl Strategy<Value = TypewriterConfig> {
        (
            prop::collection::vec("[a-zA-Zé日 ]{0,6}", 0..4),
            0u64..30,
            0u64..30,
            0u64..50,
            0u64..60,
            any::<bool>(),
        )
            .prop_map(|(words, typing, deleting, start, between, looping)| {
                TypewriterConfig::new(words)
                    .with_loop(looping)
                    .with_timing(ms(typing), ms(deleting), ms(start), ms(between))
            })
    }

    proptest! {
        #[test]
        fn prop_text_is_prefix_of_current_phrase(config in config_strategy()) {
            let looping = config.looping;
            let mut typewriter = Typewriter::new(config);
            let count = typewriter.phrase_count();
            let mut index = typewriter.current_index();

            for _ in 0..600 {
                typewriter.advance(MS);
                let phrase = typewriter.current_phrase().unwrap_or("");
                prop_assert!(phrase.starts_with(typewriter.text()));

                if typewriter.current_index() != index {
                    prop_assert_eq!(typewriter.current_index(), (index + 1) % count);
                    index = typewriter.current_index();
                }
                if typewriter.is_done() {
                    prop_assert!(!looping);
                    prop_assert_eq!(typewriter.current_index(), count - 1);
                    prop_assert_eq!(typewriter.text(), phrase);
                }
            }
        }

        #[test]
        fn prop_first_phrase_typed_on_schedule(
            words in prop::collection::vec("[a-z]{1,8}", 1..4),
            typing in 0u64..40,
            start in 0u64..100,
        ) {
            let first = words[0].clone();
            let config = TypewriterConfig::new(words)
                .with_timing(ms(typing), ms(40), ms(start), ms(1000));
            let mut typewriter = Typewriter::new(config);

            typewriter.advance_to(ms(start + typing * first.len() as u64));
            prop_assert_eq!(typewriter.text(), first.as_str());
        }

        #[test]
        fn prop_loop_wraps_back_to_first_phrase(
            words in prop::collection::vec("[a-z]{1,5}", 1..4),
            typing in 0u64..10,
            deleting in 0u64..10,
            between in 0u64..20,
        ) {
            // With every delay at zero the loop has no duration and stops.
            prop_assume!(typing + deleting + between > 0);
            let count = words.len();
            let config = TypewriterConfig::new(words)
                .with_timing(ms(typing), ms(deleting), ms(0), ms(between));
            let mut typewriter = Typewriter::new(config);

            // One full cycle takes at most count * (5 * typing + between + 5 * deleting).
            let mut visited = vec![false; count];
            let mut wrapped = false;
            let mut last = 0;
            for _ in 0..(count as u64 * (5 * typing + between + 5 * deleting) * 2 + 10) {
                typewriter.advance(MS);
                prop_assert!(!typewriter.is_done());
                let index = typewriter.current_index();
                visited[index] = true;
                if index < last {
                    wrapped = true;
                }
                last = index;
            }

            prop_assert!(visited.iter().all(|seen| *seen));
            prop_assert!(count == 1 || wrapped);
        }

        #[test]
        fn prop_jump_matches_stepping(config in config_strategy(), until in 1u64..400) {
            let mut stepped = Typewriter::new(config.clone());
            let mut jumped = Typewriter::new(config);

            for _ in 0..until {
                stepped.advance(MS);
            }
            jumped.advance_to(ms(until));

            prop_assert_eq!(stepped.frame(), jumped.frame());
            prop_assert_eq!(stepped.phase(), jumped.phase());
            prop_assert_eq!(stepped.current_index(), jumped.current_index());
        }
    }
}
