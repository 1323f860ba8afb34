//! # Lesson Countdown
//!
//! Live countdown to a scheduled lesson with a two-phase release of the
//! join link: the link is fetched once when the lesson becomes imminent
//! (five minutes out), and one final time at zero if no link was obtained
//! by then, so session links are never distributed prematurely.
//!
//! The machine is deliberately pure: it consumes seed/tick/fetch-result
//! events and answers with the single side effect it wants performed
//! ([`CountdownAction::FetchLink`]). The 1-second ticker that drives it
//! lives in the client crate, owned explicitly rather than derived from a
//! render cycle. The countdown is seeded once from the server's
//! authoritative `time_left` and never re-synchronized against the wall
//! clock; drift over a very long-lived view is a known limitation.

/// Seconds before the start at which the join link becomes fetchable.
pub const JOIN_LINK_LEAD_SECS: i64 = 300;

/// Join-readiness states of the tracked lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    /// Nothing fetched yet.
    Unknown,
    /// The server reported no upcoming lesson; terminal.
    NoLesson,
    /// More than five minutes remain.
    Scheduled,
    /// Five minutes or less remain, link not yet obtained.
    ImminentNoLink,
    /// Five minutes or less remain, link in hand.
    ImminentWithLink,
    /// The countdown reached zero.
    Started,
}

/// Side effect requested by a countdown transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownAction {
    /// Fetch the join link now.
    FetchLink,
}

/// Countdown state machine for one lesson.
#[derive(Debug, Clone, Default)]
pub struct LessonCountdown {
    seeded: bool,
    no_lesson: bool,
    time_left: i64,
    link: Option<String>,
    imminent_fetch_issued: bool,
    final_fetch_issued: bool,
}

impl LessonCountdown {
    /// A countdown that has not been seeded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the countdown from the server's `time_left` snapshot.
    ///
    /// Replaces any previously tracked lesson wholesale. When the snapshot
    /// already falls inside the five-minute window the link fetch is
    /// requested immediately.
    pub fn seed(&mut self, time_left_secs: f64) -> Option<CountdownAction> {
        *self = Self {
            seeded: true,
            time_left: (time_left_secs.floor() as i64).max(0),
            ..Self::default()
        };
        self.gate_fetch()
    }

    /// Marks that the server reported no upcoming lesson.
    pub fn mark_no_lesson(&mut self) {
        *self = Self {
            no_lesson: true,
            ..Self::default()
        };
    }

    /// Advances the display countdown by one second.
    ///
    /// Purely local: the value is clamped at zero and never resynced.
    pub fn tick(&mut self) -> Option<CountdownAction> {
        if !self.seeded || self.time_left == 0 {
            return None;
        }
        self.time_left -= 1;
        self.gate_fetch()
    }

    // The imminent fetch fires exactly once when the window opens; the
    // final fetch fires at zero only if no link was obtained by then.
    fn gate_fetch(&mut self) -> Option<CountdownAction> {
        if self.link.is_some() {
            return None;
        }
        if self.time_left <= JOIN_LINK_LEAD_SECS && self.time_left > 0 && !self.imminent_fetch_issued
        {
            self.imminent_fetch_issued = true;
            return Some(CountdownAction::FetchLink);
        }
        if self.time_left == 0 && !self.final_fetch_issued {
            self.final_fetch_issued = true;
            // A fetch at seed time counts for both gates
            self.imminent_fetch_issued = true;
            return Some(CountdownAction::FetchLink);
        }
        None
    }

    /// Stores a fetched join link.
    pub fn link_fetched(&mut self, url: String) {
        self.link = Some(url);
    }

    /// Records a failed link fetch; the countdown continues undisturbed and
    /// no link control is shown.
    pub fn link_failed(&mut self) {}

    pub fn state(&self) -> CountdownState {
        if self.no_lesson {
            CountdownState::NoLesson
        } else if !self.seeded {
            CountdownState::Unknown
        } else if self.time_left == 0 {
            CountdownState::Started
        } else if self.time_left <= JOIN_LINK_LEAD_SECS {
            if self.link.is_some() {
                CountdownState::ImminentWithLink
            } else {
                CountdownState::ImminentNoLink
            }
        } else {
            CountdownState::Scheduled
        }
    }

    /// Seconds remaining, clamped at zero.
    pub fn time_left(&self) -> i64 {
        self.time_left
    }

    /// The join link, once fetched.
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Renders the countdown in the coarsest applicable unit.
    ///
    /// Each branch rounds up to its unit, so the label never understates
    /// the remaining time. At exactly zero a fixed "lesson started" label
    /// is rendered instead of "0 секунди".
    pub fn label(&self) -> String {
        format_time_left(self.time_left)
    }
}

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 3600;
const SECS_PER_DAY: i64 = 86400;

/// Formats a remaining-seconds value the way the dashboard displays it.
pub fn format_time_left(secs: i64) -> String {
    if secs <= 0 {
        return "Урокът започна".to_string();
    }
    if secs >= SECS_PER_DAY {
        return plural((secs as u64).div_ceil(SECS_PER_DAY as u64) as i64, "ден", "дни");
    }
    if secs >= SECS_PER_HOUR {
        return plural((secs as u64).div_ceil(SECS_PER_HOUR as u64) as i64, "час", "часа");
    }
    if secs >= SECS_PER_MINUTE {
        return plural((secs as u64).div_ceil(SECS_PER_MINUTE as u64) as i64, "минута", "минути");
    }
    plural(secs, "секунда", "секунди")
}

fn plural(n: i64, one: &str, many: &str) -> String {
    if n == 1 {
        format!("1 {one}")
    } else {
        format!("{n} {many}")
    }
}
