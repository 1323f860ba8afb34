//! # Lesson Watcher
//!
//! Owns the countdown to the next lesson and the explicit 1-second ticker
//! that drives it. The ticker lives inside [`LessonWatcher::run`], so it is
//! created per watched lesson and dropped with the future: loading a new
//! lesson replaces the countdown wholesale and no two tickers can compete.
//!
//! Join-link fetch failures degrade silently (logged, countdown continues,
//! no link shown); a next-lesson fetch failure lands in an explicit
//! no-lesson state instead of a retry loop.

use std::time::Duration;

use eyre::Result;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

use uchionline_core::countdown::{CountdownAction, CountdownState, LessonCountdown};
use uchionline_core::models::lesson::{Lesson, NextLesson};

use crate::api::MarketplaceApi;

/// Countdown runner for the dashboard's next-lesson card.
#[derive(Default)]
pub struct LessonWatcher {
    countdown: LessonCountdown,
    lesson: Option<NextLesson>,
}

impl LessonWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn countdown(&self) -> &LessonCountdown {
        &self.countdown
    }

    pub fn lesson(&self) -> Option<&NextLesson> {
        self.lesson.as_ref()
    }

    /// Fetches the next lesson and seeds the countdown from the server's
    /// authoritative `time_left` snapshot.
    ///
    /// Replaces any previously watched lesson. A fetch error leaves the
    /// watcher in the no-lesson state and is surfaced once to the caller;
    /// the watcher never retries on its own.
    pub async fn load<A: MarketplaceApi>(&mut self, api: &A) -> Result<()> {
        match api.next_lesson().await {
            Ok(Some(lesson)) => {
                let action = self.countdown.seed(lesson.time_left);
                info!(
                    scheduled_at = %lesson.scheduled_at,
                    time_left = lesson.time_left,
                    "Watching next lesson"
                );
                self.lesson = Some(lesson);
                if action == Some(CountdownAction::FetchLink) {
                    self.fetch_link(api).await;
                }
                Ok(())
            }
            Ok(None) => {
                self.countdown.mark_no_lesson();
                self.lesson = None;
                Ok(())
            }
            Err(err) => {
                self.countdown.mark_no_lesson();
                self.lesson = None;
                Err(err)
            }
        }
    }

    /// Advances the countdown by one second and performs the gated link
    /// fetch when the state machine asks for it.
    pub async fn tick<A: MarketplaceApi>(&mut self, api: &A) {
        if self.countdown.tick() == Some(CountdownAction::FetchLink) {
            self.fetch_link(api).await;
        }
    }

    /// Runs the 1-second ticker until the lesson starts, invoking
    /// `on_update` after every tick for rendering.
    ///
    /// Returns immediately when nothing is being watched. Dropping the
    /// returned future cancels the ticker.
    pub async fn run<A: MarketplaceApi>(
        &mut self,
        api: &A,
        mut on_update: impl FnMut(&LessonCountdown),
    ) {
        if matches!(
            self.countdown.state(),
            CountdownState::Unknown | CountdownState::NoLesson
        ) {
            return;
        }

        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick of a fresh interval completes immediately
        ticker.tick().await;

        while self.countdown.state() != CountdownState::Started {
            ticker.tick().await;
            self.tick(api).await;
            on_update(&self.countdown);
        }
    }

    // Secondary fetch: failures are logged and the countdown continues
    async fn fetch_link<A: MarketplaceApi>(&mut self, api: &A) {
        match api.lesson_link().await {
            Ok(url) => self.countdown.link_fetched(url),
            Err(err) => {
                warn!(%err, "Join link fetch failed; countdown continues without it");
                self.countdown.link_failed();
            }
        }
    }
}

/// The lessons page: a local list kept in sync with deletions.
#[derive(Default)]
pub struct LessonList {
    lessons: Vec<Lesson>,
}

impl LessonList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Reloads every upcoming lesson of the current user.
    pub async fn load<A: MarketplaceApi>(&mut self, api: &A) -> Result<()> {
        self.lessons = api.list_lessons().await?;
        Ok(())
    }

    /// Cancels a lesson and drops it from the local list on success.
    pub async fn delete<A: MarketplaceApi>(&mut self, api: &A, lesson_id: &str) -> Result<()> {
        api.delete_lesson(lesson_id).await?;
        self.lessons.retain(|lesson| lesson.id != lesson_id);
        Ok(())
    }
}
