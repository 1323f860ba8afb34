//! # Marketplace API
//!
//! The JSON-over-HTTP contracts the client core consumes, behind the
//! [`MarketplaceApi`] trait so services can be exercised against the mock
//! in [`crate::mock`]. Every request carries the session's bearer token;
//! a missing token or a 401 is the auth collaborator's concern and is
//! surfaced here as an ordinary error.

use async_trait::async_trait;
use eyre::{eyre, Result, WrapErr};
use std::time::Duration;

use uchionline_core::models::availability::{
    DaySlots, GetAvailabilityRequest, GetAvailabilityResponse, SaveAvailabilityRequest, WireSlot,
};
use uchionline_core::models::booking::BookLessonRequest;
use uchionline_core::models::lesson::{Lesson, LessonLinkResponse, NextLesson, NextLessonReply};

use crate::config::ClientConfig;

/// Explicit authentication context for one signed-in user.
///
/// Injected into the client instead of being read from ambient storage, so
/// ownership of the token is always visible at the call site.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

/// The server contracts the availability, booking, and lesson services use.
#[async_trait]
pub trait MarketplaceApi: Send + Sync {
    /// `POST /get-availability`: a tutor's saved template, wire space.
    async fn get_availability(&self, tutor_id: &str, with_booking: bool) -> Result<Vec<WireSlot>>;

    /// `POST /save-availability`: replaces the template, wire space.
    async fn save_availability(&self, tutor_id: &str, availability: Vec<DaySlots>) -> Result<()>;

    /// `POST /book-lesson/{tutor_id}`: only the status code matters.
    async fn book_lesson(&self, tutor_id: &str, request: BookLessonRequest) -> Result<()>;

    /// `GET /students/next-lesson`: `None` when nothing is scheduled.
    async fn next_lesson(&self) -> Result<Option<NextLesson>>;

    /// `GET /get-lesson-link`: the gated live-session URL.
    async fn lesson_link(&self) -> Result<String>;

    /// `GET /lessons`: every upcoming lesson of the current user.
    async fn list_lessons(&self) -> Result<Vec<Lesson>>;

    /// `DELETE /delete-lesson/{id}`: cancels a lesson.
    async fn delete_lesson(&self, lesson_id: &str) -> Result<()>;
}

/// `reqwest`-backed implementation of [`MarketplaceApi`].
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
    session: Session,
}

impl HttpApi {
    /// Builds a client for the configured server with the given session.
    pub fn new(config: &ClientConfig, session: Session) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .wrap_err("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(response: reqwest::Response, context: &str) -> Result<reqwest::Response> {
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(eyre!("{context} failed ({status}): {text}"));
        }
        Ok(response)
    }
}

#[async_trait]
impl MarketplaceApi for HttpApi {
    async fn get_availability(&self, tutor_id: &str, with_booking: bool) -> Result<Vec<WireSlot>> {
        let request = GetAvailabilityRequest {
            tutor_id: tutor_id.to_string(),
            with_booking: with_booking.then_some(true),
        };

        let response = self
            .client
            .post(self.url("/get-availability"))
            .bearer_auth(self.session.token())
            .json(&request)
            .send()
            .await?;

        let body: GetAvailabilityResponse = Self::check(response, "Fetching availability")
            .await?
            .json()
            .await?;
        Ok(body.availability)
    }

    async fn save_availability(&self, tutor_id: &str, availability: Vec<DaySlots>) -> Result<()> {
        let request = SaveAvailabilityRequest {
            tutor_id: tutor_id.to_string(),
            availability,
        };

        let response = self
            .client
            .post(self.url("/save-availability"))
            .bearer_auth(self.session.token())
            .json(&request)
            .send()
            .await?;

        Self::check(response, "Saving availability").await?;
        Ok(())
    }

    async fn book_lesson(&self, tutor_id: &str, request: BookLessonRequest) -> Result<()> {
        let response = self
            .client
            .post(self.url(&format!("/book-lesson/{tutor_id}")))
            .bearer_auth(self.session.token())
            .json(&request)
            .send()
            .await?;

        Self::check(response, "Booking lesson").await?;
        Ok(())
    }

    async fn next_lesson(&self) -> Result<Option<NextLesson>> {
        let response = self
            .client
            .get(self.url("/students/next-lesson"))
            .bearer_auth(self.session.token())
            .send()
            .await?;

        let reply: NextLessonReply = Self::check(response, "Fetching next lesson")
            .await?
            .json()
            .await?;

        match reply {
            NextLessonReply::Lesson(lesson) => Ok(Some(*lesson)),
            NextLessonReply::NoLesson { .. } => Ok(None),
        }
    }

    async fn lesson_link(&self) -> Result<String> {
        let response = self
            .client
            .get(self.url("/get-lesson-link"))
            .bearer_auth(self.session.token())
            .send()
            .await?;

        let body: LessonLinkResponse = Self::check(response, "Fetching lesson link")
            .await?
            .json()
            .await?;
        Ok(body.lesson_link)
    }

    async fn list_lessons(&self) -> Result<Vec<Lesson>> {
        let response = self
            .client
            .get(self.url("/lessons"))
            .bearer_auth(self.session.token())
            .send()
            .await?;

        Ok(Self::check(response, "Fetching lessons").await?.json().await?)
    }

    async fn delete_lesson(&self, lesson_id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/delete-lesson/{lesson_id}")))
            .bearer_auth(self.session.token())
            .send()
            .await?;

        Self::check(response, "Deleting lesson").await?;
        Ok(())
    }
}
