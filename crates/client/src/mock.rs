use async_trait::async_trait;
use eyre::Result;
use mockall::mock;

use uchionline_core::models::availability::{DaySlots, WireSlot};
use uchionline_core::models::booking::BookLessonRequest;
use uchionline_core::models::lesson::{Lesson, NextLesson};

use crate::api::MarketplaceApi;

// Mock API for testing the availability, booking, and lesson services
mock! {
    pub Api {}

    #[async_trait]
    impl MarketplaceApi for Api {
        async fn get_availability(
            &self,
            tutor_id: &str,
            with_booking: bool,
        ) -> Result<Vec<WireSlot>>;

        async fn save_availability(
            &self,
            tutor_id: &str,
            availability: Vec<DaySlots>,
        ) -> Result<()>;

        async fn book_lesson(
            &self,
            tutor_id: &str,
            request: BookLessonRequest,
        ) -> Result<()>;

        async fn next_lesson(&self) -> Result<Option<NextLesson>>;

        async fn lesson_link(&self) -> Result<String>;

        async fn list_lessons(&self) -> Result<Vec<Lesson>>;

        async fn delete_lesson(&self, lesson_id: &str) -> Result<()>;
    }
}
