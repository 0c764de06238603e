use async_trait::async_trait;
use mockall::mock;
use rollcall_core::{
    errors::RollcallResult,
    models::{
        availability::{Availability, AvailabilityRecord},
        comment::Comment,
        schedule::{Candidate, Schedule},
        user::User,
    },
    store::{CommentStore, ScheduleStore, UserStore, VoteStore},
};
use uuid::Uuid;

// Mock stores for testing
mock! {
    pub ScheduleRepo {}

    #[async_trait]
    impl ScheduleStore for ScheduleRepo {
        async fn get_schedule(&self, schedule_id: Uuid) -> RollcallResult<Option<Schedule>>;

        async fn get_candidates(&self, schedule_id: Uuid) -> RollcallResult<Vec<Candidate>>;
    }
}

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserStore for UserRepo {
        async fn upsert_user(&self, user: &User) -> RollcallResult<User>;

        async fn get_user(&self, user_id: i64) -> RollcallResult<Option<User>>;
    }
}

mock! {
    pub VoteRepo {}

    #[async_trait]
    impl VoteStore for VoteRepo {
        async fn get_availability(
            &self,
            schedule_id: Uuid,
            candidate_id: i64,
            user_id: i64,
        ) -> RollcallResult<Option<Availability>>;

        async fn upsert_availability(
            &self,
            schedule_id: Uuid,
            candidate_id: i64,
            user_id: i64,
            availability: Availability,
        ) -> RollcallResult<Availability>;

        async fn get_availabilities(
            &self,
            schedule_id: Uuid,
        ) -> RollcallResult<Vec<AvailabilityRecord>>;
    }
}

mock! {
    pub CommentRepo {}

    #[async_trait]
    impl CommentStore for CommentRepo {
        async fn upsert_comment(
            &self,
            schedule_id: Uuid,
            user_id: i64,
            comment: &str,
        ) -> RollcallResult<Comment>;

        async fn get_comments(&self, schedule_id: Uuid) -> RollcallResult<Vec<Comment>>;
    }
}
