use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::{session::SessionRepo, subgroup::SubgroupRepo},
    domain::entities::{
        attendance::{Attendance, AttendanceStatus},
        role::Actor,
        training_session::TrainingSession,
    },
};

#[derive(Debug, Clone)]
pub struct CreateTrainingInput {
    pub subgroup_id: Option<Uuid>,
    pub starts_at: NaiveDateTime,
    pub ends_at: Option<NaiveDateTime>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTrainingInput {
    pub starts_at: Option<NaiveDateTime>,
    pub ends_at: Option<Option<NaiveDateTime>>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

#[async_trait]
pub trait TrainingRepo: Send + Sync {
    async fn create(
        &self,
        session_id: Uuid,
        input: &CreateTrainingInput,
    ) -> AppResult<TrainingSession>;
    async fn get(&self, id: Uuid) -> AppResult<Option<TrainingSession>>;
    async fn list_by_session(&self, session_id: Uuid) -> AppResult<Vec<TrainingSession>>;
    async fn update(&self, id: Uuid, input: &UpdateTrainingInput) -> AppResult<TrainingSession>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

#[async_trait]
pub trait AttendanceRepo: Send + Sync {
    /// Upsert on (training_session_id, player_id).
    async fn upsert(
        &self,
        training_session_id: Uuid,
        player_id: Uuid,
        status: AttendanceStatus,
        recorded_by: Option<Uuid>,
        recorded_at: NaiveDateTime,
    ) -> AppResult<Attendance>;
    async fn list_by_training(&self, training_session_id: Uuid) -> AppResult<Vec<Attendance>>;
}

#[derive(Clone)]
pub struct TrainingUseCases {
    trainings: Arc<dyn TrainingRepo>,
    attendance: Arc<dyn AttendanceRepo>,
    sessions: Arc<dyn SessionRepo>,
    subgroups: Arc<dyn SubgroupRepo>,
}

impl TrainingUseCases {
    pub fn new(
        trainings: Arc<dyn TrainingRepo>,
        attendance: Arc<dyn AttendanceRepo>,
        sessions: Arc<dyn SessionRepo>,
        subgroups: Arc<dyn SubgroupRepo>,
    ) -> Self {
        Self {
            trainings,
            attendance,
            sessions,
            subgroups,
        }
    }

    pub async fn create_training(
        &self,
        actor: &Actor,
        session_id: Uuid,
        input: CreateTrainingInput,
    ) -> AppResult<TrainingSession> {
        actor.require_staff()?;
        self.owned_session(actor, session_id).await?;
        if let Some(subgroup_id) = input.subgroup_id {
            let subgroup = self
                .subgroups
                .get(subgroup_id)
                .await?
                .ok_or(AppError::NotFound)?;
            if subgroup.session_id != session_id {
                return Err(AppError::validation(
                    "subgroup_id",
                    "Subgroup belongs to a different session",
                ));
            }
        }
        if let Some(ends_at) = input.ends_at
            && ends_at <= input.starts_at
        {
            return Err(AppError::validation(
                "ends_at",
                "End must come after start",
            ));
        }
        self.trainings.create(session_id, &input).await
    }

    pub async fn list_trainings(
        &self,
        actor: &Actor,
        session_id: Uuid,
    ) -> AppResult<Vec<TrainingSession>> {
        self.owned_session(actor, session_id).await?;
        self.trainings.list_by_session(session_id).await
    }

    pub async fn get_training(
        &self,
        actor: &Actor,
        training_id: Uuid,
    ) -> AppResult<TrainingSession> {
        self.owned_training(actor, training_id).await
    }

    pub async fn update_training(
        &self,
        actor: &Actor,
        training_id: Uuid,
        input: UpdateTrainingInput,
    ) -> AppResult<TrainingSession> {
        actor.require_staff()?;
        self.owned_training(actor, training_id).await?;
        self.trainings.update(training_id, &input).await
    }

    pub async fn delete_training(&self, actor: &Actor, training_id: Uuid) -> AppResult<()> {
        actor.require_staff()?;
        self.owned_training(actor, training_id).await?;
        self.trainings.delete(training_id).await
    }

    /// Record (or correct) one player's attendance; idempotent upsert.
    pub async fn record_attendance(
        &self,
        actor: &Actor,
        training_id: Uuid,
        player_id: Uuid,
        status: AttendanceStatus,
        now: NaiveDateTime,
    ) -> AppResult<Attendance> {
        actor.require_staff()?;
        let training = self.owned_training(actor, training_id).await?;
        if !self
            .sessions
            .is_player_in_roster(training.session_id, player_id)
            .await?
        {
            return Err(AppError::validation(
                "player_id",
                "Player is not on this session's roster",
            ));
        }
        self.attendance
            .upsert(training_id, player_id, status, Some(actor.id()), now)
            .await
    }

    /// Staff see the full sheet; a player sees only their own rows.
    pub async fn list_attendance(
        &self,
        actor: &Actor,
        training_id: Uuid,
    ) -> AppResult<Vec<Attendance>> {
        self.owned_training(actor, training_id).await?;
        let records = self.attendance.list_by_training(training_id).await?;
        Ok(match actor {
            Actor::Admin { .. } | Actor::Coach { .. } => records,
            Actor::Player { id, .. } => records
                .into_iter()
                .filter(|record| record.player_id == *id)
                .collect(),
        })
    }

    async fn owned_training(
        &self,
        actor: &Actor,
        training_id: Uuid,
    ) -> AppResult<TrainingSession> {
        let training = self
            .trainings
            .get(training_id)
            .await?
            .ok_or(AppError::NotFound)?;
        self.owned_session(actor, training.session_id).await?;
        Ok(training)
    }

    async fn owned_session(&self, actor: &Actor, session_id: Uuid) -> AppResult<()> {
        let session = self
            .sessions
            .get(session_id)
            .await?
            .ok_or(AppError::NotFound)?;
        actor.require_team(session.team_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        InMemoryAttendanceRepo, InMemorySessionRepo, InMemorySubgroupRepo, InMemoryTrainingRepo,
        create_test_player, create_test_session,
    };

    fn now() -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap()
    }

    async fn setup() -> (TrainingUseCases, Actor, Uuid, Uuid) {
        let team_id = Uuid::new_v4();
        let session = create_test_session(team_id, |_| {});
        let session_id = session.id;
        let player = create_test_player(team_id, |_| {});
        let player_id = player.id;

        let sessions = Arc::new(InMemorySessionRepo::with_sessions(vec![session]));
        sessions.seed_player(player);
        sessions.add_player(session_id, player_id).await.unwrap();

        let use_cases = TrainingUseCases::new(
            Arc::new(InMemoryTrainingRepo::new()),
            Arc::new(InMemoryAttendanceRepo::new()),
            sessions,
            Arc::new(InMemorySubgroupRepo::new()),
        );
        let actor = Actor::Coach {
            id: Uuid::new_v4(),
            team_id,
        };
        (use_cases, actor, session_id, player_id)
    }

    #[tokio::test]
    async fn attendance_upsert_keeps_one_row_per_player() {
        let (use_cases, actor, session_id, player_id) = setup().await;
        let training = use_cases
            .create_training(
                &actor,
                session_id,
                CreateTrainingInput {
                    subgroup_id: None,
                    starts_at: now(),
                    ends_at: None,
                    location: None,
                    notes: None,
                },
            )
            .await
            .unwrap();

        use_cases
            .record_attendance(&actor, training.id, player_id, AttendanceStatus::Absent, now())
            .await
            .unwrap();
        use_cases
            .record_attendance(&actor, training.id, player_id, AttendanceStatus::Late, now())
            .await
            .unwrap();

        let sheet = use_cases.list_attendance(&actor, training.id).await.unwrap();
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet[0].status, AttendanceStatus::Late);
    }

    #[tokio::test]
    async fn player_sees_only_own_attendance() {
        let (use_cases, coach, session_id, player_id) = setup().await;
        let training = use_cases
            .create_training(
                &coach,
                session_id,
                CreateTrainingInput {
                    subgroup_id: None,
                    starts_at: now(),
                    ends_at: None,
                    location: None,
                    notes: None,
                },
            )
            .await
            .unwrap();
        use_cases
            .record_attendance(&coach, training.id, player_id, AttendanceStatus::Present, now())
            .await
            .unwrap();

        let other = Actor::Player {
            id: Uuid::new_v4(),
            team_id: coach.team_id(),
        };
        let seen = use_cases.list_attendance(&other, training.id).await.unwrap();
        assert!(seen.is_empty());

        let me = Actor::Player {
            id: player_id,
            team_id: coach.team_id(),
        };
        let seen = use_cases.list_attendance(&me, training.id).await.unwrap();
        assert_eq!(seen.len(), 1);
    }

    #[tokio::test]
    async fn record_rejects_unrostered_player() {
        let (use_cases, actor, session_id, _) = setup().await;
        let training = use_cases
            .create_training(
                &actor,
                session_id,
                CreateTrainingInput {
                    subgroup_id: None,
                    starts_at: now(),
                    ends_at: None,
                    location: None,
                    notes: None,
                },
            )
            .await
            .unwrap();
        let result = use_cases
            .record_attendance(
                &actor,
                training.id,
                Uuid::new_v4(),
                AttendanceStatus::Present,
                now(),
            )
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
