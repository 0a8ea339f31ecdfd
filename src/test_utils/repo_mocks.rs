//! In-memory mock implementations for the repository traits.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::{
        auth::{AdminRepo, CreateAdminRecord},
        coach::{CoachRepo, CreateCoachRecord, UpdateCoachInput},
        event::{CreateEventInput, EventRepo, UpdateEventInput},
        payment::{PaymentRepo, UpsertPaymentRecord},
        player::{CreatePlayerRecord, PlayerRepo, UpdatePlayerInput},
        session::{CreateSessionInput, SessionRepo, UpdateSessionInput},
        subgroup::{CreateSubgroupInput, SubgroupRepo, UpdateSubgroupInput},
        team::{TeamRepo, UpdateTeamInput},
        training::{AttendanceRepo, CreateTrainingInput, TrainingRepo, UpdateTrainingInput},
    },
    domain::entities::{
        admin::Admin,
        attendance::{Attendance, AttendanceStatus},
        coach::Coach,
        event::Event,
        payment::{Payment, SubjectType},
        player::Player,
        session::Session,
        subgroup::Subgroup,
        team::Team,
        training_session::TrainingSession,
    },
};

fn now() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

// ============================================================================
// InMemoryTeamRepo
// ============================================================================

#[derive(Default)]
pub struct InMemoryTeamRepo {
    pub teams: Mutex<HashMap<Uuid, Team>>,
}

impl InMemoryTeamRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepo for InMemoryTeamRepo {
    async fn create(&self, name: &str, sport: Option<&str>) -> AppResult<Team> {
        let team = Team {
            id: Uuid::new_v4(),
            name: name.to_string(),
            sport: sport.map(str::to_string),
            logo_path: None,
            created_at: now(),
        };
        self.teams.lock().unwrap().insert(team.id, team.clone());
        Ok(team)
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Team>> {
        Ok(self.teams.lock().unwrap().get(&id).cloned())
    }

    async fn update(&self, id: Uuid, input: &UpdateTeamInput) -> AppResult<Team> {
        let mut teams = self.teams.lock().unwrap();
        let team = teams.get_mut(&id).ok_or(AppError::NotFound)?;
        if let Some(name) = &input.name {
            team.name = name.clone();
        }
        if let Some(sport) = &input.sport {
            team.sport = Some(sport.clone());
        }
        Ok(team.clone())
    }

    async fn set_logo_path(&self, id: Uuid, path: &str) -> AppResult<()> {
        let mut teams = self.teams.lock().unwrap();
        let team = teams.get_mut(&id).ok_or(AppError::NotFound)?;
        team.logo_path = Some(path.to_string());
        Ok(())
    }
}

// ============================================================================
// InMemoryAdminRepo
// ============================================================================

#[derive(Default)]
pub struct InMemoryAdminRepo {
    pub admins: Mutex<HashMap<Uuid, Admin>>,
}

impl InMemoryAdminRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminRepo for InMemoryAdminRepo {
    async fn create(&self, team_id: Uuid, record: &CreateAdminRecord) -> AppResult<Admin> {
        let admin = Admin {
            id: Uuid::new_v4(),
            team_id,
            name: record.name.clone(),
            email: record.email.clone(),
            password_hash: record.password_hash.clone(),
            created_at: now(),
        };
        self.admins.lock().unwrap().insert(admin.id, admin.clone());
        Ok(admin)
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Admin>> {
        Ok(self.admins.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        Ok(self
            .admins
            .lock()
            .unwrap()
            .values()
            .find(|a| a.email.eq_ignore_ascii_case(email))
            .cloned())
    }
}

// ============================================================================
// InMemoryPlayerRepo
// ============================================================================

#[derive(Default)]
pub struct InMemoryPlayerRepo {
    pub players: Mutex<HashMap<Uuid, Player>>,
}

impl InMemoryPlayerRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_players(players: Vec<Player>) -> Self {
        let map = players.into_iter().map(|p| (p.id, p)).collect();
        Self {
            players: Mutex::new(map),
        }
    }
}

#[async_trait]
impl PlayerRepo for InMemoryPlayerRepo {
    async fn create(&self, team_id: Uuid, record: &CreatePlayerRecord) -> AppResult<Player> {
        let player = Player {
            id: Uuid::new_v4(),
            team_id,
            name: record.name.clone(),
            email: record.email.clone(),
            password_hash: record.password_hash.clone(),
            photo_path: None,
            monthly_fee_cents: record.monthly_fee_cents,
            inscription_fee_cents: record.inscription_fee_cents,
            inscription_paid_at: None,
            last_payment_date: None,
            created_at: now(),
            updated_at: now(),
        };
        self.players
            .lock()
            .unwrap()
            .insert(player.id, player.clone());
        Ok(player)
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Player>> {
        Ok(self.players.lock().unwrap().get(&id).cloned())
    }

    async fn list_by_team(&self, team_id: Uuid) -> AppResult<Vec<Player>> {
        Ok(self
            .players
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.team_id == team_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, input: &UpdatePlayerInput) -> AppResult<Player> {
        let mut players = self.players.lock().unwrap();
        let player = players.get_mut(&id).ok_or(AppError::NotFound)?;
        if let Some(name) = &input.name {
            player.name = name.clone();
        }
        if let Some(email) = &input.email {
            player.email = Some(email.clone());
        }
        if let Some(fee) = input.monthly_fee_cents {
            player.monthly_fee_cents = fee;
        }
        if let Some(fee) = input.inscription_fee_cents {
            player.inscription_fee_cents = fee;
        }
        if let Some(paid_at) = input.inscription_paid_at {
            player.inscription_paid_at = Some(paid_at);
        }
        if let Some(date) = input.last_payment_date {
            player.last_payment_date = Some(date);
        }
        player.updated_at = now();
        Ok(player.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.players
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::NotFound)
    }

    async fn set_photo_path(&self, id: Uuid, path: &str) -> AppResult<()> {
        let mut players = self.players.lock().unwrap();
        let player = players.get_mut(&id).ok_or(AppError::NotFound)?;
        player.photo_path = Some(path.to_string());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Player>> {
        Ok(self
            .players
            .lock()
            .unwrap()
            .values()
            .find(|p| {
                p.email
                    .as_deref()
                    .is_some_and(|e| e.eq_ignore_ascii_case(email))
            })
            .cloned())
    }
}

// ============================================================================
// InMemoryCoachRepo
// ============================================================================

#[derive(Default)]
pub struct InMemoryCoachRepo {
    pub coaches: Mutex<HashMap<Uuid, Coach>>,
}

impl InMemoryCoachRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_coaches(coaches: Vec<Coach>) -> Self {
        let map = coaches.into_iter().map(|c| (c.id, c)).collect();
        Self {
            coaches: Mutex::new(map),
        }
    }
}

#[async_trait]
impl CoachRepo for InMemoryCoachRepo {
    async fn create(&self, team_id: Uuid, record: &CreateCoachRecord) -> AppResult<Coach> {
        let coach = Coach {
            id: Uuid::new_v4(),
            team_id,
            name: record.name.clone(),
            email: record.email.clone(),
            password_hash: record.password_hash.clone(),
            photo_path: None,
            agreed_salary_cents: record.agreed_salary_cents,
            created_at: now(),
        };
        self.coaches.lock().unwrap().insert(coach.id, coach.clone());
        Ok(coach)
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Coach>> {
        Ok(self.coaches.lock().unwrap().get(&id).cloned())
    }

    async fn list_by_team(&self, team_id: Uuid) -> AppResult<Vec<Coach>> {
        Ok(self
            .coaches
            .lock()
            .unwrap()
            .values()
            .filter(|c| c.team_id == team_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, input: &UpdateCoachInput) -> AppResult<Coach> {
        let mut coaches = self.coaches.lock().unwrap();
        let coach = coaches.get_mut(&id).ok_or(AppError::NotFound)?;
        if let Some(name) = &input.name {
            coach.name = name.clone();
        }
        if let Some(email) = &input.email {
            coach.email = Some(email.clone());
        }
        if let Some(salary) = input.agreed_salary_cents {
            coach.agreed_salary_cents = salary;
        }
        Ok(coach.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.coaches
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::NotFound)
    }

    async fn set_photo_path(&self, id: Uuid, path: &str) -> AppResult<()> {
        let mut coaches = self.coaches.lock().unwrap();
        let coach = coaches.get_mut(&id).ok_or(AppError::NotFound)?;
        coach.photo_path = Some(path.to_string());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Coach>> {
        Ok(self
            .coaches
            .lock()
            .unwrap()
            .values()
            .find(|c| {
                c.email
                    .as_deref()
                    .is_some_and(|e| e.eq_ignore_ascii_case(email))
            })
            .cloned())
    }
}

// ============================================================================
// InMemorySessionRepo
// ============================================================================

/// Roster lookups need full player/coach records, so tests seed them with
/// `seed_player`/`seed_coach` before adding ids to the roster.
#[derive(Default)]
pub struct InMemorySessionRepo {
    pub sessions: Mutex<HashMap<Uuid, Session>>,
    pub session_players: Mutex<HashSet<(Uuid, Uuid)>>,
    pub session_coaches: Mutex<HashSet<(Uuid, Uuid)>>,
    pub players: Mutex<HashMap<Uuid, Player>>,
    pub coaches: Mutex<HashMap<Uuid, Coach>>,
}

impl InMemorySessionRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sessions(sessions: Vec<Session>) -> Self {
        let map = sessions.into_iter().map(|s| (s.id, s)).collect();
        Self {
            sessions: Mutex::new(map),
            ..Self::default()
        }
    }

    pub fn seed_player(&self, player: Player) {
        self.players.lock().unwrap().insert(player.id, player);
    }

    pub fn seed_coach(&self, coach: Coach) {
        self.coaches.lock().unwrap().insert(coach.id, coach);
    }
}

#[async_trait]
impl SessionRepo for InMemorySessionRepo {
    async fn create(&self, team_id: Uuid, input: &CreateSessionInput) -> AppResult<Session> {
        let session = Session {
            id: Uuid::new_v4(),
            team_id,
            name: input.name.clone(),
            start_date: input.start_date,
            end_date: input.end_date,
            created_at: now(),
        };
        self.sessions
            .lock()
            .unwrap()
            .insert(session.id, session.clone());
        Ok(session)
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Session>> {
        Ok(self.sessions.lock().unwrap().get(&id).cloned())
    }

    async fn list_by_team(&self, team_id: Uuid) -> AppResult<Vec<Session>> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .values()
            .filter(|s| s.team_id == team_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, input: &UpdateSessionInput) -> AppResult<Session> {
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions.get_mut(&id).ok_or(AppError::NotFound)?;
        if let Some(name) = &input.name {
            session.name = name.clone();
        }
        if let Some(start) = input.start_date {
            session.start_date = start;
        }
        if let Some(end) = input.end_date {
            session.end_date = end;
        }
        Ok(session.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.sessions
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::NotFound)
    }

    async fn add_player(&self, session_id: Uuid, player_id: Uuid) -> AppResult<()> {
        self.session_players
            .lock()
            .unwrap()
            .insert((session_id, player_id));
        Ok(())
    }

    async fn remove_player(&self, session_id: Uuid, player_id: Uuid) -> AppResult<()> {
        self.session_players
            .lock()
            .unwrap()
            .remove(&(session_id, player_id));
        Ok(())
    }

    async fn add_coach(&self, session_id: Uuid, coach_id: Uuid) -> AppResult<()> {
        self.session_coaches
            .lock()
            .unwrap()
            .insert((session_id, coach_id));
        Ok(())
    }

    async fn remove_coach(&self, session_id: Uuid, coach_id: Uuid) -> AppResult<()> {
        self.session_coaches
            .lock()
            .unwrap()
            .remove(&(session_id, coach_id));
        Ok(())
    }

    async fn is_player_in_roster(&self, session_id: Uuid, player_id: Uuid) -> AppResult<bool> {
        Ok(self
            .session_players
            .lock()
            .unwrap()
            .contains(&(session_id, player_id)))
    }

    async fn list_roster_players(&self, session_id: Uuid) -> AppResult<Vec<Player>> {
        let players = self.players.lock().unwrap();
        Ok(self
            .session_players
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == session_id)
            .filter_map(|(_, p)| players.get(p).cloned())
            .collect())
    }

    async fn list_roster_coaches(&self, session_id: Uuid) -> AppResult<Vec<Coach>> {
        let coaches = self.coaches.lock().unwrap();
        Ok(self
            .session_coaches
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == session_id)
            .filter_map(|(_, c)| coaches.get(c).cloned())
            .collect())
    }
}

// ============================================================================
// InMemorySubgroupRepo
// ============================================================================

#[derive(Default)]
pub struct InMemorySubgroupRepo {
    pub subgroups: Mutex<HashMap<Uuid, Subgroup>>,
    pub members: Mutex<HashSet<(Uuid, Uuid)>>,
    pub players: Mutex<HashMap<Uuid, Player>>,
}

impl InMemorySubgroupRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_player(&self, player: Player) {
        self.players.lock().unwrap().insert(player.id, player);
    }
}

#[async_trait]
impl SubgroupRepo for InMemorySubgroupRepo {
    async fn create(&self, session_id: Uuid, input: &CreateSubgroupInput) -> AppResult<Subgroup> {
        let subgroup = Subgroup {
            id: Uuid::new_v4(),
            session_id,
            name: input.name.clone(),
            coach_id: input.coach_id,
            created_at: now(),
        };
        self.subgroups
            .lock()
            .unwrap()
            .insert(subgroup.id, subgroup.clone());
        Ok(subgroup)
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Subgroup>> {
        Ok(self.subgroups.lock().unwrap().get(&id).cloned())
    }

    async fn list_by_session(&self, session_id: Uuid) -> AppResult<Vec<Subgroup>> {
        Ok(self
            .subgroups
            .lock()
            .unwrap()
            .values()
            .filter(|s| s.session_id == session_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, input: &UpdateSubgroupInput) -> AppResult<Subgroup> {
        let mut subgroups = self.subgroups.lock().unwrap();
        let subgroup = subgroups.get_mut(&id).ok_or(AppError::NotFound)?;
        if let Some(name) = &input.name {
            subgroup.name = name.clone();
        }
        if let Some(coach_id) = input.coach_id {
            subgroup.coach_id = coach_id;
        }
        Ok(subgroup.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.subgroups
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::NotFound)?;
        self.members.lock().unwrap().retain(|(s, _)| *s != id);
        Ok(())
    }

    async fn assign_player(
        &self,
        subgroup_id: Uuid,
        session_id: Uuid,
        player_id: Uuid,
    ) -> AppResult<()> {
        let session_subgroups: HashSet<Uuid> = self
            .subgroups
            .lock()
            .unwrap()
            .values()
            .filter(|s| s.session_id == session_id)
            .map(|s| s.id)
            .collect();
        let mut members = self.members.lock().unwrap();
        members.retain(|(s, p)| !(session_subgroups.contains(s) && *p == player_id));
        members.insert((subgroup_id, player_id));
        Ok(())
    }

    async fn unassign_player(&self, subgroup_id: Uuid, player_id: Uuid) -> AppResult<()> {
        self.members.lock().unwrap().remove(&(subgroup_id, player_id));
        Ok(())
    }

    async fn list_members(&self, subgroup_id: Uuid) -> AppResult<Vec<Player>> {
        let players = self.players.lock().unwrap();
        Ok(self
            .members
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == subgroup_id)
            .filter_map(|(_, p)| players.get(p).cloned())
            .collect())
    }
}

// ============================================================================
// InMemoryTrainingRepo
// ============================================================================

#[derive(Default)]
pub struct InMemoryTrainingRepo {
    pub trainings: Mutex<HashMap<Uuid, TrainingSession>>,
}

impl InMemoryTrainingRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TrainingRepo for InMemoryTrainingRepo {
    async fn create(
        &self,
        session_id: Uuid,
        input: &CreateTrainingInput,
    ) -> AppResult<TrainingSession> {
        let training = TrainingSession {
            id: Uuid::new_v4(),
            session_id,
            subgroup_id: input.subgroup_id,
            starts_at: input.starts_at,
            ends_at: input.ends_at,
            location: input.location.clone(),
            notes: input.notes.clone(),
            created_at: now(),
        };
        self.trainings
            .lock()
            .unwrap()
            .insert(training.id, training.clone());
        Ok(training)
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<TrainingSession>> {
        Ok(self.trainings.lock().unwrap().get(&id).cloned())
    }

    async fn list_by_session(&self, session_id: Uuid) -> AppResult<Vec<TrainingSession>> {
        Ok(self
            .trainings
            .lock()
            .unwrap()
            .values()
            .filter(|t| t.session_id == session_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, input: &UpdateTrainingInput) -> AppResult<TrainingSession> {
        let mut trainings = self.trainings.lock().unwrap();
        let training = trainings.get_mut(&id).ok_or(AppError::NotFound)?;
        if let Some(starts_at) = input.starts_at {
            training.starts_at = starts_at;
        }
        if let Some(ends_at) = input.ends_at {
            training.ends_at = ends_at;
        }
        if let Some(location) = &input.location {
            training.location = Some(location.clone());
        }
        if let Some(notes) = &input.notes {
            training.notes = Some(notes.clone());
        }
        Ok(training.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.trainings
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::NotFound)
    }
}

// ============================================================================
// InMemoryAttendanceRepo
// ============================================================================

#[derive(Default)]
pub struct InMemoryAttendanceRepo {
    pub records: Mutex<HashMap<(Uuid, Uuid), Attendance>>,
}

impl InMemoryAttendanceRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AttendanceRepo for InMemoryAttendanceRepo {
    async fn upsert(
        &self,
        training_session_id: Uuid,
        player_id: Uuid,
        status: AttendanceStatus,
        recorded_by: Option<Uuid>,
        recorded_at: NaiveDateTime,
    ) -> AppResult<Attendance> {
        let mut records = self.records.lock().unwrap();
        let key = (training_session_id, player_id);
        let id = records.get(&key).map(|r| r.id).unwrap_or_else(Uuid::new_v4);
        let record = Attendance {
            id,
            training_session_id,
            player_id,
            status,
            recorded_by,
            recorded_at,
        };
        records.insert(key, record.clone());
        Ok(record)
    }

    async fn list_by_training(&self, training_session_id: Uuid) -> AppResult<Vec<Attendance>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.training_session_id == training_session_id)
            .cloned()
            .collect())
    }
}

// ============================================================================
// InMemoryPaymentRepo
// ============================================================================

type PaymentKey = (Uuid, SubjectType, Uuid, i32, i32);

#[derive(Default)]
pub struct InMemoryPaymentRepo {
    pub payments: Mutex<HashMap<PaymentKey, Payment>>,
}

impl InMemoryPaymentRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentRepo for InMemoryPaymentRepo {
    async fn upsert(&self, record: &UpsertPaymentRecord) -> AppResult<Payment> {
        let mut payments = self.payments.lock().unwrap();
        let key = (
            record.session_id,
            record.subject_type,
            record.subject_id,
            record.year,
            record.month,
        );
        let existing = payments.get(&key);
        let payment = Payment {
            id: existing.map(|p| p.id).unwrap_or_else(Uuid::new_v4),
            session_id: record.session_id,
            subject_type: record.subject_type,
            subject_id: record.subject_id,
            year: record.year,
            month: record.month,
            status: record.status,
            amount_cents: record.amount_cents,
            paid_at: record.paid_at,
            notes: record.notes.clone(),
            created_at: existing.map(|p| p.created_at).unwrap_or_else(now),
            updated_at: now(),
        };
        payments.insert(key, payment.clone());
        Ok(payment)
    }

    async fn list_by_session_and_type(
        &self,
        session_id: Uuid,
        subject_type: SubjectType,
    ) -> AppResult<Vec<Payment>> {
        Ok(self
            .payments
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.session_id == session_id && p.subject_type == subject_type)
            .cloned()
            .collect())
    }

    async fn list_for_subject(
        &self,
        session_id: Uuid,
        subject_type: SubjectType,
        subject_id: Uuid,
    ) -> AppResult<Vec<Payment>> {
        Ok(self
            .payments
            .lock()
            .unwrap()
            .values()
            .filter(|p| {
                p.session_id == session_id
                    && p.subject_type == subject_type
                    && p.subject_id == subject_id
            })
            .cloned()
            .collect())
    }
}

// ============================================================================
// InMemoryEventRepo
// ============================================================================

#[derive(Default)]
pub struct InMemoryEventRepo {
    pub events: Mutex<HashMap<Uuid, Event>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepo for InMemoryEventRepo {
    async fn create(&self, team_id: Uuid, input: &CreateEventInput) -> AppResult<Event> {
        let event = Event {
            id: Uuid::new_v4(),
            team_id,
            title: input.title.clone(),
            description: input.description.clone(),
            starts_at: input.starts_at,
            location: input.location.clone(),
            created_at: now(),
        };
        self.events.lock().unwrap().insert(event.id, event.clone());
        Ok(event)
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Event>> {
        Ok(self.events.lock().unwrap().get(&id).cloned())
    }

    async fn list_by_team(&self, team_id: Uuid) -> AppResult<Vec<Event>> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .values()
            .filter(|e| e.team_id == team_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, input: &UpdateEventInput) -> AppResult<Event> {
        let mut events = self.events.lock().unwrap();
        let event = events.get_mut(&id).ok_or(AppError::NotFound)?;
        if let Some(title) = &input.title {
            event.title = title.clone();
        }
        if let Some(description) = &input.description {
            event.description = Some(description.clone());
        }
        if let Some(starts_at) = input.starts_at {
            event.starts_at = starts_at;
        }
        if let Some(location) = &input.location {
            event.location = Some(location.clone());
        }
        Ok(event.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.events
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::NotFound)
    }
}
