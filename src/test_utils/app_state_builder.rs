//! Builder for an `AppState` backed entirely by in-memory mocks, used by the
//! HTTP-level tests in the route modules.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;
use time::Duration;
use uuid::Uuid;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::{
        auth::AuthUseCases, coach::CoachUseCases, event::EventUseCases, payment::PaymentUseCases,
        player::PlayerUseCases, session::SessionUseCases, subgroup::SubgroupUseCases,
        team::TeamUseCases, training::TrainingUseCases,
    },
    domain::entities::{
        admin::Admin, coach::Coach, player::Player, session::Session, team::Team,
    },
    infra::config::AppConfig,
    test_utils::{
        InMemoryAdminRepo, InMemoryAttendanceRepo, InMemoryCoachRepo, InMemoryEventRepo,
        InMemoryPaymentRepo, InMemoryPlayerRepo, InMemorySessionRepo, InMemorySubgroupRepo,
        InMemoryTeamRepo, InMemoryTrainingRepo,
    },
};

pub fn test_config() -> AppConfig {
    AppConfig {
        jwt_secret: SecretString::new("test_jwt_secret".into()),
        access_token_ttl: Duration::hours(1),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        bind_addr: "127.0.0.1:0".parse::<SocketAddr>().unwrap(),
        database_url: String::new(),
        upload_dir: std::env::temp_dir()
            .join("rosterhub-test-uploads")
            .to_string_lossy()
            .into_owned(),
    }
}

#[derive(Default)]
pub struct TestAppStateBuilder {
    teams: Vec<Team>,
    admins: Vec<Admin>,
    players: Vec<Player>,
    coaches: Vec<Coach>,
    sessions: Vec<Session>,
    roster_players: Vec<(Uuid, Uuid)>,
    roster_coaches: Vec<(Uuid, Uuid)>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_team(mut self, team: Team) -> Self {
        self.teams.push(team);
        self
    }

    pub fn with_admin(mut self, admin: Admin) -> Self {
        self.admins.push(admin);
        self
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    pub fn with_coach(mut self, coach: Coach) -> Self {
        self.coaches.push(coach);
        self
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.sessions.push(session);
        self
    }

    pub fn with_roster_player(mut self, session_id: Uuid, player_id: Uuid) -> Self {
        self.roster_players.push((session_id, player_id));
        self
    }

    pub fn with_roster_coach(mut self, session_id: Uuid, coach_id: Uuid) -> Self {
        self.roster_coaches.push((session_id, coach_id));
        self
    }

    pub fn build(self) -> AppState {
        let team_repo = Arc::new(InMemoryTeamRepo::new());
        for team in self.teams {
            team_repo.teams.lock().unwrap().insert(team.id, team);
        }

        let admin_repo = Arc::new(InMemoryAdminRepo::new());
        for admin in self.admins {
            admin_repo.admins.lock().unwrap().insert(admin.id, admin);
        }

        let player_repo = Arc::new(InMemoryPlayerRepo::with_players(self.players.clone()));
        let coach_repo = Arc::new(InMemoryCoachRepo::with_coaches(self.coaches.clone()));

        let session_repo = Arc::new(InMemorySessionRepo::with_sessions(self.sessions));
        for player in self.players {
            session_repo.seed_player(player);
        }
        for coach in self.coaches {
            session_repo.seed_coach(coach);
        }
        for pair in self.roster_players {
            session_repo.session_players.lock().unwrap().insert(pair);
        }
        for pair in self.roster_coaches {
            session_repo.session_coaches.lock().unwrap().insert(pair);
        }

        let subgroup_repo = Arc::new(InMemorySubgroupRepo::new());
        let training_repo = Arc::new(InMemoryTrainingRepo::new());
        let attendance_repo = Arc::new(InMemoryAttendanceRepo::new());
        let payment_repo = Arc::new(InMemoryPaymentRepo::new());
        let event_repo = Arc::new(InMemoryEventRepo::new());

        AppState {
            config: Arc::new(test_config()),
            auth_use_cases: Arc::new(AuthUseCases::new(
                admin_repo,
                coach_repo.clone(),
                player_repo.clone(),
                team_repo.clone(),
            )),
            team_use_cases: Arc::new(TeamUseCases::new(team_repo)),
            player_use_cases: Arc::new(PlayerUseCases::new(player_repo.clone())),
            coach_use_cases: Arc::new(CoachUseCases::new(coach_repo.clone())),
            session_use_cases: Arc::new(SessionUseCases::new(
                session_repo.clone(),
                player_repo,
                coach_repo,
            )),
            subgroup_use_cases: Arc::new(SubgroupUseCases::new(
                subgroup_repo.clone(),
                session_repo.clone(),
            )),
            training_use_cases: Arc::new(TrainingUseCases::new(
                training_repo,
                attendance_repo,
                session_repo.clone(),
                subgroup_repo,
            )),
            payment_use_cases: Arc::new(PaymentUseCases::new(payment_repo, session_repo)),
            event_use_cases: Arc::new(EventUseCases::new(event_repo)),
        }
    }
}
