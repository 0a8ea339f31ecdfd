use std::fs::File;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::{http::app_state::AppState, persistence::PostgresPersistence},
    application::use_cases::{
        auth::{AdminRepo, AuthUseCases},
        coach::{CoachRepo, CoachUseCases},
        event::{EventRepo, EventUseCases},
        payment::{PaymentRepo, PaymentUseCases},
        player::{PlayerRepo, PlayerUseCases},
        session::{SessionRepo, SessionUseCases},
        subgroup::{SubgroupRepo, SubgroupUseCases},
        team::{TeamRepo, TeamUseCases},
        training::{AttendanceRepo, TrainingRepo, TrainingUseCases},
    },
    infra::{config::AppConfig, db::init_db},
};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let pool = init_db(&config.database_url).await?;
    let postgres_arc = Arc::new(PostgresPersistence::new(pool));

    let admin_repo = postgres_arc.clone() as Arc<dyn AdminRepo>;
    let team_repo = postgres_arc.clone() as Arc<dyn TeamRepo>;
    let player_repo = postgres_arc.clone() as Arc<dyn PlayerRepo>;
    let coach_repo = postgres_arc.clone() as Arc<dyn CoachRepo>;
    let session_repo = postgres_arc.clone() as Arc<dyn SessionRepo>;
    let subgroup_repo = postgres_arc.clone() as Arc<dyn SubgroupRepo>;
    let training_repo = postgres_arc.clone() as Arc<dyn TrainingRepo>;
    let attendance_repo = postgres_arc.clone() as Arc<dyn AttendanceRepo>;
    let payment_repo = postgres_arc.clone() as Arc<dyn PaymentRepo>;
    let event_repo = postgres_arc.clone() as Arc<dyn EventRepo>;

    let auth_use_cases = AuthUseCases::new(
        admin_repo,
        coach_repo.clone(),
        player_repo.clone(),
        team_repo.clone(),
    );
    let team_use_cases = TeamUseCases::new(team_repo);
    let player_use_cases = PlayerUseCases::new(player_repo.clone());
    let coach_use_cases = CoachUseCases::new(coach_repo.clone());
    let session_use_cases = SessionUseCases::new(session_repo.clone(), player_repo, coach_repo);
    let subgroup_use_cases = SubgroupUseCases::new(subgroup_repo.clone(), session_repo.clone());
    let training_use_cases = TrainingUseCases::new(
        training_repo,
        attendance_repo,
        session_repo.clone(),
        subgroup_repo,
    );
    let payment_use_cases = PaymentUseCases::new(payment_repo, session_repo);
    let event_use_cases = EventUseCases::new(event_repo);

    Ok(AppState {
        config: Arc::new(config),
        auth_use_cases: Arc::new(auth_use_cases),
        team_use_cases: Arc::new(team_use_cases),
        player_use_cases: Arc::new(player_use_cases),
        coach_use_cases: Arc::new(coach_use_cases),
        session_use_cases: Arc::new(session_use_cases),
        subgroup_use_cases: Arc::new(subgroup_use_cases),
        training_use_cases: Arc::new(training_use_cases),
        payment_use_cases: Arc::new(payment_use_cases),
        event_use_cases: Arc::new(event_use_cases),
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rosterhub=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer().with_target(false).with_level(true).pretty();

    // File (structured JSON logs)
    let file = File::create("app.log").expect("cannot create log file");
    let json_layer = fmt::layer()
        .json()
        .with_writer(file)
        .with_current_span(true)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
