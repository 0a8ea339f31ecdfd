use std::sync::Arc;

use crate::{
    application::use_cases::{
        auth::AuthUseCases, coach::CoachUseCases, event::EventUseCases, payment::PaymentUseCases,
        player::PlayerUseCases, session::SessionUseCases, subgroup::SubgroupUseCases,
        team::TeamUseCases, training::TrainingUseCases,
    },
    infra::config::AppConfig,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub auth_use_cases: Arc<AuthUseCases>,
    pub team_use_cases: Arc<TeamUseCases>,
    pub player_use_cases: Arc<PlayerUseCases>,
    pub coach_use_cases: Arc<CoachUseCases>,
    pub session_use_cases: Arc<SessionUseCases>,
    pub subgroup_use_cases: Arc<SubgroupUseCases>,
    pub training_use_cases: Arc<TrainingUseCases>,
    pub payment_use_cases: Arc<PaymentUseCases>,
    pub event_use_cases: Arc<EventUseCases>,
}
