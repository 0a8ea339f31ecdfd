//! Test data factories. Each creates a complete, valid object with sensible
//! defaults; use the closure parameter to override fields.

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::domain::entities::{coach::Coach, player::Player, session::Session, team::Team};

pub fn test_datetime() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

pub fn create_test_team(overrides: impl FnOnce(&mut Team)) -> Team {
    let mut team = Team {
        id: Uuid::new_v4(),
        name: "CD Test".to_string(),
        sport: Some("basketball".to_string()),
        logo_path: None,
        created_at: test_datetime(),
    };
    overrides(&mut team);
    team
}

pub fn create_test_player(team_id: Uuid, overrides: impl FnOnce(&mut Player)) -> Player {
    let mut player = Player {
        id: Uuid::new_v4(),
        team_id,
        name: "Test Player".to_string(),
        email: None,
        password_hash: None,
        photo_path: None,
        monthly_fee_cents: 5000,
        inscription_fee_cents: 0,
        inscription_paid_at: None,
        last_payment_date: None,
        created_at: test_datetime(),
        updated_at: test_datetime(),
    };
    overrides(&mut player);
    player
}

pub fn create_test_coach(team_id: Uuid, overrides: impl FnOnce(&mut Coach)) -> Coach {
    let mut coach = Coach {
        id: Uuid::new_v4(),
        team_id,
        name: "Test Coach".to_string(),
        email: None,
        password_hash: None,
        photo_path: None,
        agreed_salary_cents: 120_000,
        created_at: test_datetime(),
    };
    overrides(&mut coach);
    coach
}

pub fn create_test_session(team_id: Uuid, overrides: impl FnOnce(&mut Session)) -> Session {
    let mut session = Session {
        id: Uuid::new_v4(),
        team_id,
        name: "2025 Season".to_string(),
        start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        created_at: test_datetime(),
    };
    overrides(&mut session);
    session
}
