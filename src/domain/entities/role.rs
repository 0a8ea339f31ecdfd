use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app_error::{AppError, AppResult};

/// User role for authentication and access control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Coach,
    Player,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Coach => "coach",
            Role::Player => "player",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "coach" => Ok(Role::Coach),
            "player" => Ok(Role::Player),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Authenticated caller, one variant per role.
///
/// Access checks live here so handlers ask the actor instead of branching on
/// a role string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Admin { id: Uuid, team_id: Uuid },
    Coach { id: Uuid, team_id: Uuid },
    Player { id: Uuid, team_id: Uuid },
}

impl Actor {
    pub fn id(&self) -> Uuid {
        match self {
            Actor::Admin { id, .. } | Actor::Coach { id, .. } | Actor::Player { id, .. } => *id,
        }
    }

    pub fn team_id(&self) -> Uuid {
        match self {
            Actor::Admin { team_id, .. }
            | Actor::Coach { team_id, .. }
            | Actor::Player { team_id, .. } => *team_id,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Actor::Admin { .. } => Role::Admin,
            Actor::Coach { .. } => Role::Coach,
            Actor::Player { .. } => Role::Player,
        }
    }

    /// Admin-only operations (team settings, roster writes, payments).
    pub fn require_admin(&self) -> AppResult<()> {
        match self {
            Actor::Admin { .. } => Ok(()),
            _ => Err(AppError::Forbidden),
        }
    }

    /// Staff operations (training sessions, attendance recording).
    pub fn require_staff(&self) -> AppResult<()> {
        match self {
            Actor::Admin { .. } | Actor::Coach { .. } => Ok(()),
            _ => Err(AppError::Forbidden),
        }
    }

    /// Players may only read their own record; staff may read any.
    pub fn may_view_player(&self, player_id: Uuid) -> AppResult<()> {
        match self {
            Actor::Admin { .. } | Actor::Coach { .. } => Ok(()),
            Actor::Player { id, .. } if *id == player_id => Ok(()),
            Actor::Player { .. } => Err(AppError::Forbidden),
        }
    }

    /// Every resource is scoped to the actor's team.
    pub fn require_team(&self, team_id: Uuid) -> AppResult<()> {
        if self.team_id() == team_id {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}
