pub mod auth;
pub mod coach;
pub mod event;
pub mod payment;
pub mod player;
pub mod session;
pub mod subgroup;
pub mod team;
pub mod training;
