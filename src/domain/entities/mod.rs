pub mod admin;
pub mod attendance;
pub mod coach;
pub mod event;
pub mod payment;
pub mod payment_status;
pub mod player;
pub mod role;
pub mod session;
pub mod subgroup;
pub mod team;
pub mod training_session;
