pub mod pr;
pub mod stats;
pub mod team;
pub mod user;
