pub mod tracking;
pub mod trip;
pub mod user;
