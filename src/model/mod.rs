pub mod fixture;
pub mod numeric;
pub mod player;
pub mod snapshot;
pub mod team;
