pub mod compare;
pub mod error;
pub mod fpl;
pub mod model;
pub mod report;
pub mod store;
