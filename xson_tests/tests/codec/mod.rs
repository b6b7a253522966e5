pub mod corruption;
pub mod helpers;
pub mod scenarios;
