//! Application pages

pub mod dashboard;
pub mod login;
pub mod signup;
