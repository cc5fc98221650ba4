//! Career-orientation quiz engine built on the Holland RIASEC model.
//!
//! Answers are tallied per interest type, ranked into a tie-aware top profile and
//! matched against a catalog of majors reachable through the student's chosen exam
//! groups. The [`submissions`] module stores completed quizzes behind a repository
//! trait and exposes them over HTTP.

pub mod catalog;
pub mod config;
pub mod error;
pub mod holland;
pub mod session;
pub mod submissions;
pub mod telemetry;
