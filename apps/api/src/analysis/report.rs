//! Structured match report returned by `POST /api/analyze`.

use serde::{Deserialize, Serialize};

/// Letter grade the model assigns to a resume/JD match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    S,
    A,
    B,
    C,
    F,
}

/// The model's verdict, relayed to the caller as the whole response body.
///
/// Score and tier are whatever the model produced — the server does not clamp
/// or correct them. Output that does not deserialize into this shape is a
/// hard failure upstream, never patched up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub score: u32,
    pub tier: Tier,
    pub summary: String,
    pub missing_skills: Vec<String>,
}
