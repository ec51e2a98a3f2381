use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::domain::model::AccessDecision;

/// Wire form of [`AccessDecision`].
///
/// `verifiedAt` is RFC 3339 in UTC with millisecond precision, e.g.
/// `2026-10-17T08:30:00.123Z`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessDecisionDto {
    pub access: bool,
    pub verified_at: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

impl From<AccessDecision> for AccessDecisionDto {
    fn from(d: AccessDecision) -> Self {
        Self {
            access: d.access,
            verified_at: d.verified_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            role: d.role,
            uid: d.uid,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}
