use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// An event-scoped role template assignable to users, e.g. "Atleta" or
/// "Público Geral". The `type_code` column holds one of the [`ProfileCode`]
/// string forms.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Profile {
    pub profile_id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub type_code: String,
    pub created_at: chrono::NaiveDateTime,
}

impl Profile {
    pub fn code(&self) -> Option<ProfileCode> {
        ProfileCode::parse(&self.type_code)
    }
}

/// Known profile type codes.
///
/// `Athlete` and `GeneralPublic` are mutually exclusive per user per event;
/// the remaining codes can be held alongside any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ProfileCode {
    #[serde(rename = "ATL")]
    Athlete,
    #[serde(rename = "ORE")]
    Organizer,
    #[serde(rename = "RDD")]
    DelegationRepresentative,
    #[serde(rename = "ADM")]
    Administrator,
    #[serde(rename = "JUZ")]
    Judge,
    #[serde(rename = "PGR")]
    GeneralPublic,
    #[serde(rename = "C-6")]
    ChildUpToSix,
    #[serde(rename = "C+7")]
    ChildSevenPlus,
}

impl ProfileCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Athlete => "ATL",
            Self::Organizer => "ORE",
            Self::DelegationRepresentative => "RDD",
            Self::Administrator => "ADM",
            Self::Judge => "JUZ",
            Self::GeneralPublic => "PGR",
            Self::ChildUpToSix => "C-6",
            Self::ChildSevenPlus => "C+7",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "ATL" => Some(Self::Athlete),
            "ORE" => Some(Self::Organizer),
            "RDD" => Some(Self::DelegationRepresentative),
            "ADM" => Some(Self::Administrator),
            "JUZ" => Some(Self::Judge),
            "PGR" => Some(Self::GeneralPublic),
            "C-6" => Some(Self::ChildUpToSix),
            "C+7" => Some(Self::ChildSevenPlus),
            _ => None,
        }
    }

    /// A user may hold at most one exclusive profile per event.
    pub fn is_exclusive(&self) -> bool {
        matches!(self, Self::Athlete | Self::GeneralPublic)
    }
}

impl std::fmt::Display for ProfileCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for code in [
            ProfileCode::Athlete,
            ProfileCode::Organizer,
            ProfileCode::DelegationRepresentative,
            ProfileCode::Administrator,
            ProfileCode::Judge,
            ProfileCode::GeneralPublic,
            ProfileCode::ChildUpToSix,
            ProfileCode::ChildSevenPlus,
        ] {
            assert_eq!(ProfileCode::parse(code.as_str()), Some(code));
        }
    }

    #[test]
    fn test_parse_unknown_code() {
        assert_eq!(ProfileCode::parse("XYZ"), None);
        assert_eq!(ProfileCode::parse(""), None);
    }

    #[test]
    fn test_only_athlete_and_general_public_are_exclusive() {
        assert!(ProfileCode::Athlete.is_exclusive());
        assert!(ProfileCode::GeneralPublic.is_exclusive());
        assert!(!ProfileCode::Organizer.is_exclusive());
        assert!(!ProfileCode::Judge.is_exclusive());
        assert!(!ProfileCode::ChildUpToSix.is_exclusive());
    }
}
