use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::ProfileCode;

/// The two mutually exclusive registration categories a user can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationCategory {
    Athlete,
    GeneralPublic,
}

impl RegistrationCategory {
    /// Profile name looked up for this category within an event.
    pub fn profile_name(&self) -> &'static str {
        match self {
            Self::Athlete => "Atleta",
            Self::GeneralPublic => "Público Geral",
        }
    }

    pub fn code(&self) -> ProfileCode {
        match self {
            Self::Athlete => ProfileCode::Athlete,
            Self::GeneralPublic => ProfileCode::GeneralPublic,
        }
    }
}

/// Age-banded profile code for dependent registrations: six or younger on
/// the reference date goes to "C-6", everyone else to "C+7".
pub fn dependent_profile_code(birth_date: NaiveDate, on: NaiveDate) -> ProfileCode {
    if age_in_years(birth_date, on) <= 6 {
        ProfileCode::ChildUpToSix
    } else {
        ProfileCode::ChildSevenPlus
    }
}

/// Completed years between `birth_date` and `on`.
fn age_in_years(birth_date: NaiveDate, on: NaiveDate) -> i32 {
    use chrono::Datelike;

    let mut age = on.year() - birth_date.year();
    if (on.month(), on.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_category_profile_names() {
        assert_eq!(RegistrationCategory::Athlete.profile_name(), "Atleta");
        assert_eq!(
            RegistrationCategory::GeneralPublic.profile_name(),
            "Público Geral"
        );
    }

    #[test]
    fn test_category_codes_are_exclusive() {
        assert!(RegistrationCategory::Athlete.code().is_exclusive());
        assert!(RegistrationCategory::GeneralPublic.code().is_exclusive());
    }

    #[test]
    fn test_six_year_old_goes_to_younger_band() {
        let code = dependent_profile_code(date(2020, 3, 10), date(2026, 8, 1));
        assert_eq!(code, ProfileCode::ChildUpToSix);
    }

    #[test]
    fn test_seven_year_old_goes_to_older_band() {
        let code = dependent_profile_code(date(2019, 3, 10), date(2026, 8, 1));
        assert_eq!(code, ProfileCode::ChildSevenPlus);
    }

    #[test]
    fn test_birthday_not_yet_reached_counts_previous_age() {
        // Turns 7 in September; still 6 in August.
        let code = dependent_profile_code(date(2019, 9, 20), date(2026, 8, 1));
        assert_eq!(code, ProfileCode::ChildUpToSix);
    }

    #[test]
    fn test_newborn() {
        let on = date(2026, 8, 1);
        assert_eq!(dependent_profile_code(on, on), ProfileCode::ChildUpToSix);
    }
}
