use serde::{Deserialize, Serialize};
use storage::models::ProfileCode;
use utoipa::ToSchema;

/// One navigation entry and the role codes that unlock it.
struct NavEntry {
    route: &'static str,
    label: &'static str,
    roles: &'static [ProfileCode],
}

/// Menu entries in display order. An entry is shown when its role
/// requirement intersects the user's codes.
const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        route: "/athlete/profile",
        label: "Meu Perfil",
        roles: &[ProfileCode::Athlete, ProfileCode::GeneralPublic],
    },
    NavEntry {
        route: "/payments",
        label: "Pagamentos",
        roles: &[ProfileCode::Athlete, ProfileCode::GeneralPublic],
    },
    NavEntry {
        route: "/organizer/dashboard",
        label: "Organização",
        roles: &[ProfileCode::Organizer],
    },
    NavEntry {
        route: "/delegation/dashboard",
        label: "Delegação",
        roles: &[ProfileCode::DelegationRepresentative],
    },
    NavEntry {
        route: "/judge/dashboard",
        label: "Julgamento",
        roles: &[ProfileCode::Judge],
    },
    NavEntry {
        route: "/admin",
        label: "Administração",
        roles: &[ProfileCode::Administrator],
    },
];

/// Redirect rules checked in order; the first whose codes intersect the
/// user's wins.
const INITIAL_ROUTE_RULES: &[(&[ProfileCode], &str)] = &[
    (
        &[ProfileCode::Athlete, ProfileCode::GeneralPublic],
        "/athlete/profile",
    ),
    (&[ProfileCode::Organizer], "/organizer/dashboard"),
    (
        &[ProfileCode::DelegationRepresentative],
        "/delegation/dashboard",
    ),
    (&[ProfileCode::Administrator], "/admin"),
    (&[ProfileCode::Judge], "/judge/dashboard"),
];

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NavigationRequest {
    pub roles: Vec<ProfileCode>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NavEntryResponse {
    pub route: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NavigationResponse {
    pub initial_route: Option<String>,
    pub menu: Vec<NavEntryResponse>,
}

/// Compute the landing route and visible menu for a set of role codes.
pub fn resolve(roles: &[ProfileCode]) -> NavigationResponse {
    NavigationResponse {
        initial_route: initial_route_for(roles).map(String::from),
        menu: menu_for(roles),
    }
}

fn initial_route_for(roles: &[ProfileCode]) -> Option<&'static str> {
    INITIAL_ROUTE_RULES
        .iter()
        .find(|(required, _)| intersects(required, roles))
        .map(|(_, route)| *route)
}

fn menu_for(roles: &[ProfileCode]) -> Vec<NavEntryResponse> {
    NAV_ENTRIES
        .iter()
        .filter(|entry| intersects(entry.roles, roles))
        .map(|entry| NavEntryResponse {
            route: entry.route.to_string(),
            label: entry.label.to_string(),
        })
        .collect()
}

fn intersects(required: &[ProfileCode], held: &[ProfileCode]) -> bool {
    required.iter().any(|code| held.contains(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_athlete_lands_on_profile() {
        let resolved = resolve(&[ProfileCode::Athlete]);
        assert_eq!(resolved.initial_route.as_deref(), Some("/athlete/profile"));
    }

    #[test]
    fn test_general_public_lands_on_profile() {
        let resolved = resolve(&[ProfileCode::GeneralPublic]);
        assert_eq!(resolved.initial_route.as_deref(), Some("/athlete/profile"));
    }

    #[test]
    fn test_organizer_lands_on_dashboard() {
        let resolved = resolve(&[ProfileCode::Organizer]);
        assert_eq!(
            resolved.initial_route.as_deref(),
            Some("/organizer/dashboard")
        );
    }

    #[test]
    fn test_athlete_outranks_judge() {
        let resolved = resolve(&[ProfileCode::Judge, ProfileCode::Athlete]);
        assert_eq!(resolved.initial_route.as_deref(), Some("/athlete/profile"));
    }

    #[test]
    fn test_admin_outranks_judge() {
        let resolved = resolve(&[ProfileCode::Judge, ProfileCode::Administrator]);
        assert_eq!(resolved.initial_route.as_deref(), Some("/admin"));
    }

    #[test]
    fn test_no_matching_role_means_no_redirect() {
        let resolved = resolve(&[ProfileCode::ChildUpToSix]);
        assert_eq!(resolved.initial_route, None);
        assert!(resolved.menu.is_empty());
    }

    #[test]
    fn test_empty_roles() {
        let resolved = resolve(&[]);
        assert_eq!(resolved.initial_route, None);
        assert!(resolved.menu.is_empty());
    }

    #[test]
    fn test_menu_filtered_by_roles() {
        let resolved = resolve(&[ProfileCode::Organizer, ProfileCode::Judge]);
        let routes: Vec<&str> = resolved.menu.iter().map(|e| e.route.as_str()).collect();
        assert_eq!(routes, vec!["/organizer/dashboard", "/judge/dashboard"]);
    }

    #[test]
    fn test_menu_keeps_display_order() {
        let resolved = resolve(&[ProfileCode::Administrator, ProfileCode::Athlete]);
        let routes: Vec<&str> = resolved.menu.iter().map(|e| e.route.as_str()).collect();
        assert_eq!(routes, vec!["/athlete/profile", "/payments", "/admin"]);
    }
}
