use axum::extract::FromRef;
use storage::Database;

use crate::mailer::Mailer;

/// Administrator address payment-proof notifications go to.
#[derive(Clone)]
pub struct AdminEmail(pub String);

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: Database,
    pub mailer: Mailer,
    pub admin_email: AdminEmail,
}
