use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedApplication;

pub async fn get_current_application(
    Extension(application): Extension<AuthenticatedApplication>,
) -> ApiSuccess<CurrentApplicationResponseData> {
    ApiSuccess::new(StatusCode::OK, (&application).into())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentApplicationResponseData {
    pub application_key: String,
    pub application_name: String,
}

impl From<&AuthenticatedApplication> for CurrentApplicationResponseData {
    fn from(application: &AuthenticatedApplication) -> Self {
        Self {
            application_key: application.application_key.clone(),
            application_name: application.application_name.clone(),
        }
    }
}
