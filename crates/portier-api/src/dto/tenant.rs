use portier_core::domain::{NewTenant, TenantChanges};
use serde::Deserialize;
use validator::Validate;

use super::not_blank;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTenantRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub status: String,
}

impl From<CreateTenantRequest> for NewTenant {
    fn from(req: CreateTenantRequest) -> Self {
        NewTenant::new(req.name, req.address, req.status)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTenantRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub status: String,
    pub is_active: Option<bool>,
}

impl From<UpdateTenantRequest> for TenantChanges {
    fn from(req: UpdateTenantRequest) -> Self {
        TenantChanges {
            name: req.name.trim().to_string(),
            address: req.address.trim().to_string(),
            status: req.status.trim().to_string(),
            is_active: req.is_active,
        }
    }
}
