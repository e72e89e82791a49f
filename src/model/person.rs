//! Person domain models, roles, and parameters.
//!
//! Persons are application users provisioned from the external identity
//! provider. Roles are stored per person and are the single source of truth
//! for authorization decisions; the bearer token only carries identity.

use std::fmt;

use crate::dto::person::PersonDto;

/// Role a person can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Mentor,
}

impl Role {
    /// Stable string form used in the `person_role` table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Mentor => "mentor",
        }
    }

    /// Parses a stored role name. Unknown names are ignored by callers so a
    /// schema holding retired role names keeps working.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Role::Admin),
            "mentor" => Some(Role::Mentor),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Person with their identity-provider linkage and granted roles.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: i32,
    /// Object id assigned by the external identity provider.
    pub external_id: String,
    pub display_name: String,
    pub email: String,
    pub roles: Vec<Role>,
}

impl Person {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn into_dto(self) -> PersonDto {
        PersonDto {
            id: self.id,
            external_id: self.external_id,
            display_name: self.display_name,
            email: self.email,
            roles: self.roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Builds a person domain model from an entity plus its role rows.
    ///
    /// Role names that no longer parse are dropped silently.
    pub fn from_entity(
        entity: entity::person::Model,
        role_rows: Vec<entity::person_role::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            external_id: entity.external_id,
            display_name: entity.display_name,
            email: entity.email,
            roles: role_rows
                .iter()
                .filter_map(|r| Role::parse(&r.role))
                .collect(),
        }
    }
}

/// Parameters for upserting a person during provisioning.
#[derive(Debug, Clone)]
pub struct UpsertPersonParams {
    pub external_id: String,
    pub display_name: String,
    pub email: String,
}

/// Result of inviting a new administrator.
#[derive(Debug, Clone)]
pub struct AdminInvitation {
    pub person: Person,
    /// URL the invited person visits to redeem the directory invitation.
    pub redeem_url: String,
}

impl AdminInvitation {
    pub fn into_dto(self) -> crate::dto::person::AdminInvitationDto {
        crate::dto::person::AdminInvitationDto {
            person: self.person.into_dto(),
            redeem_url: self.redeem_url,
        }
    }
}
