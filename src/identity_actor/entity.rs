//! [`ActorEntity`] implementation for [`Identity`].
//!
//! The normalized email is the store's unique key, so the identity actor itself refuses a
//! second record with the same address.

use super::IdentityError;
use crate::framework::ActorEntity;
use crate::model::{
    normalize_email, Identity, IdentityCreate, IdentityId, IdentityQuery, IdentityUpdate,
};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Identity {
    type Id = IdentityId;
    type Create = IdentityCreate;
    type Update = IdentityUpdate;
    type Query = IdentityQuery;
    type Context = ();
    type Error = IdentityError;

    fn from_create_params(id: IdentityId, params: IdentityCreate) -> Result<Self, IdentityError> {
        let name = params.name.trim();
        let email = params.email.trim();
        if name.is_empty() {
            return Err(IdentityError::InvalidRecord("name".into()));
        }
        if email.is_empty() {
            return Err(IdentityError::InvalidRecord("email".into()));
        }
        if params.password_hash.is_empty() {
            return Err(IdentityError::InvalidRecord("password_hash".into()));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password_hash: params.password_hash,
        })
    }

    fn matches(&self, query: &IdentityQuery) -> bool {
        match &query.email {
            Some(email) => normalize_email(&self.email) == *email,
            None => true,
        }
    }

    fn unique_key(&self) -> Option<String> {
        Some(normalize_email(&self.email))
    }

    async fn on_update(&mut self, update: IdentityUpdate, _ctx: &()) -> Result<(), IdentityError> {
        match update {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn create(name: &str, email: &str) -> IdentityCreate {
        IdentityCreate {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: "$2b$04$hash".to_string(),
        }
    }

    #[test]
    fn test_trims_fields_and_keys_on_normalized_email() {
        let id = IdentityId::from(Uuid::new_v4());
        let identity = Identity::from_create_params(id, create(" Ann ", " Ann@Example.com ")).unwrap();
        assert_eq!(identity.name, "Ann");
        assert_eq!(identity.email, "Ann@Example.com");
        assert_eq!(identity.unique_key().as_deref(), Some("ann@example.com"));
        assert!(identity.matches(&IdentityQuery::by_email("ANN@example.COM")));
        assert!(!identity.matches(&IdentityQuery::by_email("bob@example.com")));
        assert!(identity.matches(&IdentityQuery::default()));
    }

    #[test]
    fn test_rejects_blank_fields() {
        let id = IdentityId::from(Uuid::new_v4());
        let result = Identity::from_create_params(id, create("  ", "a@b.c"));
        assert_eq!(result.unwrap_err(), IdentityError::InvalidRecord("name".into()));
    }
}
