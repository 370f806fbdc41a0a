//! [`ActorEntity`] implementation for [`Session`]. The minted id is the bearer token.

use super::SessionError;
use crate::framework::ActorEntity;
use crate::model::{Session, SessionCreate, SessionQuery, SessionToken, SessionUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Session {
    type Id = SessionToken;
    type Create = SessionCreate;
    type Update = SessionUpdate;
    type Query = SessionQuery;
    type Context = ();
    type Error = SessionError;

    fn from_create_params(token: SessionToken, params: SessionCreate) -> Result<Self, SessionError> {
        Ok(Self {
            token,
            identity_id: params.identity_id,
            expires_at: params.expires_at,
        })
    }

    fn matches(&self, query: &SessionQuery) -> bool {
        let owner_matches = query
            .identity_id
            .as_ref()
            .map_or(true, |identity_id| &self.identity_id == identity_id);
        let expiry_matches = query.expired_at.map_or(true, |now| self.is_expired(now));
        owner_matches && expiry_matches
    }

    async fn on_update(&mut self, update: SessionUpdate, _ctx: &()) -> Result<(), SessionError> {
        match update {}
    }
}
