//! # Transport
//!
//! The collaborator that actually persists and fetches items for a
//! [`ResourceStore`](super::ResourceStore), plus its error type.

use crate::model::{Deleted, ErrorBody};
use async_trait::async_trait;
use std::fmt::{Debug, Display};
use thiserror::Error;

/// An item the store can hold: anything with a comparable id.
pub trait StoreItem: Clone + Debug + Send + Sync + 'static {
    type Id: Clone + PartialEq + Debug + Display + Send + Sync + 'static;

    fn id(&self) -> &Self::Id;
}

/// Id type of a transport's items.
pub type ItemId<X> = <<X as ResourceTransport>::Item as StoreItem>::Id;

/// Authenticated access to a remote collection.
#[async_trait]
pub trait ResourceTransport: Send + Sync {
    type Item: StoreItem;
    /// What the client submits to create an item.
    type Draft: Debug + Send + 'static;

    /// Persists `data` and returns the server's canonical item.
    async fn create_item(&self, data: Self::Draft, token: &str) -> Result<Self::Item, TransportError>;

    /// Every item visible to `token`, in server order.
    async fn list_items(&self, token: &str) -> Result<Vec<Self::Item>, TransportError>;

    /// Deletes an item; the payload names the removed id.
    async fn delete_item(
        &self,
        id: <Self::Item as StoreItem>::Id,
        token: &str,
    ) -> Result<Deleted<<Self::Item as StoreItem>::Id>, TransportError>;
}

/// The error response a server answered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub status: u16,
    pub body: Option<ErrorBody>,
}

/// A failed transport call.
///
/// `response` is present when the server answered; `message` is the transport's own
/// description of the failure (a connection error, say).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", summarize(.response.as_ref()))]
pub struct TransportError {
    pub response: Option<ErrorResponse>,
    pub message: Option<String>,
}

fn summarize(response: Option<&ErrorResponse>) -> String {
    match response {
        Some(response) => format!("Request failed with status code {}", response.status),
        None => "Transport request failed".to_string(),
    }
}

impl TransportError {
    /// The server answered with `status` and an optional body.
    pub fn from_response(status: u16, body: Option<ErrorBody>) -> Self {
        Self {
            response: Some(ErrorResponse { status, body }),
            message: None,
        }
    }

    /// No response; the transport describes the failure itself.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            response: None,
            message: Some(message.into()),
        }
    }

    /// The message a rejected operation records.
    ///
    /// Falls back from the response body's message to the transport's own message to the
    /// rendered error, skipping blank candidates. Never empty.
    pub fn rejection_message(&self) -> String {
        let body_message = self
            .response
            .as_ref()
            .and_then(|response| response.body.as_ref())
            .and_then(|body| body.message.as_deref());

        body_message
            .filter(|message| !message.trim().is_empty())
            .or_else(|| {
                self.message
                    .as_deref()
                    .filter(|message| !message.trim().is_empty())
            })
            .map(str::to_string)
            .unwrap_or_else(|| self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_message_wins() {
        let mut error = TransportError::from_response(401, Some(ErrorBody::new("Not authorized")));
        error.message = Some("Request failed".into());
        assert_eq!(error.rejection_message(), "Not authorized");
    }

    #[test]
    fn test_own_message_when_body_has_none() {
        let mut error = TransportError::from_response(500, Some(ErrorBody::default()));
        error.message = Some("socket hang up".into());
        assert_eq!(error.rejection_message(), "socket hang up");

        assert_eq!(TransportError::new("Network Error").rejection_message(), "Network Error");
    }

    #[test]
    fn test_display_as_last_resort() {
        let error = TransportError::from_response(502, None);
        assert_eq!(error.rejection_message(), "Request failed with status code 502");

        let error = TransportError {
            response: None,
            message: Some("   ".into()),
        };
        assert_eq!(error.rejection_message(), "Transport request failed");
    }
}
