//! Endpoints reserved for admins

use serde::Serialize;
use tracing::info;

use super::Client;
use crate::error::Result;
use crate::response;

#[derive(Debug, Serialize)]
struct AddVipRequest<'a> {
    #[serde(rename = "adminUserID")]
    admin_user_id: &'a str,
    #[serde(rename = "userID")]
    user_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
}

/// Admin view of a [`Client`]
#[derive(Debug, Clone, Copy)]
pub struct Admin<'a> {
    client: &'a Client,
}

impl<'a> Admin<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Grant VIP to a user, or revoke it with `enabled: Some(false)`
    pub async fn add_vip(&self, public_user_id: &str, enabled: Option<bool>) -> Result<()> {
        let request = AddVipRequest {
            admin_user_id: self.client.user_id(),
            user_id: public_user_id,
            enabled,
        };

        let response = self
            .client
            .post("/api/addUserAsVIP")
            .json(&request)
            .send()
            .await?;
        response::empty(response).await?;

        info!(
            "VIP for {} set to {}",
            public_user_id,
            enabled.unwrap_or(true)
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::test_client;
    use crate::error::ResponseErrorKind;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_add_vip() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/addUserAsVIP")
            .match_body(Matcher::Json(serde_json::json!({
                "adminUserID": "admin",
                "userID": "promoted",
                "enabled": false,
            })))
            .with_status(200)
            .create_async()
            .await;

        let client = test_client(&server, "admin");
        client.admin().add_vip("promoted", Some(false)).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_add_vip_rate_limited() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/addUserAsVIP")
            .with_status(429)
            .create_async()
            .await;

        let client = test_client(&server, "admin");
        let err = client.admin().add_vip("promoted", None).await.unwrap_err();
        assert_eq!(err.kind(), Some(ResponseErrorKind::RateLimited));
        assert!(err.is_rate_limited());
    }
}
