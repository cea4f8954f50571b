//! Moderation endpoints reserved for VIP users

use serde::Serialize;
use tracing::info;

use super::Client;
use crate::error::Result;
use crate::resolve::VideoResolvable;
use crate::response;
use crate::types::Category;

#[derive(Debug, Serialize)]
struct NoSegmentsRequest<'a> {
    #[serde(rename = "videoID")]
    video_id: &'a str,
    #[serde(rename = "userID")]
    user_id: &'a str,
    categories: &'a [Category],
}

#[derive(Debug, Serialize)]
struct WarnUserRequest<'a> {
    #[serde(rename = "issuerUserID")]
    issuer_user_id: &'a str,
    #[serde(rename = "userID")]
    user_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
    reason: &'a str,
}

/// VIP view of a [`Client`]. Calls are sent as the client's user; the
/// service answers 403 if that user is not a VIP.
#[derive(Debug, Clone, Copy)]
pub struct Vip<'a> {
    client: &'a Client,
}

impl<'a> Vip<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lock categories on a video so no new submissions are accepted for them
    pub async fn block_submissions_of_category<'v>(
        &self,
        video: impl Into<VideoResolvable<'v>>,
        categories: &[Category],
    ) -> Result<()> {
        let video_id = video.into().resolve()?;
        let request = NoSegmentsRequest {
            video_id,
            user_id: self.client.user_id(),
            categories,
        };

        let response = self
            .client
            .post("/api/noSegments")
            .json(&request)
            .send()
            .await?;
        response::empty(response).await?;

        info!("Locked {} categories on {}", categories.len(), video_id);
        Ok(())
    }

    /// Shadow-ban a user, optionally hiding their earlier submissions too
    pub async fn shadow_ban(&self, public_user_id: &str, hide_old_submissions: bool) -> Result<()> {
        self.set_shadow_ban(public_user_id, true, Some(hide_old_submissions))
            .await
    }

    /// Lift a shadow ban. The service restores the user's hidden submissions
    /// unless told otherwise, so the flag is left out.
    pub async fn remove_shadow_ban(&self, public_user_id: &str) -> Result<()> {
        self.set_shadow_ban(public_user_id, false, None).await
    }

    /// Shadow-ban a user and hide everything they submitted before
    pub async fn hide_old_submissions(&self, public_user_id: &str) -> Result<()> {
        self.set_shadow_ban(public_user_id, true, Some(true)).await
    }

    async fn set_shadow_ban(
        &self,
        public_user_id: &str,
        enabled: bool,
        unhide_old_submissions: Option<bool>,
    ) -> Result<()> {
        let mut query = vec![
            ("userID", public_user_id),
            ("adminUserID", self.client.user_id()),
            ("enabled", if enabled { "true" } else { "false" }),
        ];
        if let Some(unhide) = unhide_old_submissions {
            query.push(("unHideOldSubmissions", if unhide { "true" } else { "false" }));
        }

        let response = self
            .client
            .post("/api/shadowBanUser")
            .query(&query)
            .send()
            .await?;
        response::empty(response).await?;

        info!(
            "Shadow ban for {} set to {} (old submissions flag: {:?})",
            public_user_id, enabled, unhide_old_submissions
        );
        Ok(())
    }

    /// Warn a user. `enabled: Some(false)` withdraws an active warning.
    pub async fn warn_user(&self, public_user_id: &str, reason: &str, enabled: Option<bool>) -> Result<()> {
        let request = WarnUserRequest {
            issuer_user_id: self.client.user_id(),
            user_id: public_user_id,
            enabled,
            reason,
        };

        let response = self
            .client
            .post("/api/warnUser")
            .json(&request)
            .send()
            .await?;
        response::empty(response).await
    }

    /// Drop the service-side cache entry for a video
    pub async fn clear_cache<'v>(&self, video: impl Into<VideoResolvable<'v>>) -> Result<()> {
        let video_id = video.into().resolve()?;
        let response = self
            .client
            .get("/api/clearCache")
            .query(&[("videoID", video_id), ("userID", self.client.user_id())])
            .send()
            .await?;
        response::empty(response).await
    }

    /// Hide every segment on a video
    pub async fn purge_all_segments<'v>(&self, video: impl Into<VideoResolvable<'v>>) -> Result<()> {
        let video_id = video.into().resolve()?;
        let response = self
            .client
            .get("/api/purgeAllSegments")
            .query(&[("videoID", video_id), ("userID", self.client.user_id())])
            .send()
            .await?;
        response::empty(response).await?;

        info!("Purged all segments on {}", video_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::{test_client, VIDEO_ID};
    use crate::error::ResponseErrorKind;
    use crate::types::{Category, Video};
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_block_submissions_of_category() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/noSegments")
            .match_body(Matcher::Json(serde_json::json!({
                "videoID": VIDEO_ID,
                "userID": "vip-user",
                "categories": ["sponsor", "music_offtopic"],
            })))
            .with_status(200)
            .create_async()
            .await;

        let client = test_client(&server, "vip-user");
        client
            .vip()
            .block_submissions_of_category(VIDEO_ID, &[Category::Sponsor, Category::MusicOfftopic])
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unauthorized_surfaces_as_moderation_rejection() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/noSegments")
            .with_status(403)
            .create_async()
            .await;

        let client = test_client(&server, "regular-user");
        let err = client
            .vip()
            .block_submissions_of_category(VIDEO_ID, &[Category::Sponsor])
            .await
            .unwrap_err();
        assert_eq!(err.kind(), Some(ResponseErrorKind::ModerationRejected));
    }

    #[tokio::test]
    async fn test_shadow_ban_variants() {
        let mut server = Server::new_async().await;
        let ban = server
            .mock("POST", "/api/shadowBanUser")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("userID".into(), "target".into()),
                Matcher::UrlEncoded("adminUserID".into(), "vip-user".into()),
                Matcher::UrlEncoded("enabled".into(), "true".into()),
                Matcher::UrlEncoded("unHideOldSubmissions".into(), "false".into()),
            ]))
            .with_status(200)
            .create_async()
            .await;
        let unban = server
            .mock("POST", "/api/shadowBanUser")
            .match_query(Matcher::Exact(
                "userID=target&adminUserID=vip-user&enabled=false".into(),
            ))
            .with_status(200)
            .create_async()
            .await;
        let hide = server
            .mock("POST", "/api/shadowBanUser")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("enabled".into(), "true".into()),
                Matcher::UrlEncoded("unHideOldSubmissions".into(), "true".into()),
            ]))
            .with_status(200)
            .create_async()
            .await;

        let client = test_client(&server, "vip-user");
        let vip = client.vip();
        vip.shadow_ban("target", false).await.unwrap();
        vip.remove_shadow_ban("target").await.unwrap();
        vip.hide_old_submissions("target").await.unwrap();

        ban.assert_async().await;
        unban.assert_async().await;
        hide.assert_async().await;
    }

    #[tokio::test]
    async fn test_unban_leaves_old_submissions_flag_to_service() {
        let mut server = Server::new_async().await;
        let with_flag = server
            .mock("POST", "/api/shadowBanUser")
            .match_query(Matcher::Regex("unHideOldSubmissions".into()))
            .with_status(200)
            .expect(0)
            .create_async()
            .await;
        let without_flag = server
            .mock("POST", "/api/shadowBanUser")
            .match_query(Matcher::UrlEncoded("enabled".into(), "false".into()))
            .with_status(200)
            .create_async()
            .await;

        let client = test_client(&server, "vip-user");
        client.vip().remove_shadow_ban("target").await.unwrap();

        with_flag.assert_async().await;
        without_flag.assert_async().await;
    }

    #[tokio::test]
    async fn test_warn_user_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/warnUser")
            .match_body(Matcher::Json(serde_json::json!({
                "issuerUserID": "vip-user",
                "userID": "target",
                "reason": "low quality submissions",
            })))
            .with_status(200)
            .create_async()
            .await;

        let client = test_client(&server, "vip-user");
        client
            .vip()
            .warn_user("target", "low quality submissions", None)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_cache_and_purge_take_video_objects() {
        let mut server = Server::new_async().await;
        let clear = server
            .mock("GET", "/api/clearCache")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("videoID".into(), VIDEO_ID.into()),
                Matcher::UrlEncoded("userID".into(), "vip-user".into()),
            ]))
            .with_status(200)
            .create_async()
            .await;
        let purge = server
            .mock("GET", "/api/purgeAllSegments")
            .match_query(Matcher::UrlEncoded("videoID".into(), VIDEO_ID.into()))
            .with_status(200)
            .create_async()
            .await;

        let video = Video {
            video_id: VIDEO_ID.to_string(),
            hash: String::new(),
            segments: Vec::new(),
        };
        let client = test_client(&server, "vip-user");
        client.vip().clear_cache(&video).await.unwrap();
        client.vip().purge_all_segments(VIDEO_ID).await.unwrap();

        clear.assert_async().await;
        purge.assert_async().await;
    }
}
