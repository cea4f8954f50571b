//! SponsorBlock API client
//!
//! Every public method maps to one endpoint and performs exactly one request.
//! Privileged endpoints live on the [`Vip`] and [`Admin`] views obtained from
//! [`Client::vip`] and [`Client::admin`]; the service decides whether the user
//! is actually allowed to call them.

mod admin;
mod vip;

pub use admin::Admin;
pub use vip::Vip;

use reqwest::header::USER_AGENT;
use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::{debug, info, warn};

use crate::config::{Config, Options};
use crate::error::Result;
use crate::privacy::{find_in_bucket, hash_prefix, hashed_user_id};
use crate::resolve::{SegmentResolvable, VideoResolvable};
use crate::response::{self, LooseNumber};
use crate::types::{
    Category, LockedCategoriesEntry, OverallStats, Segment, SegmentInfo, SortType,
    TopUsersColumns, UserIdPair, UserStats, VipStatus, VoteType, WireSegment, WireVideo,
};

type Query = Vec<(&'static str, String)>;

/// Body of `POST /api/skipSegments`
#[derive(Debug, Serialize)]
struct SubmitRequest<'a> {
    #[serde(rename = "videoID")]
    video_id: &'a str,
    #[serde(rename = "userID")]
    user_id: &'a str,
    segments: Vec<WireSegment>,
    #[serde(rename = "userAgent")]
    user_agent: &'a str,
}

#[derive(Debug, Deserialize)]
struct ViewsResponse {
    #[serde(rename = "viewCount")]
    view_count: u64,
}

#[derive(Debug, Deserialize)]
struct TimeSavedResponse {
    #[serde(rename = "timeSaved")]
    time_saved: f64,
}

#[derive(Debug, Deserialize)]
struct UsernameResponse {
    #[serde(rename = "userName")]
    user_name: String,
}

#[derive(Debug, Deserialize)]
struct DaysSavedResponse {
    #[serde(rename = "daysSaved")]
    days_saved: LooseNumber,
}

#[derive(Debug, Deserialize)]
struct LockCategoriesResponse {
    categories: Vec<Category>,
}

/// Client bound to one local user ID
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    user_id: String,
    options: Options,
    hashed_user_id: OnceLock<String>,
}

impl Client {
    /// Create a client. Fails if the options are out of range.
    pub fn new(user_id: impl Into<String>, options: Options) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(options.user_agent.clone())
            .build()?;
        Self::with_http_client(user_id, options, http)
    }

    /// Create a client on top of a preconfigured transport (timeouts,
    /// proxies, connection pools are the transport's business)
    pub fn with_http_client(
        user_id: impl Into<String>,
        options: Options,
        http: reqwest::Client,
    ) -> Result<Self> {
        let options = options.validated()?;
        debug!(
            "SponsorBlock client for {} (prefix length {}, service {})",
            options.base_url, options.hash_prefix_length, options.service
        );

        Ok(Self {
            http,
            user_id: user_id.into(),
            options,
            hashed_user_id: OnceLock::new(),
        })
    }

    pub fn from_config(config: Config) -> Result<Self> {
        Self::new(config.user_id, config.options)
    }

    /// The local (private) user ID
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// VIP-only endpoints
    pub fn vip(&self) -> Vip<'_> {
        Vip::new(self)
    }

    /// Admin-only endpoints
    pub fn admin(&self) -> Admin<'_> {
        Admin::new(self)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        debug!("GET {}", path);
        self.http
            .get(format!("{}{}", self.options.base_url, path))
            .header(USER_AGENT, &self.options.user_agent)
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        debug!("POST {}", path);
        self.http
            .post(format!("{}{}", self.options.base_url, path))
            .header(USER_AGENT, &self.options.user_agent)
    }

    /// Query shared by the plain and private segment lookups
    fn segment_query(&self, categories: &[Category], required_segments: &[&str]) -> Result<Query> {
        let mut query: Query = vec![("service", self.options.service.to_string())];
        if !categories.is_empty() {
            query.push(("categories", serde_json::to_string(categories)?));
        }
        if !required_segments.is_empty() {
            query.push(("requiredSegments", serde_json::to_string(required_segments)?));
        }
        Ok(query)
    }

    /// Get the skip segments of a video.
    ///
    /// An empty `categories` slice leaves the filter to the service, which
    /// defaults to `sponsor`. `required_segments` lists UUIDs that must be
    /// returned even if they would otherwise be hidden.
    pub async fn get_segments<'v>(
        &self,
        video: impl Into<VideoResolvable<'v>>,
        categories: &[Category],
        required_segments: &[&str],
    ) -> Result<Vec<Segment>> {
        let video_id = video.into().resolve()?;
        let mut query = self.segment_query(categories, required_segments)?;
        query.insert(0, ("videoID", video_id.to_string()));

        let response = self.get("/api/skipSegments").query(&query).send().await?;
        let segments: Vec<WireSegment> = response::json(response).await?;
        Ok(segments.into_iter().map(Segment::from).collect())
    }

    /// Get the skip segments of a video without revealing which video.
    ///
    /// Only a prefix of the video ID's hash is sent; the exact match is picked
    /// out of the returned bucket locally. Fails with
    /// [`Error::LookupMiss`](crate::Error::LookupMiss) when the bucket does not
    /// contain the video.
    pub async fn get_segments_privately<'v>(
        &self,
        video: impl Into<VideoResolvable<'v>>,
        categories: &[Category],
        required_segments: &[&str],
    ) -> Result<Vec<Segment>> {
        let video_id = video.into().resolve()?;
        let prefix = hash_prefix(video_id, self.options.hash_prefix_length);
        let query = self.segment_query(categories, required_segments)?;
        debug!("Looking up segments by hash prefix {}", prefix);

        let response = self
            .get(&format!("/api/skipSegments/{}", prefix))
            .query(&query)
            .send()
            .await?;
        let bucket: Vec<WireVideo> = response::json(response).await?;
        let video = find_in_bucket(bucket, video_id, &prefix)?;
        Ok(video.segments.into_iter().map(Segment::from).collect())
    }

    /// Submit new segments for a video. Any UUIDs on the segments are dropped.
    pub async fn post_segments<'v>(
        &self,
        video: impl Into<VideoResolvable<'v>>,
        segments: &[Segment],
    ) -> Result<()> {
        let video_id = video.into().resolve()?;
        let request = SubmitRequest {
            video_id,
            user_id: &self.user_id,
            segments: segments
                .iter()
                .map(|segment| WireSegment {
                    uuid: None,
                    ..WireSegment::from(segment)
                })
                .collect(),
            user_agent: &self.options.user_agent,
        };

        let response = self
            .post("/api/skipSegments")
            .json(&request)
            .send()
            .await?;
        response::empty(response).await?;

        info!("Submitted {} segments for {}", segments.len(), video_id);
        Ok(())
    }

    /// Vote a submission up or down, or withdraw a vote
    pub async fn vote<'s>(&self, segment: impl Into<SegmentResolvable<'s>>, vote: VoteType) -> Result<()> {
        let uuid = segment.into().resolve()?;
        let vote_type = vote.code().to_string();
        let response = self
            .get("/api/voteOnSponsorTime")
            .query(&[
                ("UUID", uuid),
                ("userID", self.user_id.as_str()),
                ("type", vote_type.as_str()),
            ])
            .send()
            .await?;
        response::empty(response).await
    }

    /// Vote for moving a submission to a more fitting category
    pub async fn vote_category<'s>(
        &self,
        segment: impl Into<SegmentResolvable<'s>>,
        category: Category,
    ) -> Result<()> {
        let uuid = segment.into().resolve()?;
        let response = self
            .get("/api/voteOnSponsorTime")
            .query(&[
                ("UUID", uuid),
                ("userID", self.user_id.as_str()),
                ("category", category.as_str()),
            ])
            .send()
            .await?;
        response::empty(response).await
    }

    /// Record that a segment was actually skipped
    pub async fn viewed<'s>(&self, segment: impl Into<SegmentResolvable<'s>>) -> Result<()> {
        let uuid = segment.into().resolve()?;
        let response = self
            .post("/api/viewedVideoSponsorTime")
            .query(&[("UUID", uuid)])
            .send()
            .await?;
        response::empty(response).await
    }

    /// How many times this user's submissions have been skipped
    pub async fn get_views(&self) -> Result<u64> {
        let response = self
            .get("/api/getViewsForUser")
            .query(&[("userID", &self.user_id)])
            .send()
            .await?;
        let data: ViewsResponse = response::json(response).await?;
        Ok(data.view_count)
    }

    /// Minutes this user's submissions saved others
    pub async fn get_time_saved(&self) -> Result<f64> {
        let response = self
            .get("/api/getSavedTimeForUser")
            .query(&[("userID", &self.user_id)])
            .send()
            .await?;
        let data: TimeSavedResponse = response::json(response).await?;
        Ok(data.time_saved)
    }

    pub async fn set_username(&self, username: &str) -> Result<()> {
        let response = self
            .post("/api/setUsername")
            .query(&[("userID", self.user_id.as_str()), ("username", username)])
            .send()
            .await?;
        response::empty(response).await
    }

    pub async fn get_username(&self) -> Result<String> {
        let response = self
            .get("/api/getUsername")
            .query(&[("userID", &self.user_id)])
            .send()
            .await?;
        let data: UsernameResponse = response::json(response).await?;
        Ok(data.user_name)
    }

    /// Leaderboard, one row per user
    pub async fn get_top_users(&self, sort: SortType) -> Result<Vec<UserStats>> {
        let response = self
            .get("/api/getTopUsers")
            .query(&[("sortType", sort.code())])
            .send()
            .await?;
        let columns: TopUsersColumns = response::json(response).await?;
        Ok(columns.into_rows())
    }

    pub async fn get_overall_stats(&self) -> Result<OverallStats> {
        let response = self.get("/api/getTotalStats").send().await?;
        response::json(response).await
    }

    /// Days saved across all users
    pub async fn get_days_saved(&self) -> Result<f64> {
        let response = self.get("/api/getDaysSavedFormatted").send().await?;
        let data: DaysSavedResponse = response::json(response).await?;
        data.days_saved.into_f64()
    }

    pub async fn is_vip(&self) -> Result<bool> {
        let response = self
            .get("/api/isUserVIP")
            .query(&[("userID", &self.user_id)])
            .send()
            .await?;
        let status: VipStatus = response::json(response).await?;
        Ok(status.vip)
    }

    /// Check up front whether privileged calls will be authorized.
    /// Returns the VIP flag and logs a warning when it is not set.
    pub async fn check_authorization(&self) -> Result<bool> {
        let vip = self.is_vip().await?;
        if vip {
            info!("User {} is VIP", self.hashed_user_id());
        } else {
            warn!("User is not VIP, VIP methods will be unauthorized");
        }
        Ok(vip)
    }

    /// Public form of the local user ID, as stored by the service.
    /// Computed on first use and kept for the lifetime of the client.
    pub fn hashed_user_id(&self) -> &str {
        self.hashed_user_id
            .get_or_init(|| hashed_user_id(&self.user_id))
    }

    /// Full database records for a set of segments
    pub async fn get_segment_info(&self, segments: &[SegmentResolvable<'_>]) -> Result<Vec<SegmentInfo>> {
        let uuids = segments
            .iter()
            .map(|segment| segment.resolve())
            .collect::<Result<Vec<_>>>()?;
        let response = self
            .get("/api/segmentInfo")
            .query(&[("UUIDs", serde_json::to_string(&uuids)?)])
            .send()
            .await?;
        response::json(response).await
    }

    /// Search public user IDs by username
    pub async fn get_user_id(&self, username: &str, exact: bool) -> Result<Vec<UserIdPair>> {
        let response = self
            .get("/api/userID")
            .query(&[("username", username), ("exact", if exact { "true" } else { "false" })])
            .send()
            .await?;
        response::json(response).await
    }

    /// Categories locked by VIPs for a video
    pub async fn get_lock_categories<'v>(&self, video: impl Into<VideoResolvable<'v>>) -> Result<Vec<Category>> {
        let video_id = video.into().resolve()?;
        let response = self
            .get("/api/lockCategories")
            .query(&[("videoID", video_id)])
            .send()
            .await?;
        let data: LockCategoriesResponse = response::json(response).await?;
        Ok(data.categories)
    }

    /// Locked categories looked up by hash prefix, see [`get_segments_privately`](Self::get_segments_privately)
    pub async fn get_lock_categories_privately<'v>(
        &self,
        video: impl Into<VideoResolvable<'v>>,
    ) -> Result<Vec<Category>> {
        let video_id = video.into().resolve()?;
        let prefix = hash_prefix(video_id, self.options.hash_prefix_length);
        debug!("Looking up locked categories by hash prefix {}", prefix);

        let response = self
            .get(&format!("/api/lockCategories/{}", prefix))
            .send()
            .await?;
        let bucket: Vec<LockedCategoriesEntry> = response::json(response).await?;
        let entry = find_in_bucket(bucket, video_id, &prefix)?;
        Ok(entry.categories)
    }
}
