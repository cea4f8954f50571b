//! SponsorBlock client
//!
//! Typed access to the SponsorBlock crowd-sourced skip-segment API: fetching
//! and submitting segments, voting, user statistics and VIP/admin moderation.
//! Segment lookups can be made privately through hash prefixes, see
//! [`Client::get_segments_privately`].
//!
//! ```no_run
//! use sponsorblock::{Category, Client, Options};
//!
//! # async fn run() -> sponsorblock::Result<()> {
//! let client = Client::new("my-local-user-id", Options::default())?;
//! let segments = client
//!     .get_segments_privately("jiK2jmTVF3A", &[Category::Sponsor], &[])
//!     .await?;
//! for segment in segments {
//!     println!("{} {:.1}-{:.1}", segment.category, segment.start_time, segment.end_time);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod privacy;
pub mod resolve;
pub mod response;
pub mod types;
pub mod util;

pub use client::{Admin, Client, Vip};
pub use config::{Config, Options};
pub use error::{Error, IdentifierKind, ResponseErrorKind, Result};
pub use resolve::{SegmentResolvable, VideoResolvable};
pub use types::{
    Category, LockedCategoriesEntry, OverallStats, Segment, SegmentInfo, SegmentUuid, Service,
    SortType, TopUsersColumns, UserIdPair, UserStats, VideoId, Video, VipStatus, VoteType,
    WireSegment, WireVideo,
};
pub use util::extract_video_id;
