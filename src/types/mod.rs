//! Data shapes exchanged with the service
//!
//! Client-facing types sit next to the wire types they are transcoded from.
//! Wire types keep the service's field names (`UUID`, `videoID`, ...) and
//! structure; client types flatten them into something easier to work with.

mod segment;
mod stats;
mod video;
mod vote;

pub use segment::{Category, Segment, Service, WireSegment};
pub use stats::{
    OverallStats, SegmentInfo, SortType, TopUsersColumns, UserIdPair, UserStats, VipStatus,
};
pub use video::{LockedCategoriesEntry, Video, WireVideo};
pub use vote::VoteType;

/// Opaque, platform-specific video identifier
pub type VideoId = String;

/// Service-assigned segment identifier
pub type SegmentUuid = String;
