use serde::{Deserialize, Serialize};

use super::segment::{Category, Segment, WireSegment};

/// A video with the segments the service returned for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(rename = "videoID")]
    pub video_id: String,

    /// Full SHA-256 hash of the video ID, hex encoded
    pub hash: String,

    pub segments: Vec<Segment>,
}

/// One entry of a hash-prefix bucket from `/api/skipSegments/{prefix}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireVideo {
    #[serde(rename = "videoID")]
    pub video_id: String,

    pub hash: String,

    #[serde(default)]
    pub segments: Vec<WireSegment>,
}

impl From<WireVideo> for Video {
    fn from(wire: WireVideo) -> Self {
        Self {
            video_id: wire.video_id,
            hash: wire.hash,
            segments: wire.segments.into_iter().map(Segment::from).collect(),
        }
    }
}

impl From<Video> for WireVideo {
    fn from(video: Video) -> Self {
        Self {
            video_id: video.video_id,
            hash: video.hash,
            segments: video.segments.into_iter().map(WireSegment::from).collect(),
        }
    }
}

/// One entry of a hash-prefix bucket from `/api/lockCategories/{prefix}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockedCategoriesEntry {
    #[serde(rename = "videoID")]
    pub video_id: String,

    pub hash: String,

    pub categories: Vec<Category>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
