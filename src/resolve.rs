//! Identity resolution for arguments that accept either a bare ID or an
//! object returned by an earlier call

use crate::error::{Error, IdentifierKind, Result};
use crate::types::{Segment, SegmentInfo, Video};

/// A video given by ID or as a previously fetched [`Video`]
#[derive(Debug, Clone, Copy)]
pub enum VideoResolvable<'a> {
    Id(&'a str),
    Video(&'a Video),
}

impl<'a> VideoResolvable<'a> {
    /// The video ID, or `None` if the object does not carry one
    pub fn video_id(&self) -> Option<&'a str> {
        let id = match *self {
            VideoResolvable::Id(id) => id,
            VideoResolvable::Video(video) => video.video_id.as_str(),
        };
        (!id.is_empty()).then_some(id)
    }

    /// Like [`video_id`](Self::video_id) but fails before any request is built
    pub fn resolve(&self) -> Result<&'a str> {
        self.video_id().ok_or(Error::MissingIdentifier {
            kind: IdentifierKind::VideoId,
        })
    }
}

impl<'a> From<&'a str> for VideoResolvable<'a> {
    fn from(id: &'a str) -> Self {
        VideoResolvable::Id(id)
    }
}

impl<'a> From<&'a String> for VideoResolvable<'a> {
    fn from(id: &'a String) -> Self {
        VideoResolvable::Id(id.as_str())
    }
}

impl<'a> From<&'a Video> for VideoResolvable<'a> {
    fn from(video: &'a Video) -> Self {
        VideoResolvable::Video(video)
    }
}

/// A segment given by UUID or as a previously fetched segment
#[derive(Debug, Clone, Copy)]
pub enum SegmentResolvable<'a> {
    Uuid(&'a str),
    Segment(&'a Segment),
    Info(&'a SegmentInfo),
}

impl<'a> SegmentResolvable<'a> {
    /// The segment UUID. Locally built segments have none.
    pub fn uuid(&self) -> Option<&'a str> {
        let uuid = match *self {
            SegmentResolvable::Uuid(uuid) => Some(uuid),
            SegmentResolvable::Segment(segment) => segment.uuid.as_deref(),
            SegmentResolvable::Info(info) => Some(info.uuid.as_str()),
        };
        uuid.filter(|u| !u.is_empty())
    }

    pub fn resolve(&self) -> Result<&'a str> {
        self.uuid().ok_or(Error::MissingIdentifier {
            kind: IdentifierKind::SegmentUuid,
        })
    }
}

impl<'a> From<&'a str> for SegmentResolvable<'a> {
    fn from(uuid: &'a str) -> Self {
        SegmentResolvable::Uuid(uuid)
    }
}

impl<'a> From<&'a String> for SegmentResolvable<'a> {
    fn from(uuid: &'a String) -> Self {
        SegmentResolvable::Uuid(uuid.as_str())
    }
}

impl<'a> From<&'a Segment> for SegmentResolvable<'a> {
    fn from(segment: &'a Segment) -> Self {
        SegmentResolvable::Segment(segment)
    }
}

impl<'a> From<&'a SegmentInfo> for SegmentResolvable<'a> {
    fn from(info: &'a SegmentInfo) -> Self {
        SegmentResolvable::Info(info)
    }
}
