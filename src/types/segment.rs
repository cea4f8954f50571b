use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category a skip segment belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "sponsor")]
    Sponsor,
    #[serde(rename = "intro")]
    Intro,
    #[serde(rename = "outro")]
    Outro,
    #[serde(rename = "interaction")]
    Interaction,
    #[serde(rename = "selfpromo")]
    SelfPromo,
    #[serde(rename = "music_offtopic")]
    MusicOfftopic,
    #[serde(rename = "preview")]
    Preview,
    #[serde(rename = "filler")]
    Filler,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Sponsor,
        Category::Intro,
        Category::Outro,
        Category::Interaction,
        Category::SelfPromo,
        Category::MusicOfftopic,
        Category::Preview,
        Category::Filler,
    ];

    /// Tag used by the service
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sponsor => "sponsor",
            Category::Intro => "intro",
            Category::Outro => "outro",
            Category::Interaction => "interaction",
            Category::SelfPromo => "selfpromo",
            Category::MusicOfftopic => "music_offtopic",
            Category::Preview => "preview",
            Category::Filler => "filler",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

/// Video platform the segments belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Service {
    #[default]
    YouTube,
    PeerTube,
    Twitch,
    Nebula,
    Spotify,
}

impl Service {
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::YouTube => "YouTube",
            Service::PeerTube => "PeerTube",
            Service::Twitch => "Twitch",
            Service::Nebula => "Nebula",
            Service::Spotify => "Spotify",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A skip segment as handed to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Service-assigned ID. `None` for segments built locally for submission.
    #[serde(rename = "UUID", default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    /// Start of the segment in seconds
    #[serde(rename = "startTime")]
    pub start_time: f64,

    /// End of the segment in seconds
    #[serde(rename = "endTime")]
    pub end_time: f64,

    pub category: Category,

    /// Duration of the video when the segment was submitted
    #[serde(rename = "videoDuration", default, skip_serializing_if = "Option::is_none")]
    pub video_duration: Option<f64>,
}

impl Segment {
    /// Build a segment for submission
    pub fn new(start_time: f64, end_time: f64, category: Category) -> Self {
        Self {
            uuid: None,
            start_time,
            end_time,
            category,
            video_duration: None,
        }
    }

    pub fn with_video_duration(mut self, duration: f64) -> Self {
        self.video_duration = Some(duration);
        self
    }

    /// Length of the segment in seconds
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// A segment as transmitted by the service: `{UUID, segment: [start, end], category, videoDuration}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireSegment {
    #[serde(rename = "UUID", default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    pub segment: [f64; 2],

    pub category: Category,

    #[serde(rename = "videoDuration", default, skip_serializing_if = "Option::is_none")]
    pub video_duration: Option<f64>,
}

impl From<WireSegment> for Segment {
    fn from(wire: WireSegment) -> Self {
        let [start_time, end_time] = wire.segment;
        Self {
            uuid: wire.uuid,
            start_time,
            end_time,
            category: wire.category,
            video_duration: wire.video_duration,
        }
    }
}

impl From<Segment> for WireSegment {
    fn from(segment: Segment) -> Self {
        Self {
            uuid: segment.uuid,
            segment: [segment.start_time, segment.end_time],
            category: segment.category,
            video_duration: segment.video_duration,
        }
    }
}

impl From<&Segment> for WireSegment {
    fn from(segment: &Segment) -> Self {
        segment.clone().into()
    }
}
