use reqwest::Url;

/// Extract the video ID from a full YouTube URL.
///
/// Understands `youtu.be/<id>`, `watch?v=<id>`, `/v/<id>`, `/embed/<id>`,
/// `/shorts/<id>` and `/live/<id>`. Returns `None` for anything else.
pub fn extract_video_id(url: &str) -> Option<String> {
    let url = Url::parse(url.trim()).ok()?;
    let host = url.host_str()?.trim_start_matches("www.").trim_start_matches("m.");

    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());

    let id = if host == "youtu.be" {
        segments.next().map(str::to_string)
    } else if host == "youtube.com" || host == "youtube-nocookie.com" || host == "music.youtube.com" {
        match segments.next() {
            Some("watch") => url
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned()),
            Some("v" | "embed" | "shorts" | "live") => segments.next().map(str::to_string),
            _ => None,
        }
    } else {
        None
    };

    id.filter(|id| !id.is_empty())
}
