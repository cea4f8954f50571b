//! Privacy-preserving lookups
//!
//! Instead of sending a video ID, the client sends the first few hex
//! characters of its SHA-256 hash. The service answers with every video whose
//! hash shares that prefix, and the exact match is picked out locally so the
//! service never learns which of those videos was wanted.
//!
//! The prefix must be computed exactly like the service does: SHA-256 over the
//! UTF-8 video ID, lowercase hex, truncated to `len` characters.

use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::{LockedCategoriesEntry, WireVideo};

/// Rounds of SHA-256 applied to a local user ID to get its public form
pub const USER_ID_HASH_ROUNDS: usize = 5000;

/// Lowercase hex SHA-256 of `input`
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// First `len` hex characters of the video ID's hash.
/// `len` is clamped to the 64 characters of a full hash.
pub fn hash_prefix(video_id: &str, len: usize) -> String {
    let mut hash = sha256_hex(video_id);
    hash.truncate(len);
    hash
}

/// Public user ID as stored by the service: SHA-256 applied
/// [`USER_ID_HASH_ROUNDS`] times, each round hashing the previous hex string.
pub fn hashed_user_id(user_id: &str) -> String {
    let mut value = user_id.to_string();
    for _ in 0..USER_ID_HASH_ROUNDS {
        value = sha256_hex(&value);
    }
    value
}

/// Entries of a hash-prefix bucket
pub trait BucketEntry {
    fn video_id(&self) -> &str;
}

impl BucketEntry for WireVideo {
    fn video_id(&self) -> &str {
        &self.video_id
    }
}

impl BucketEntry for LockedCategoriesEntry {
    fn video_id(&self) -> &str {
        &self.video_id
    }
}

/// Pick the entry for `video_id` out of a bucket returned for `prefix`
pub fn find_in_bucket<T: BucketEntry>(bucket: Vec<T>, video_id: &str, prefix: &str) -> Result<T> {
    let candidates = bucket.len();
    match bucket.into_iter().find(|entry| entry.video_id() == video_id) {
        Some(entry) => {
            debug!(
                "Matched video in bucket for prefix {} ({} candidates)",
                prefix, candidates
            );
            Ok(entry)
        }
        None => {
            warn!(
                "Video not found among {} candidates for prefix {}",
                candidates, prefix
            );
            Err(Error::LookupMiss {
                video_id: video_id.to_string(),
                hash_prefix: prefix.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIDEO_ID: &str = "jiK2jmTVF3A";
    const VIDEO_HASH: &str = "d036369b39e9198f2edaf43e1f9a5685abc180c1c2a8eec43bdc4eba9a066bfe";

    fn wire_video(video_id: &str) -> WireVideo {
        WireVideo {
            video_id: video_id.to_string(),
            hash: sha256_hex(video_id),
            segments: Vec::new(),
        }
    }

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(sha256_hex(VIDEO_ID), VIDEO_HASH);
    }

    #[test]
    fn test_hash_prefix_fixture() {
        assert_eq!(hash_prefix(VIDEO_ID, 4), "d036");
        assert_eq!(hash_prefix(VIDEO_ID, 3), "d03");
        assert_eq!(hash_prefix(VIDEO_ID, 32), &VIDEO_HASH[..32]);
        assert_eq!(hash_prefix("dQw4w9WgXcQ", 5), "5f6b0");
    }

    #[test]
    fn test_hash_prefix_is_stable() {
        let first = hash_prefix(VIDEO_ID, 7);
        for _ in 0..10 {
            assert_eq!(hash_prefix(VIDEO_ID, 7), first);
        }
    }

    #[test]
    fn test_hashed_user_id_fixture() {
        assert_eq!(
            hashed_user_id("test"),
            "2f327ef967ade1ebf4319163f7debbda9cc17bb0c8c834b00b30ca1cf1c256ee"
        );
        assert_eq!(
            hashed_user_id(""),
            "707e55ac891d0bc7070bf0116908d4dd4f84e31eaa3c0abc2b44a2e14b46785e"
        );
    }

    #[test]
    fn test_find_in_bucket_matches_exact_id() {
        let bucket = vec![wire_video("aaa"), wire_video(VIDEO_ID), wire_video("bbb")];
        let found = find_in_bucket(bucket, VIDEO_ID, "d036").unwrap();
        assert_eq!(found.hash, VIDEO_HASH);
    }

    #[test]
    fn test_find_in_bucket_miss() {
        let bucket = vec![wire_video("aaa"), wire_video("bbb"), wire_video("ccc")];
        let err = find_in_bucket(bucket, VIDEO_ID, "d036").unwrap_err();
        match err {
            Error::LookupMiss {
                video_id,
                hash_prefix,
            } => {
                assert_eq!(video_id, VIDEO_ID);
                assert_eq!(hash_prefix, "d036");
            }
            other => panic!("expected LookupMiss, got {:?}", other),
        }
    }

    #[test]
    fn test_find_in_bucket_is_case_sensitive() {
        let bucket = vec![wire_video("jik2jmtvf3a")];
        assert!(find_in_bucket(bucket, VIDEO_ID, "d036").is_err());
    }
}
