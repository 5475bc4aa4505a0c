//! Matches recent releases to users through the artists they listen to.
//!
//! A user "discovers" an artist by having listened to them. Every release
//! crediting a discovered artist is recommended, scored by how many of the
//! user's listens credit that release's artists.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{DateTime, Duration, TimeZone, Utc};
use itertools::Itertools;
use shared::discovery::{ListenRecord, RecentReleasesMessage, ScoredRelease, UserReleases};
use shared::release::ReleaseRecord;
use tracing::info;

/// Number of users batched into one [`RecentReleasesMessage`].
pub const USERS_PER_MESSAGE: usize = 5;

/// Listens before this year are not considered when no range is given.
pub const LAST_FM_FOUNDING_YEAR: i32 = 2002;

pub const MESSAGE_TYPE: &str = "recent_releases";

/// Most recent listen timestamp, if any.
pub fn latest_listen(listens: &[ListenRecord]) -> Option<DateTime<Utc>> {
    listens.iter().map(|l| l.listened_at).max()
}

/// Listens from the `days` days up to `latest`, both ends included.
/// `days == 0` reaches back to the start of [`LAST_FM_FOUNDING_YEAR`]; a range
/// reaching past the earliest representable time starts there instead.
pub fn listens_in_range(
    listens: &[ListenRecord],
    days: u32,
    latest: DateTime<Utc>,
) -> Vec<&ListenRecord> {
    let from = if days > 0 {
        latest
            .checked_sub_signed(Duration::days(i64::from(days)))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    } else {
        Utc.with_ymd_and_hms(LAST_FM_FOUNDING_YEAR, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    };

    listens
        .iter()
        .filter(|l| l.listened_at >= from && l.listened_at <= latest)
        .collect()
}

/// Recommends releases to every user who listened to one of their artists.
///
/// Users come out ordered by id, their releases by descending confidence.
/// Releases with equal confidence keep dataset order.
pub fn discover<'a, I>(releases: &[ReleaseRecord], listens: I) -> Vec<UserReleases>
where
    I: IntoIterator<Item = &'a ListenRecord>,
{
    let artists: HashSet<&str> = releases
        .iter()
        .flat_map(|r| r.artist_mbids.iter().map(String::as_str))
        .collect();

    // user -> artist -> number of listens crediting the artist
    let mut discovered: BTreeMap<i64, HashMap<&str, u64>> = BTreeMap::new();
    for listen in listens {
        for mbid in &listen.artist_credit_mbids {
            if let Some(artist) = artists.get(mbid.as_str()) {
                *discovered
                    .entry(listen.user_id)
                    .or_default()
                    .entry(*artist)
                    .or_default() += 1;
            }
        }
    }

    let unique_releases: Vec<&ReleaseRecord> = releases.iter().unique().collect();

    let users: Vec<UserReleases> = discovered
        .into_iter()
        .map(|(user_id, counts)| {
            let mut scored: Vec<ScoredRelease> = unique_releases
                .iter()
                .filter_map(|release| {
                    let matched: Vec<u64> = release
                        .artist_mbids
                        .iter()
                        .unique()
                        .filter_map(|mbid| counts.get(mbid.as_str()).copied())
                        .collect();
                    if matched.is_empty() {
                        return None;
                    }
                    Some(ScoredRelease {
                        release: (*release).clone(),
                        confidence: matched.iter().sum(),
                    })
                })
                .collect();
            scored.sort_by(|a, b| b.confidence.cmp(&a.confidence));
            UserReleases {
                user_id,
                releases: scored,
            }
        })
        .collect();

    info!(
        "Matched {} releases against listens of {} users",
        releases.len(),
        users.len()
    );
    users
}

/// Groups users into messages of at most `per_message` users each.
pub fn chunk_messages(
    users: &[UserReleases],
    database: &str,
    per_message: usize,
) -> Vec<RecentReleasesMessage> {
    users
        .chunks(per_message.max(1))
        .map(|chunk| RecentReleasesMessage {
            kind: MESSAGE_TYPE.to_string(),
            database: database.to_string(),
            data: chunk.to_vec(),
        })
        .collect()
}
