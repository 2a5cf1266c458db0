use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, instrument};

use crate::model::record::GameRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusBucket {
    Live,
    Upcoming,
    Completed,
}

impl StatusBucket {
    pub const ALL: [StatusBucket; 3] = [StatusBucket::Live, StatusBucket::Upcoming, StatusBucket::Completed];

    /// Position in the combined ordering; lower sorts first.
    pub fn priority(self) -> u8 {
        match self {
            StatusBucket::Live => 0,
            StatusBucket::Upcoming => 1,
            StatusBucket::Completed => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            StatusBucket::Live => "Live Games",
            StatusBucket::Upcoming => "Upcoming Games",
            StatusBucket::Completed => "Completed Games",
        }
    }
}

/// A keyword set and the bucket it selects when any keyword occurs in the status text.
#[derive(Debug, Clone, Copy)]
pub struct BucketRule {
    pub bucket: StatusBucket,
    pub keywords: &'static [&'static str],
}

/// Checked top to bottom, first match wins. Matching is case-sensitive.
pub const BUCKET_RULES: &[BucketRule] = &[
    BucketRule { bucket: StatusBucket::Live, keywords: &["In Progress", "Live", "Quarter", "Half"] },
    BucketRule { bucket: StatusBucket::Completed, keywords: &["Finished", "Ended", "Complete"] },
];

/// Where a status lands when no rule matches.
pub const FALLBACK_BUCKET: StatusBucket = StatusBucket::Upcoming;

/// Outcome of running a status through [`BUCKET_RULES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    Matched { bucket: StatusBucket, keyword: &'static str },
    Fallback,
}

impl Assignment {
    pub fn bucket(self) -> StatusBucket {
        match self {
            Assignment::Matched { bucket, .. } => bucket,
            Assignment::Fallback => FALLBACK_BUCKET,
        }
    }
}

pub fn assign(status: &str) -> Assignment {
    assign_with(BUCKET_RULES, status)
}

/// Run `status` through an arbitrary rule list. Exposed so rule tables can be tested on their own.
pub fn assign_with(rules: &[BucketRule], status: &str) -> Assignment {
    for rule in rules {
        if let Some(keyword) = rule.keywords.iter().copied().find(|k| status.contains(k)) {
            return Assignment::Matched { bucket: rule.bucket, keyword };
        }
    }
    Assignment::Fallback
}

pub fn bucket_for(status: &str) -> StatusBucket {
    assign(status).bucket()
}

/// One classification pass over a fetch response.
///
/// Records are held once, in combined order; the per-bucket views are
/// contiguous slices of it, so they always agree with the combined ordering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScheduleSnapshot {
    combined: Vec<GameRecord>,
    live_len: usize,
    upcoming_len: usize,
}

impl ScheduleSnapshot {
    pub fn combined(&self) -> &[GameRecord] {
        &self.combined
    }

    pub fn into_combined(self) -> Vec<GameRecord> {
        self.combined
    }

    pub fn live(&self) -> &[GameRecord] {
        &self.combined[..self.live_len]
    }

    pub fn upcoming(&self) -> &[GameRecord] {
        &self.combined[self.live_len..self.live_len + self.upcoming_len]
    }

    pub fn completed(&self) -> &[GameRecord] {
        &self.combined[self.live_len + self.upcoming_len..]
    }

    pub fn bucket(&self, bucket: StatusBucket) -> &[GameRecord] {
        match bucket {
            StatusBucket::Live => self.live(),
            StatusBucket::Upcoming => self.upcoming(),
            StatusBucket::Completed => self.completed(),
        }
    }

    pub fn len(&self) -> usize {
        self.combined.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combined.is_empty()
    }
}

impl Serialize for ScheduleSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ScheduleSnapshot", 4)?;
        s.serialize_field("live", self.live())?;
        s.serialize_field("upcoming", self.upcoming())?;
        s.serialize_field("completed", self.completed())?;
        s.serialize_field("combined", self.combined())?;
        s.end()
    }
}

/// Bucket and order a fetch response.
///
/// Sort key is (bucket priority, timestamp); `sort_by_key` is stable so equal
/// keys keep their input order.
#[instrument(level = "debug", skip(games), fields(games = games.len()))]
pub fn classify(games: Vec<GameRecord>) -> ScheduleSnapshot {
    let mut keyed: Vec<(StatusBucket, GameRecord)> = games
        .into_iter()
        .map(|g| {
            let assignment = assign(&g.status);
            if assignment == Assignment::Fallback {
                debug!(game_id = g.id, status = %g.status, "No bucket rule matched, using fallback");
            }
            (assignment.bucket(), g)
        })
        .collect();
    keyed.sort_by_key(|(bucket, g)| (bucket.priority(), g.timestamp));

    let live_len = keyed.iter().filter(|(b, _)| *b == StatusBucket::Live).count();
    let upcoming_len = keyed.iter().filter(|(b, _)| *b == StatusBucket::Upcoming).count();
    let combined = keyed.into_iter().map(|(_, g)| g).collect();

    ScheduleSnapshot { combined, live_len, upcoming_len }
}
