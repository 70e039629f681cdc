//! Timestamp helpers: last-edited computation, refresh bookkeeping, and
//! human labels ("Today 14:02", "Yesterday 09:30").

use crate::core::error::PmanError;
use crate::core::schemas::{Bucket, LAST_REFRESH_TIME_KEY};
use crate::core::store::Store;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use std::collections::HashMap;
use std::path::Path;
use walkdir::WalkDir;

/// Layout of stored last-edited times, e.g. `02 Jan 06 15:04`.
pub const LAST_EDITED_FORMAT: &str = "%d %b %y %H:%M";
pub const ONE_DAY_SECS: i64 = 86400;
pub const LOOKUP_FAILED_LABEL: &str = "Something went wrong";
pub const UNKNOWN_TIME_LABEL: &str = "unnkown";

/// Last-modified time of the newest regular file under the project's path.
pub fn get_last_modified_time(store: &Store, project_name: &str) -> String {
    let path = match store.get_record(project_name, Bucket::ProjectPaths) {
        Ok(p) => p,
        Err(e) => {
            tracing::debug!(project = project_name, error = %e, "no path for project");
            return LOOKUP_FAILED_LABEL.to_string();
        }
    };
    format_last_edited(latest_file_mtime(Path::new(&path)))
}

/// Walks `dir` in file-name order and returns the newest file mtime seen
/// before the walk ends or hits its first error. Directories are not compared.
pub fn latest_file_mtime(dir: &Path) -> Option<NaiveDateTime> {
    let mut latest: Option<NaiveDateTime> = None;
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "walk aborted");
                break;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        let modified = match entry.metadata().map_err(std::io::Error::from).and_then(|m| m.modified()) {
            Ok(t) => DateTime::<Local>::from(t).naive_local(),
            Err(e) => {
                tracing::debug!(path = %entry.path().display(), error = %e, "walk aborted");
                break;
            }
        };
        if latest.is_none_or(|l| modified > l) {
            latest = Some(modified);
        }
    }
    latest
}

/// Formats a last-edited time; `None` renders as the zero time `01 Jan 01 00:00`.
pub fn format_last_edited(t: Option<NaiveDateTime>) -> String {
    let t = t.unwrap_or_else(zero_time);
    t.format(LAST_EDITED_FORMAT).to_string()
}

fn zero_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Recompute the last-edited cache for every indexed project.
pub fn refresh_last_edited(store: &Store) -> Result<HashMap<String, String>, PmanError> {
    let projects = store.get_all_records(Bucket::ProjectPaths)?;
    let edited: HashMap<String, String> = projects
        .iter()
        .map(|(name, path)| {
            (
                name.clone(),
                format_last_edited(latest_file_mtime(Path::new(path))),
            )
        })
        .collect();
    store.write_to_db(&edited, Bucket::LastEdited)?;
    update_last_edited_time(store)?;
    Ok(edited)
}

/// Record "now" as the last refresh time.
pub fn update_last_edited_time(store: &Store) -> Result<(), PmanError> {
    let rec = HashMap::from([(
        LAST_REFRESH_TIME_KEY.to_string(),
        Local::now().timestamp().to_string(),
    )]);
    store.write_to_db(&rec, Bucket::Config)
}

/// Whether more than a day has elapsed since the Unix timestamp `t`.
/// Unparseable input counts as the epoch.
pub fn day_passed(t: &str) -> bool {
    day_passed_at(t, Local::now().timestamp())
}

pub fn day_passed_at(t: &str, now: i64) -> bool {
    let rec_time = t.trim().parse::<i64>().unwrap_or(0);
    now.saturating_sub(rec_time) > ONE_DAY_SECS
}

/// Human label and Unix timestamp for a stored last-edited time.
///
/// Returns `("unnkown", 0)` when `tstr` does not parse.
pub fn parse_time(tstr: &str) -> (String, i64) {
    parse_time_at(tstr, Local::now().date_naive())
}

pub fn parse_time_at(tstr: &str, today: NaiveDate) -> (String, i64) {
    let parsed = match NaiveDateTime::parse_from_str(tstr, LAST_EDITED_FORMAT) {
        Ok(p) => p,
        Err(_) => return (UNKNOWN_TIME_LABEL.to_string(), 0),
    };
    let timestamp = Local
        .from_local_datetime(&parsed)
        .earliest()
        .map(|dt| dt.timestamp())
        .unwrap_or_else(|| parsed.and_utc().timestamp());

    let clock = parsed.format("%H:%M");
    if parsed.date() == today {
        (format!("Today {}", clock), timestamp)
    } else if today.pred_opt() == Some(parsed.date()) {
        (format!("Yesterday {}", clock), timestamp)
    } else {
        (tstr.to_string(), timestamp)
    }
}
