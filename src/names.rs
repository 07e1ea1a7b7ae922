//! Team names derived from logo filenames.

use std::fmt;

use serde::Serialize;

/// Identifier for a team as it appears in the cache, e.g. `lakers`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TeamName(String);

impl From<&str> for TeamName {
    fn from(name: &str) -> Self {
        TeamName(name.to_string())
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keep everything before the first occurrence of `suffix`.
///
/// This is not an extension strip: `foo.png.png` becomes `foo` and
/// `a.pngb.png` becomes `a`. A name without `suffix` is returned whole.
///
/// # Examples
/// ```
/// use team_logos_cache::names::strip_first;
///
/// assert_eq!(strip_first("lakers.png", ".png"), "lakers");
/// assert_eq!(strip_first("foo.png.png", ".png"), "foo");
/// assert_eq!(strip_first("README", ".png"), "README");
/// ```
pub fn strip_first<'a>(name: &'a str, suffix: &str) -> &'a str {
    match name.find(suffix) {
        Some(idx) => &name[..idx],
        None => name,
    }
}

/// Turn raw logo filenames into the sorted list of team names.
///
/// Each name is cut at the first `suffix`; results equal to `sentinel` or
/// empty are dropped. The remainder is sorted by code point. Duplicates are
/// kept.
pub fn derive_team_names<I, S>(filenames: I, suffix: &str, sentinel: &str) -> Vec<TeamName>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut teams: Vec<TeamName> = filenames
        .into_iter()
        .filter_map(|filename| {
            let filename = filename.as_ref();
            let team = strip_first(filename, suffix);
            if team.is_empty() || team == sentinel {
                log::debug!("Skipping logo entry '{}'", filename);
                None
            } else {
                Some(TeamName::from(team))
            }
        })
        .collect();

    teams.sort();
    teams
}
