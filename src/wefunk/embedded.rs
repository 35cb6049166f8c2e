//! Reads JSON blobs the show pages assign to script variables, e.g.
//! `var tracks = {"tracks":[...]};`.
//!
//! Extraction is two staged: the variable's assignment marker is located in
//! the raw page text, then exactly one JSON value is deserialized starting
//! right after the `=`. Whatever follows the value (`;`, more script) is
//! left alone, so semicolons inside JSON strings are fine.

use crate::wefunk::error::{WefunkError, WefunkResult};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::de::DeserializeOwned;

lazy_static! {
    static ref ASSIGNMENT_RE: Regex = Regex::new(r"var\s+([A-Za-z_$][\w$]*)\s*=\s*").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptVariable {
    /// Per track artist and title.
    TrackExtra,
    /// Per track start positions in milliseconds.
    Tracks,
}

impl ScriptVariable {
    pub fn name(self) -> &'static str {
        match self {
            ScriptVariable::TrackExtra => "trackextra",
            ScriptVariable::Tracks => "tracks",
        }
    }
}

/// Deserializes the first assignment to `variable` found in `page`.
pub fn extract_script_json<T: DeserializeOwned>(
    page: &str,
    variable: ScriptVariable,
) -> WefunkResult<T> {
    let name = variable.name();

    let start = ASSIGNMENT_RE
        .captures_iter(page)
        .find(|captures| &captures[1] == name)
        .and_then(|captures| captures.get(0))
        .map(|assignment| assignment.end())
        .ok_or(WefunkError::MissingScriptVariable(name))?;

    debug!("Found script variable `{name}` at byte {start}");

    serde_json::Deserializer::from_str(&page[start..])
        .into_iter::<T>()
        .next()
        .ok_or(WefunkError::MissingScriptVariable(name))?
        .map_err(|source| WefunkError::InvalidScriptJson { name, source })
}
