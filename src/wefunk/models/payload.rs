use serde::Deserialize;

/// One element of the `trackextra` script variable. Only the first entry of
/// each element carries the artist (`a`) and title (`t`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackExtraEntry {
    #[serde(default)]
    pub a: Option<String>,
    #[serde(default)]
    pub t: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TrackExtraPayload(pub Vec<Option<Vec<TrackExtraEntry>>>);

impl TrackExtraPayload {
    /// Artist and title of the track at `index`, empty when the site has none.
    pub fn artist_and_title(&self, index: usize) -> (String, String) {
        let first = self
            .0
            .get(index)
            .and_then(Option::as_ref)
            .and_then(|entries| entries.first());

        match first {
            Some(entry) => (
                entry.a.clone().unwrap_or_default(),
                entry.t.clone().unwrap_or_default(),
            ),
            None => (String::new(), String::new()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TracksPayload {
    pub tracks: Vec<TrackPosition>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TrackPosition {
    /// Start of the track in milliseconds since the show started.
    pub mspos: u64,
}
