use crate::wefunk::constants::{TALK_LABEL, TALK_OVER_PREFIX};
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

lazy_static! {
    static ref PLAYLIST_ITEM_SELECTOR: Selector =
        Selector::parse(r#"ul[class="playlistregular"] div[class="content"] div"#).unwrap();
}

/// A rendered entry of the show page playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistItem {
    pub text: String,
    talk: bool,
}

impl PlaylistItem {
    pub fn is_talk(&self) -> bool {
        self.talk
    }
}

pub fn extract_playlist_items(document: &Html) -> Vec<PlaylistItem> {
    document
        .select(&PLAYLIST_ITEM_SELECTOR)
        .map(|element| PlaylistItem {
            text: element.text().collect(),
            talk: has_talk_marker(element),
        })
        .collect()
}

/// Talk segments are rendered as `<strong>talk</strong> (over Artist - Title)`,
/// the same words in plain track text do not count.
fn has_talk_marker(element: ElementRef) -> bool {
    element.descendants().any(|node| {
        let is_talk_label = ElementRef::wrap(node).is_some_and(|strong| {
            strong.value().name() == "strong" && strong.text().collect::<String>() == TALK_LABEL
        });

        is_talk_label
            && node
                .next_sibling()
                .and_then(|sibling| sibling.value().as_text())
                .is_some_and(|text| text.starts_with(TALK_OVER_PREFIX))
    })
}
