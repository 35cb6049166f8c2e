use crate::wefunk::constants::{SHOW_DATE_FORMAT, WEFUNK_SHOW_FILE_PREFIX};
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowInfo {
    pub number: String,
    pub date: NaiveDate,
}

impl ShowInfo {
    pub fn new(number: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            date,
        }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn formatted_date(&self) -> String {
        self.date.format(SHOW_DATE_FORMAT).to_string()
    }

    /// Name of the low quality mp3 the archive serves for this show.
    pub fn mp3_lq_filename(&self) -> String {
        format!(
            "{WEFUNK_SHOW_FILE_PREFIX}{}_{}.mp3",
            self.number,
            self.formatted_date()
        )
    }

    pub fn cue_filename(&self) -> String {
        self.mp3_lq_filename().replace(".mp3", ".cue")
    }

    pub fn show_url(&self, show_base_url: &str) -> String {
        format!("{show_base_url}{}", self.formatted_date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wefunk::constants::WEFUNK_SHOW_BASE_URL;

    fn show() -> ShowInfo {
        ShowInfo::new("809", NaiveDate::from_ymd_opt(2015, 2, 6).unwrap())
    }

    #[test]
    fn mp3_filename_pads_the_date() {
        assert_eq!(show().mp3_lq_filename(), "WeFunk_Show_809_2015-02-06.mp3");
    }

    #[test]
    fn cue_filename_only_swaps_the_extension() {
        let show = show();
        assert_eq!(show.cue_filename(), "WeFunk_Show_809_2015-02-06.cue");
        assert_eq!(
            show.cue_filename().trim_end_matches(".cue"),
            show.mp3_lq_filename().trim_end_matches(".mp3")
        );
    }

    #[test]
    fn show_url_appends_the_date() {
        assert_eq!(
            show().show_url(WEFUNK_SHOW_BASE_URL),
            "http://www.wefunkradio.com/show/2015-02-06"
        );
        assert_eq!(
            show().show_url("http://localhost:8080/show/"),
            "http://localhost:8080/show/2015-02-06"
        );
    }

    #[test]
    fn year_comes_from_the_show_date() {
        assert_eq!(show().year(), 2015);
    }
}
