use const_format::concatcp;

pub const WEFUNK_SITE_URL: &str = "http://www.wefunkradio.com";

pub const WEFUNK_SHOWS_URL: &str = concatcp!(WEFUNK_SITE_URL, "/shows/");

pub const WEFUNK_SHOW_BASE_URL: &str = concatcp!(WEFUNK_SITE_URL, "/show/");

pub const WEFUNK_OLDER_SHOWS_EXAMPLE_URL: &str = concatcp!(WEFUNK_SHOWS_URL, "450");

pub const WEFUNK_STATION_NAME: &str = "WEFUNK RADIO";

pub const WEFUNK_GENRE: &str = "HipHop";

pub const WEFUNK_SHOW_TITLE_PREFIX: &str = "WEFUNK SHOW #";

pub const WEFUNK_SHOW_FILE_PREFIX: &str = "WeFunk_Show_";

pub const INTRO_TRACK_TITLE: &str = "intro";

pub const TALK_LABEL: &str = "talk";

pub const TALK_OVER_PREFIX: &str = " (over ";

pub const SHOW_DATE_FORMAT: &str = "%Y-%m-%d";

pub const SHOW_ITEM_ID_FORMAT: &str = concatcp!("sp_", SHOW_DATE_FORMAT);

pub const DEFAULT_REQUESTS_PER_SECOND: u64 = 2;
