use crate::built_info;
use lazy_static::lazy_static;
use reqwest::Client;

lazy_static! {
    pub static ref USER_AGENT: String = format!(
        "{}/{} ({})",
        built_info::PKG_NAME,
        built_info::PKG_VERSION,
        built_info::TARGET
    );
    pub static ref CLIENT: Client = Client::new();
}
