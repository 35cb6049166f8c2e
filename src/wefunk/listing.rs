use crate::wefunk::constants::SHOW_ITEM_ID_FORMAT;
use crate::wefunk::error::{WefunkError, WefunkResult};
use crate::wefunk::models::show::ShowInfo;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

lazy_static! {
    static ref SHOW_ITEM_SELECTOR: Selector = Selector::parse(r#"a[class*="show-item"]"#).unwrap();
    static ref SHOW_NUMBER_RE: Regex = Regex::new(r"\d+").unwrap();
}

/// Collects every show linked from a shows index page, in page order.
///
/// A page without show items yields an empty list. A show item whose number
/// or date cannot be read fails the whole page.
pub fn parse_show_listing(html: &str) -> WefunkResult<Vec<ShowInfo>> {
    let document = Html::parse_document(html);

    let shows = document
        .select(&SHOW_ITEM_SELECTOR)
        .map(parse_show_item)
        .collect::<WefunkResult<Vec<_>>>()?;

    debug!("Parsed {} show items from listing page", shows.len());

    Ok(shows)
}

fn parse_show_item(element: ElementRef) -> WefunkResult<ShowInfo> {
    let href = element
        .value()
        .attr("href")
        .ok_or_else(|| WefunkError::InvalidShowItem(element.html()))?;

    let number = SHOW_NUMBER_RE
        .find(href)
        .ok_or_else(|| WefunkError::InvalidShowItem(format!("no show number in href {href:?}")))?
        .as_str();

    let id = element
        .value()
        .attr("id")
        .ok_or_else(|| WefunkError::InvalidShowItem(element.html()))?;

    let date = NaiveDate::parse_from_str(id, SHOW_ITEM_ID_FORMAT).map_err(|source| {
        WefunkError::InvalidShowDate {
            id: id.to_string(),
            source,
        }
    })?;

    Ok(ShowInfo::new(number, date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> String {
        format!("<!DOCTYPE html><html><head><title>shows</title></head><body>{body}</body></html>")
    }

    #[test]
    fn parses_show_items_in_page_order() {
        let html = page(
            r#"
            <div class="shows">
                <a class="show-item odd" id="sp_2015-02-26" href="/shows/810/">Show 810</a>
                <a href="/about">About</a>
                <a class="show-item" id="sp_2015-02-19" href="/shows/809/">Show 809</a>
            </div>"#,
        );

        let shows = parse_show_listing(&html).unwrap();

        assert_eq!(
            shows,
            vec![
                ShowInfo::new("810", NaiveDate::from_ymd_opt(2015, 2, 26).unwrap()),
                ShowInfo::new("809", NaiveDate::from_ymd_opt(2015, 2, 19).unwrap()),
            ]
        );
    }

    #[test]
    fn class_only_needs_to_contain_show_item() {
        let html = page(r#"<a class="big-show-item-link" id="sp_2001-01-05" href="show-12">x</a>"#);

        let shows = parse_show_listing(&html).unwrap();

        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].number, "12");
    }

    #[test]
    fn takes_the_first_number_in_the_href() {
        let html = page(r#"<a class="show-item" id="sp_2010-10-10" href="/shows/450/page2">x</a>"#);

        let shows = parse_show_listing(&html).unwrap();

        assert_eq!(shows[0].number, "450");
    }

    #[test]
    fn page_without_show_items_is_empty() {
        let html = page(r#"<a class="other" href="/shows/1">nothing here</a>"#);

        assert!(parse_show_listing(&html).unwrap().is_empty());
    }

    #[test]
    fn href_without_number_is_an_error() {
        let html = page(r#"<a class="show-item" id="sp_2015-02-26" href="/shows/latest">x</a>"#);

        let err = parse_show_listing(&html).unwrap_err();

        assert!(matches!(err, WefunkError::InvalidShowItem(_)));
    }

    #[test]
    fn malformed_id_is_an_error() {
        let html = page(r#"<a class="show-item" id="show_2015-02-26" href="/shows/810">x</a>"#);

        let err = parse_show_listing(&html).unwrap_err();

        assert!(
            matches!(err, WefunkError::InvalidShowDate { ref id, .. } if id == "show_2015-02-26")
        );
    }

    #[test]
    fn missing_id_is_an_error() {
        let html = page(r#"<a class="show-item" href="/shows/810">x</a>"#);

        assert!(matches!(
            parse_show_listing(&html).unwrap_err(),
            WefunkError::InvalidShowItem(_)
        ));
    }
}
