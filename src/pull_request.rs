//! Pull request details: number, title and rendered description.
//!
//! Details come either from the pull request page itself or from the JSON
//! payload the page's extension registry hands out.

use memchr::memchr;

use crate::LOG_TARGET;
use crate::config::PageSelectors;
use crate::dom::{self, ArenaDom, HtmlOptions, Selector};
use crate::error::{Error, Result};
use crate::text;

/// The three pieces of a pull request that go into a merge message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    /// Plain-text description; empty when the pull request has none.
    pub description: String,
}

impl PullRequest {
    /// Scrape a parsed pull request page.
    pub fn from_page(dom: &ArenaDom, selectors: &PageSelectors, options: &HtmlOptions) -> Result<Self> {
        Ok(Self {
            number: page_number(dom, selectors)?,
            title: page_title(dom, selectors)?,
            description: page_description(dom, selectors, options)?,
        })
    }

    /// Parse and scrape a pull request page.
    pub fn from_html(html: &str, selectors: &PageSelectors, options: &HtmlOptions) -> Result<Self> {
        Self::from_page(&dom::parse_html(html), selectors, options)
    }

    /// Read the pull request object published by the page.
    ///
    /// ```
    /// use mergemsg::PullRequest;
    ///
    /// let pr = PullRequest::from_json(r#"{"id": 12, "title": "Fix it", "state": "OPEN"}"#).unwrap();
    /// assert_eq!(pr.number, 12);
    /// assert_eq!(pr.description, "");
    /// ```
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self> {
        let payload: payload::PullRequestPayload =
            serde_json::from_str(json).map_err(|e| Error::from(e).logged())?;
        log::debug!(target: LOG_TARGET, "PR payload: #{} {:?}", payload.id, payload.title);
        Ok(Self {
            number: payload.id,
            title: payload.title,
            description: payload.description.unwrap_or_default(),
        })
    }
}

#[cfg(feature = "json")]
mod payload {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub(super) struct PullRequestPayload {
        pub id: u64,
        pub title: String,
        #[serde(default)]
        pub description: Option<String>,
    }
}

/// Extract the pull request number from a page title.
///
/// Titles look like `Pull Request #44523: UX Fixes`. The number is read from
/// between the first `#` and the first `:`, leniently: leading whitespace and
/// a sign are accepted and anything after the leading digits is ignored.
/// Only positive numbers count.
///
/// ```
/// use mergemsg::parse_pr_number;
///
/// assert_eq!(parse_pr_number("Pull Request #44523: UX Fixes"), Some(44523));
/// assert_eq!(parse_pr_number("Pull Request #0: nope"), None);
/// assert_eq!(parse_pr_number("Overview"), None);
/// ```
pub fn parse_pr_number(title: &str) -> Option<u64> {
    let bytes = title.as_bytes();
    let start = memchr(b'#', bytes)? + 1;
    let end = memchr(b':', bytes)?;
    if end <= start {
        return None;
    }

    let digits = title[start..end].trim_start();
    let digits = match digits.as_bytes().first() {
        Some(b'+') => &digits[1..],
        Some(b'-') => return None,
        _ => digits,
    };
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    digits[..len].parse::<u64>().ok().filter(|&n| n > 0)
}

/// Pull request number from the page's `<title>`.
pub fn page_number(dom: &ArenaDom, selectors: &PageSelectors) -> Result<u64> {
    let titles = dom.elements_by_tag(dom.document(), &selectors.title_tag);
    let title = match titles.as_slice() {
        [only] => Some(inner_text(dom, *only)),
        _ => None,
    };
    log::debug!(
        target: LOG_TARGET,
        "title collection.length={} title text={:?}",
        titles.len(),
        title
    );

    match title.as_deref().and_then(parse_pr_number) {
        Some(number) => {
            log::debug!(target: LOG_TARGET, "PR number found: {number}");
            Ok(number)
        }
        None => Err(Error::PrNumberNotFound.logged()),
    }
}

/// Pull request title from the single heading inside the page header.
pub fn page_title(dom: &ArenaDom, selectors: &PageSelectors) -> Result<String> {
    let Some(header) = dom.get_by_id(&selectors.header_id) else {
        return Err(Error::TitleHeaderNotFound.logged());
    };

    let headings = dom.elements_by_tag(header, &selectors.header_title_tag);
    log::debug!(target: LOG_TARGET, "header headings: {}", headings.len());
    let [heading] = headings.as_slice() else {
        return Err(Error::TitleNotFound.logged());
    };

    let title = inner_text(dom, *heading);
    log::debug!(target: LOG_TARGET, "PR title found: {title:?}");
    Ok(title)
}

/// Rendered description, or the empty string when the page has none.
///
/// Fails only when `selectors.description` is not a valid selector.
pub fn page_description(dom: &ArenaDom, selectors: &PageSelectors, options: &HtmlOptions) -> Result<String> {
    let selector = Selector::parse(&selectors.description)?;
    let root = selector
        .first_match(dom, dom.document())
        .map(|id| dom::to_document(dom, id, options));
    if root.is_none() {
        log::debug!(target: LOG_TARGET, "no description element for {:?}", selector.as_str());
    }
    Ok(text::to_text(root.as_ref()))
}

/// Visible text of an element with whitespace runs collapsed.
fn inner_text(dom: &ArenaDom, id: dom::NodeId) -> String {
    dom.text_content(id)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
