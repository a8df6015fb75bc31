//! Where a pull request page keeps the details we scrape.

/// Element locations on a pull request page.
///
/// Defaults match the Bitbucket Server pull request overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelectors {
    /// Tag of the element holding the page title (`Pull Request #N: ...`).
    pub title_tag: String,
    /// `id` of the pull request header.
    pub header_id: String,
    /// Tag of the title element inside the header.
    pub header_title_tag: String,
    /// CSS selector list of the rendered description; the first match wins.
    pub description: String,
    /// `id` of the merge commit message field.
    pub commit_message_id: String,
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self {
            title_tag: "title".to_string(),
            header_id: "pull-request-header".to_string(),
            header_title_tag: "h2".to_string(),
            description: "div.pull-request-content .aui-group .aui-item .details div.description"
                .to_string(),
            commit_message_id: "commit-message".to_string(),
        }
    }
}

impl PageSelectors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header_id(mut self, id: impl Into<String>) -> Self {
        self.header_id = id.into();
        self
    }

    pub fn with_header_title_tag(mut self, tag: impl Into<String>) -> Self {
        self.header_title_tag = tag.into();
        self
    }

    pub fn with_description(mut self, selector: impl Into<String>) -> Self {
        self.description = selector.into();
        self
    }

    pub fn with_commit_message_id(mut self, id: impl Into<String>) -> Self {
        self.commit_message_id = id.into();
        self
    }
}
