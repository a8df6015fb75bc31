//! Merge commit message composition and the field that receives it.

use crate::LOG_TARGET;
use crate::config::PageSelectors;
use crate::dom::ArenaDom;
use crate::error::{Error, Result};
use crate::pull_request::PullRequest;

/// Something that holds a merge commit message.
pub trait MessageTarget {
    fn current_message(&self) -> &str;

    /// Replace the message.
    fn set_message(&mut self, message: &str);
}

impl MessageTarget for String {
    fn current_message(&self) -> &str {
        self
    }

    fn set_message(&mut self, message: &str) {
        self.clear();
        self.push_str(message);
    }
}

/// The merge dialog's commit message field.
///
/// The dialog restores `original_value` when it is cancelled and reopened,
/// so both are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitMessageField {
    pub text_content: String,
    /// The `data-original-value` attribute.
    pub original_value: Option<String>,
}

impl CommitMessageField {
    pub fn new(text_content: impl Into<String>) -> Self {
        Self {
            text_content: text_content.into(),
            original_value: None,
        }
    }

    /// The commit message field of a parsed page, if it has one.
    pub fn from_page(dom: &ArenaDom, selectors: &PageSelectors) -> Option<Self> {
        let id = dom.get_by_id(&selectors.commit_message_id)?;
        Some(Self {
            text_content: dom.text_content(id),
            original_value: dom.attr(id, "data-original-value").map(str::to_string),
        })
    }
}

impl MessageTarget for CommitMessageField {
    fn current_message(&self) -> &str {
        &self.text_content
    }

    fn set_message(&mut self, message: &str) {
        self.text_content = message.to_string();
        self.original_value = Some(message.to_string());
    }
}

/// Build a merge commit message.
///
/// ```
/// use mergemsg::compose_merge_message;
///
/// assert_eq!(compose_merge_message("Fix", 7, ""), "Fix (PR #7)");
/// assert_eq!(compose_merge_message("Fix", 7, "Body"), "Fix (PR #7)\n\nBody");
/// ```
pub fn compose_merge_message(title: &str, number: u64, description: &str) -> String {
    let mut message = format!("{title} (PR #{number})");
    if !description.is_empty() {
        message.push_str("\n\n");
        message.push_str(description);
    }
    message
}

/// Write the merge message for a pull request into `target`.
///
/// Returns the message written. A missing number, title or target is
/// reported (and logged) without touching anything.
pub fn update_merge_message<T: MessageTarget + ?Sized>(
    target: Option<&mut T>,
    title: &str,
    number: Option<u64>,
    description: &str,
) -> Result<String> {
    let Some(number) = number.filter(|&n| n > 0) else {
        return Err(Error::MissingPrNumber.logged());
    };
    if title.is_empty() {
        return Err(Error::MissingTitle.logged());
    }
    let Some(target) = target else {
        return Err(Error::TargetNotFound.logged());
    };

    let message = compose_merge_message(title, number, description);
    log::debug!(
        target: LOG_TARGET,
        "merge commit message changed from {:?} to {:?}",
        target.current_message(),
        message
    );
    target.set_message(&message);
    Ok(message)
}

impl PullRequest {
    /// The merge commit message for this pull request.
    pub fn merge_message(&self) -> String {
        compose_merge_message(&self.title, self.number, &self.description)
    }

    /// Write this pull request's merge message into `target`.
    pub fn apply_to<T: MessageTarget + ?Sized>(&self, target: Option<&mut T>) -> Result<String> {
        update_merge_message(target, &self.title, Some(self.number), &self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_field() {
        let mut field = CommitMessageField::new("Merge pull request #4 in P/r from x to y");
        let message = update_merge_message(Some(&mut field), "Tidy", Some(4), "\n\nBody").unwrap();
        assert_eq!(message, "Tidy (PR #4)\n\n\n\nBody");
        assert_eq!(field.text_content, message);
        assert_eq!(field.original_value.as_deref(), Some(message.as_str()));
    }

    #[test]
    fn test_update_string() {
        let mut text = String::from("old");
        update_merge_message(Some(&mut text), "T", Some(1), "").unwrap();
        assert_eq!(text, "T (PR #1)");
    }

    #[test]
    fn test_missing_number_wins() {
        let mut text = String::from("old");
        let err = update_merge_message(Some(&mut text), "", None, "").unwrap_err();
        assert!(matches!(err, Error::MissingPrNumber));
        let err = update_merge_message(Some(&mut text), "T", Some(0), "").unwrap_err();
        assert!(matches!(err, Error::MissingPrNumber));
        assert_eq!(text, "old");
    }

    #[test]
    fn test_missing_title() {
        let mut text = String::new();
        let err = update_merge_message(Some(&mut text), "", Some(3), "x").unwrap_err();
        assert!(matches!(err, Error::MissingTitle));
    }

    #[test]
    fn test_missing_target() {
        let err = update_merge_message::<String>(None, "T", Some(3), "").unwrap_err();
        assert!(matches!(err, Error::TargetNotFound));
    }

    #[test]
    fn test_field_from_page() {
        let dom = crate::dom::parse_html(
            r#"<textarea id="commit-message" data-original-value="Merge #1">Merge #1</textarea>"#,
        );
        let field = CommitMessageField::from_page(&dom, &PageSelectors::default()).unwrap();
        assert_eq!(field.text_content, "Merge #1");
        assert_eq!(field.original_value.as_deref(), Some("Merge #1"));

        let dom = crate::dom::parse_html("<p>no field</p>");
        assert_eq!(CommitMessageField::from_page(&dom, &PageSelectors::default()), None);
    }

    #[test]
    fn test_pull_request_apply() {
        let pr = PullRequest {
            number: 12,
            title: "Add cache".to_string(),
            description: "Speeds things up".to_string(),
        };
        let mut field = CommitMessageField::default();
        pr.apply_to(Some(&mut field)).unwrap();
        assert_eq!(field.text_content, "Add cache (PR #12)\n\nSpeeds things up");
        assert_eq!(pr.merge_message(), field.text_content);
    }
}
