//! # mergemsg
//!
//! Turns a pull request page into a readable merge commit message.
//!
//! The heart of the crate is [`text`], which renders a rich-text description
//! (headings, paragraphs, nested lists, blockquotes, tables, code) as
//! Markdown-flavoured plain text suitable for a commit message body. Around
//! it sit an html5ever-backed [`dom`], page scraping for the pull request
//! number, title and description ([`pull_request`]), and composition of the
//! final message ([`merge_message`]).
//!
//! ## Quick Start
//!
//! ```
//! use mergemsg::{compose_merge_message, html_to_text};
//!
//! let body = html_to_text("<h1>Summary</h1><ul><li>faster</li><li>smaller</li></ul>");
//! let message = compose_merge_message("Tune cache", 42, body.trim());
//!
//! assert!(message.starts_with("Tune cache (PR #42)\n\nSummary\n=================="));
//! assert!(message.ends_with("*  faster\n*  smaller"));
//! ```
//!
//! ## Building trees by hand
//!
//! ```
//! use mergemsg::document::{DocumentNode, ListKind};
//! use mergemsg::to_text;
//!
//! let doc = DocumentNode::list(ListKind::Ordered, vec![
//!     DocumentNode::list_item(vec![DocumentNode::text("one")]),
//!     DocumentNode::list_item(vec![DocumentNode::text("two")]),
//! ]);
//! assert_eq!(to_text(Some(&doc)), "\n\n1. one\n2. two");
//! ```

pub mod config;
pub mod document;
pub mod dom;
pub mod error;
pub mod merge_message;
pub mod pull_request;
pub mod text;

#[cfg(feature = "wasm")]
pub mod wasm;

/// `log` target for everything this crate reports.
pub const LOG_TARGET: &str = "mergemsg";

pub use config::PageSelectors;
pub use document::{CellKind, DocumentNode, ListKind, NodeKind};
pub use dom::HtmlOptions;
pub use error::{Error, Result};
pub use merge_message::{CommitMessageField, MessageTarget, compose_merge_message, update_merge_message};
pub use pull_request::{PullRequest, parse_pr_number};
pub use text::{html_to_text, to_text};
