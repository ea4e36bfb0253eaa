//! Rendering of fetched records
//!
//! Output goes through the [`ReportSink`] trait object so embedders and
//! tests can capture rendered lines instead of scraping stdout. Rendered
//! output from concurrent tasks may interleave in any order.

use crate::types::{Post, User};

/// Destination for rendered records
pub trait ReportSink: Send + Sync {
    /// Called once per successfully fetched user detail record
    fn user_detail(&self, user: &User);

    /// Called once per post on a successfully fetched Posts page
    fn post(&self, post: &Post);
}

/// Render a user detail record as a single line
pub fn format_user_line(user: &User) -> String {
    format!(
        "User {} {} {} <{}> {}",
        user.title, user.first_name, user.last_name, user.email, user.gender
    )
}

/// Render a post as a multi-line block
///
/// The publish date is emitted exactly as the wire carried it.
pub fn format_post_block(post: &Post) -> String {
    format!(
        "Posted by {} {}:\n\n{}\n\nLikes {} Tags {:?}\nDate posted {}",
        post.owner.first_name,
        post.owner.last_name,
        post.text,
        post.likes,
        post.tags,
        post.publish_date
    )
}

/// [`ReportSink`] that prints to stdout
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn user_detail(&self, user: &User) {
        println!("{}", format_user_line(user));
    }

    fn post(&self, post: &Post) {
        println!("{}", format_post_block(post));
    }
}
