use std::borrow::Cow;

use ramhorns::Template;

use crate::error::{Result, SiteError};
use crate::post::Post;
use crate::text_utils::format_date;

#[derive(ramhorns::Content)]
struct ListPage<'a> {
    site_title: &'a str,
    feed_path: &'a str,
    has_posts: bool,
    posts: Vec<PostItem<'a>>,
}

#[derive(ramhorns::Content)]
struct PostItem<'a> {
    date: String,
    link: &'a str,
    title: &'a str,
}

pub struct ListRenderer<'a> {
    pub template: Template<'a>,
}

impl<'a> ListRenderer<'a> {
    pub fn new<S: Into<Cow<'a, str>>>(list_tpl_src: S) -> Result<ListRenderer<'a>> {
        let template = match list_tpl_src.into() {
            Cow::Borrowed(s) => Template::new(s),
            Cow::Owned(s) => Template::new(s),
        }
        .map_err(|e| SiteError::Template {
            name: "index",
            reason: e.to_string(),
        })?;

        Ok(ListRenderer { template })
    }

    /// Lists `posts` in the order given; callers pass store order.
    pub fn render(&self, posts: &[Post], site_title: &str, feed_path: &str) -> String {
        let posts: Vec<PostItem> = posts
            .iter()
            .map(|post| PostItem {
                date: format_date(&post.timestamp),
                link: post.output_file_name.as_str(),
                title: post.title.as_str(),
            })
            .collect();

        self.template.render(&ListPage {
            site_title,
            feed_path,
            has_posts: !posts.is_empty(),
            posts,
        })
    }
}
