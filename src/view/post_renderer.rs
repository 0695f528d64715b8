use std::borrow::Cow;

use ramhorns::Template;

use crate::error::{Result, SiteError};
use crate::post::Post;
use crate::text_utils::format_date;

pub const INDEX_LINK: &str = "index.html";

#[derive(ramhorns::Content)]
struct ViewItem<'a> {
    title: &'a str,
    date: &'a str,
    content: &'a str,
    index_link: &'a str,
}

pub struct PostRenderer<'a> {
    pub template: Template<'a>,
}

impl<'a> PostRenderer<'a> {
    pub fn new<S: Into<Cow<'a, str>>>(view_tpl_src: S) -> Result<PostRenderer<'a>> {
        let template = match view_tpl_src.into() {
            Cow::Borrowed(s) => Template::new(s),
            Cow::Owned(s) => Template::new(s),
        }
        .map_err(|e| SiteError::Template {
            name: "post",
            reason: e.to_string(),
        })?;

        Ok(PostRenderer { template })
    }

    pub fn render(&self, post: &Post) -> String {
        let date = format_date(&post.timestamp);
        self.template.render(&ViewItem {
            title: post.title.as_str(),
            date: date.as_str(),
            content: post.content.as_str(),
            index_link: INDEX_LINK,
        })
    }
}
