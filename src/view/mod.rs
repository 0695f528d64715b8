use std::fs;
use std::path::{Path, PathBuf};

use spdlog::debug;

use crate::config::Config;
use crate::error::{Result, SiteError};
use crate::post::Post;
use crate::view::list_renderer::ListRenderer;
use crate::view::post_renderer::{PostRenderer, INDEX_LINK};

pub mod list_renderer;
pub mod post_renderer;
pub mod rss_renderer;

pub const POST_TEMPLATE: &str = "post.html";
pub const INDEX_TEMPLATE: &str = "index.html";

const DEFAULT_POST_TEMPLATE: &str = include_str!("../../res/template/post.html");
const DEFAULT_INDEX_TEMPLATE: &str = include_str!("../../res/template/index.html");

/// Parsed page templates. Built once per run and handed to the generator.
pub struct SiteRenderer<'a> {
    pub post: PostRenderer<'a>,
    pub index: ListRenderer<'a>,
}

impl SiteRenderer<'static> {
    /// Templates bundled with the binary.
    pub fn embedded() -> Result<SiteRenderer<'static>> {
        Ok(SiteRenderer {
            post: PostRenderer::new(DEFAULT_POST_TEMPLATE)?,
            index: ListRenderer::new(DEFAULT_INDEX_TEMPLATE)?,
        })
    }

    /// `post.html` and `index.html` from `tpl_dir`.
    pub fn from_dir(tpl_dir: &Path) -> Result<SiteRenderer<'static>> {
        Ok(SiteRenderer {
            post: PostRenderer::new(read_template(tpl_dir, POST_TEMPLATE)?)?,
            index: ListRenderer::new(read_template(tpl_dir, INDEX_TEMPLATE)?)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<SiteRenderer<'static>> {
        match config.paths.template_dir {
            Some(ref tpl_dir) => Self::from_dir(tpl_dir),
            None => Self::embedded(),
        }
    }
}

impl SiteRenderer<'_> {
    /// Writes `<output_dir>/<post.output_file_name>`.
    pub fn write_post(&self, output_dir: &Path, post: &Post) -> Result<PathBuf> {
        let path = output_dir.join(&post.output_file_name);
        debug!("Writing post {} to {}", post.title, path.display());
        fs::write(&path, self.post.render(post)).map_err(SiteError::io("Writing post", &path))?;
        Ok(path)
    }

    /// Writes `<output_dir>/index.html`.
    pub fn write_index(&self, output_dir: &Path, posts: &[Post], site_title: &str, feed_path: &str) -> Result<PathBuf> {
        let path = output_dir.join(INDEX_LINK);
        let page = self.index.render(posts, site_title, feed_path);
        fs::write(&path, page).map_err(SiteError::io("Writing index", &path))?;
        Ok(path)
    }
}

pub fn read_template(tpl_dir: &Path, file_name: &str) -> Result<String> {
    let full_path = tpl_dir.join(file_name);
    fs::read_to_string(&full_path).map_err(SiteError::io("Reading template", &full_path))
}

#[cfg(test)]
mod tests {
    use crate::post_name::parse_post_name;

    use super::*;

    #[test]
    fn embedded_templates_parse() {
        let renderer = SiteRenderer::embedded().unwrap();
        let post = Post::from_meta(parse_post_name("20240115_HelloWorld").unwrap(), "Hi <there>".to_string());

        let page = renderer.post.render(&post);
        assert!(page.contains("<title>HelloWorld</title>"));
        assert!(page.contains("<h1>HelloWorld</h1>"));
        assert!(page.contains(r#"<pre class="post-content">Hi &lt;there&gt;</pre>"#));
        assert!(page.contains(r#"<a href="index.html">"#));

        let index = renderer.index.render(&[post], "Blog", "rss.xml");
        assert!(index.contains(r#"<a href="HelloWorld.html">HelloWorld</a>"#));
        assert!(index.contains("2024-01-15"));
        assert!(!index.contains("No posts yet."));
    }

    #[test]
    fn templates_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(POST_TEMPLATE), "P:{{title}}").unwrap();
        fs::write(dir.path().join(INDEX_TEMPLATE), "I:{{#posts}}{{title}},{{/posts}}").unwrap();

        let renderer = SiteRenderer::from_dir(dir.path()).unwrap();
        let post = Post::from_meta(parse_post_name("20240115_x").unwrap(), String::new());
        assert_eq!(renderer.post.render(&post), "P:x");
        assert_eq!(renderer.index.render(&[post], "", ""), "I:x,");
    }

    #[test]
    fn missing_template_file() {
        let dir = tempfile::tempdir().unwrap();
        let res = SiteRenderer::from_dir(dir.path());
        assert!(matches!(res, Err(SiteError::Io { .. })));
    }

    #[test]
    fn write_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = SiteRenderer::embedded().unwrap();
        let post = Post::from_meta(parse_post_name("20240115_x").unwrap(), String::new());
        let res = renderer.write_post(&dir.path().join("absent"), &post);
        assert!(matches!(res, Err(SiteError::Io { context: "Writing post", .. })));
    }
}
