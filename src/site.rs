//! The generation pipeline: scan, load, sort, render pages, write the feed.
//! Every stage runs to completion before the next one starts and the first
//! failure aborts the run. Files written by earlier stages stay on disk.

use std::fs;
use std::path::{Path, PathBuf};

use spdlog::{debug, info, warn};

use crate::config::Config;
use crate::error::{Result, SiteError};
use crate::post::Post;
use crate::post_list::PostList;
use crate::post_store::PostStore;
use crate::timestamp::TimestampResolver;
use crate::view::rss_renderer::RssChannel;
use crate::view::post_renderer::INDEX_LINK;
use crate::view::SiteRenderer;

/// What a finished run produced.
#[derive(Debug)]
pub struct GenerationSummary {
    pub post_count: usize,
    pub index_path: PathBuf,
    pub feed_path: PathBuf,
}

pub fn generate_site(config: &Config, renderer: &SiteRenderer) -> Result<GenerationSummary> {
    let resolver = config.defaults.timestamp_source.resolver();
    generate_site_with(config, renderer, resolver.as_ref())
}

pub fn generate_site_with(
    config: &Config,
    renderer: &SiteRenderer,
    resolver: &dyn TimestampResolver,
) -> Result<GenerationSummary> {
    let output_dir = config.paths.output_dir.as_path();
    ensure_dir(output_dir)?;

    let store = load_posts(config, resolver)?;
    let feed = &config.rss_feed;
    for (file_name, count) in store.colliding_outputs(&[INDEX_LINK, feed.feed_path.as_str()]) {
        warn!("{} writers for {}; only the last one written is kept", count, file_name);
    }
    let posts = store.into_sorted();

    for post in &posts {
        renderer.write_post(output_dir, post)?;
    }
    info!("Wrote {} post pages to {}", posts.len(), output_dir.display());

    let index_path = renderer.write_index(output_dir, &posts, &feed.title, &feed.feed_path)?;
    info!("Wrote index {}", index_path.display());

    let feed_path = write_feed(config, output_dir, &posts)?;
    info!("Wrote feed {}", feed_path.display());

    info!("Published {} posts", posts.len());
    Ok(GenerationSummary {
        post_count: posts.len(),
        index_path,
        feed_path,
    })
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(SiteError::io("Creating output directory", dir))
}

fn load_posts(config: &Config, resolver: &dyn TimestampResolver) -> Result<PostStore> {
    let post_list = PostList {
        root_dir: config.paths.input_dir.clone(),
        extension: config.defaults.source_extension.clone(),
    };

    let mut store = PostStore::new();
    for source in post_list.retrieve_files()? {
        debug!("Loading {}", source.path.display());
        store.add(Post::load(&source.path, &source.base_name, resolver)?);
    }
    info!("Loaded {} posts from {}", store.len(), config.paths.input_dir.display());

    Ok(store)
}

fn write_feed(config: &Config, output_dir: &Path, posts: &[Post]) -> Result<PathBuf> {
    let feed = &config.rss_feed;
    let channel = RssChannel {
        ch_title: &feed.title,
        ch_link: &feed.link,
        ch_desc: &feed.description,
        ch_language: &feed.language,
    };
    let xml = channel.render(posts)?;

    let path = output_dir.join(&feed.feed_path);
    fs::write(&path, xml).map_err(SiteError::io("Writing feed", &path))?;
    Ok(path)
}
