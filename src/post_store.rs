use std::collections::HashMap;

use crate::post::Post;

/// Posts of a single run, in scan order until [`PostStore::into_sorted`].
#[derive(Debug, Default)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    pub fn new() -> PostStore {
        PostStore::default()
    }

    pub fn add(&mut self, post: Post) {
        self.posts.push(post);
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Output file names with more than one writer, and how many. `reserved`
    /// names are written by the site itself after every post page.
    pub fn colliding_outputs(&self, reserved: &[&str]) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = reserved.iter().map(|name| (*name, 1)).collect();
        for post in &self.posts {
            *counts.entry(post.output_file_name.as_str()).or_default() += 1;
        }

        let mut collisions: Vec<(String, usize)> = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        collisions.sort();
        collisions
    }

    /// Most recent first. Equal timestamps keep scan order.
    pub fn into_sorted(self) -> Vec<Post> {
        let mut posts = self.posts;
        // sort_by is stable
        posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        posts
    }
}
