use std::{
    cmp::Reverse,
    collections::{BTreeMap, HashSet},
    fs::File,
    io::BufReader,
    path::Path,
};

use crate::{
    content::post::{Post, fold_term},
    foundation::error::{PixelsetError, PixelsetResult},
};

/// Weight of one shared category in [`PostIndex::related`].
pub const CATEGORY_WEIGHT: u32 = 2;
/// Weight of one shared tag in [`PostIndex::related`].
pub const TAG_WEIGHT: u32 = 1;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One page of a listing.
pub struct Page<'a> {
    /// Posts on this page.
    pub items: Vec<&'a Post>,
    /// 1-based page number.
    pub page: usize,
    /// Number of pages in the listing (at least 1).
    pub total_pages: usize,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A post related to another one, with its score.
pub struct RelatedPost<'a> {
    /// The related post.
    pub post: &'a Post,
    /// Weighted count of shared categories and tags.
    pub score: u32,
}

#[derive(Clone, Debug, Default)]
/// In-memory collection of posts with listing and related-post queries.
pub struct PostIndex {
    posts: Vec<Post>,
}

fn newest_first(a: &Post, b: &Post) -> std::cmp::Ordering {
    b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug))
}

fn lowered(values: &[String]) -> HashSet<String> {
    values.iter().map(|v| fold_term(v)).collect()
}

impl PostIndex {
    /// Build an index; slugs must be unique.
    pub fn new(posts: Vec<Post>) -> PixelsetResult<Self> {
        let mut seen = HashSet::new();
        for p in &posts {
            if !seen.insert(p.slug.as_str()) {
                return Err(PixelsetError::validation(format!(
                    "duplicate post slug '{}'",
                    p.slug
                )));
            }
        }
        Ok(Self { posts })
    }

    /// Parse a JSON array of posts.
    pub fn from_reader<R: std::io::Read>(r: R) -> PixelsetResult<Self> {
        let posts: Vec<Post> = serde_json::from_reader(r)
            .map_err(|e| PixelsetError::serde(format!("parse posts JSON: {e}")))?;
        Self::new(posts)
    }

    /// Parse a JSON array of posts from disk.
    pub fn from_path(path: impl AsRef<Path>) -> PixelsetResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PixelsetError::validation(format!("open posts '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Every post, drafts included, in input order.
    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    /// Look up a post by slug.
    pub fn get(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Non-draft posts, newest first.
    pub fn published(&self) -> Vec<&Post> {
        let mut out: Vec<&Post> = self.posts.iter().filter(|p| !p.draft).collect();
        out.sort_by(|a, b| newest_first(a, b));
        out
    }

    /// Published posts in `category`.
    pub fn by_category(&self, category: &str) -> Vec<&Post> {
        self.published()
            .into_iter()
            .filter(|p| p.has_category(category))
            .collect()
    }

    /// Published posts tagged `tag`.
    pub fn by_tag(&self, tag: &str) -> Vec<&Post> {
        self.published()
            .into_iter()
            .filter(|p| p.has_tag(tag))
            .collect()
    }

    /// `(category, count)` over published posts, sorted case-insensitively.
    ///
    /// Spellings that differ only in case are counted together under the first one seen.
    pub fn categories(&self) -> Vec<(String, usize)> {
        self.count_terms(|p| &p.categories)
    }

    /// `(tag, count)` over published posts, sorted case-insensitively.
    pub fn tags(&self) -> Vec<(String, usize)> {
        self.count_terms(|p| &p.tags)
    }

    fn count_terms(&self, terms: impl Fn(&Post) -> &Vec<String>) -> Vec<(String, usize)> {
        let mut counts = BTreeMap::<String, (String, usize)>::new();
        for p in self.posts.iter().filter(|p| !p.draft) {
            let mut seen = HashSet::new();
            for t in terms(p) {
                let key = fold_term(t);
                if !seen.insert(key.clone()) {
                    continue;
                }
                counts.entry(key).or_insert_with(|| (t.clone(), 0)).1 += 1;
            }
        }
        counts.into_values().collect()
    }

    /// Posts sharing categories or tags with `slug`, best match first.
    ///
    /// Each shared category adds [`CATEGORY_WEIGHT`], each shared tag [`TAG_WEIGHT`]. Ties go
    /// to the newer post, then to the smaller slug.
    pub fn related(&self, slug: &str, limit: usize) -> PixelsetResult<Vec<RelatedPost<'_>>> {
        let Some(target) = self.get(slug) else {
            return Err(PixelsetError::validation(format!("unknown post slug '{slug}'")));
        };
        let categories = lowered(&target.categories);
        let tags = lowered(&target.tags);

        let mut scored: Vec<RelatedPost<'_>> = self
            .posts
            .iter()
            .filter(|p| !p.draft && p.slug != target.slug)
            .filter_map(|p| {
                let shared_categories =
                    lowered(&p.categories).intersection(&categories).count() as u32;
                let shared_tags = lowered(&p.tags).intersection(&tags).count() as u32;
                let score = CATEGORY_WEIGHT * shared_categories + TAG_WEIGHT * shared_tags;
                (score > 0).then_some(RelatedPost { post: p, score })
            })
            .collect();

        scored.sort_by(|a, b| {
            Reverse(a.score)
                .cmp(&Reverse(b.score))
                .then_with(|| newest_first(a.post, b.post))
        });
        scored.truncate(limit);
        tracing::debug!(slug, count = scored.len(), "related posts");
        Ok(scored)
    }
}

/// Slice `posts` into 1-based pages of `per_page` items.
pub fn paginate<'a>(posts: &[&'a Post], page: usize, per_page: usize) -> PixelsetResult<Page<'a>> {
    if per_page == 0 {
        return Err(PixelsetError::validation("per_page must be >= 1"));
    }
    if page == 0 {
        return Err(PixelsetError::validation("page numbers start at 1"));
    }
    let total_pages = posts.len().div_ceil(per_page).max(1);
    let items = posts
        .iter()
        .skip((page - 1).saturating_mul(per_page))
        .take(per_page)
        .copied()
        .collect();
    Ok(Page {
        items,
        page,
        total_pages,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/content/index.rs"]
mod tests;
