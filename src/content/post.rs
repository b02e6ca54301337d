use chrono::NaiveDate;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A blog post's front matter.
pub struct Post {
    /// Unique URL slug.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Publication date.
    pub date: NaiveDate,
    /// Short summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Categories, compared case-insensitively.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Tags, compared case-insensitively.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Drafts are hidden from every listing.
    #[serde(default)]
    pub draft: bool,
    /// Optional cover image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
}

/// Case fold used for every category and tag comparison.
pub(crate) fn fold_term(term: &str) -> String {
    term.to_lowercase()
}

impl Post {
    /// Whether the post lists `category` (case-insensitive).
    pub fn has_category(&self, category: &str) -> bool {
        let wanted = fold_term(category);
        self.categories.iter().any(|c| fold_term(c) == wanted)
    }

    /// Whether the post carries `tag` (case-insensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = fold_term(tag);
        self.tags.iter().any(|t| fold_term(t) == wanted)
    }
}
