//! Feed items and the category seam the mixer is generic over.
//!
//! A [`Post`] carries an opaque identifier and a category path such as
//! `"top/daily"`. Category paths are not validated on construction; posts
//! whose category is not configured are dropped later by the mixer.

use alloc::string::String;

/// Anything the mixer can place into a feed.
///
/// The mixer only ever looks at the category path. Implement this for your
/// own item type to mix it directly instead of converting to [`Post`].
pub trait Categorized {
    /// Category path of this item, e.g. `"following/immediate-follow"`.
    fn category(&self) -> &str;
}

/// A single feed post.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Post {
    /// Stable identifier supplied by the upstream source.
    pub id: String,
    /// Category path the post was labelled with upstream.
    pub category: String,
}

impl Post {
    /// Create a post from an identifier and a category path.
    pub fn new(id: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
        }
    }
}

impl Categorized for Post {
    fn category(&self) -> &str {
        &self.category
    }
}

impl<T: Categorized + ?Sized> Categorized for &T {
    fn category(&self) -> &str {
        (**self).category()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_new_keeps_fields() {
        let post = Post::new("ricks-vacation", "following/immediate-follow");
        assert_eq!(post.id, "ricks-vacation");
        assert_eq!(post.category(), "following/immediate-follow");
    }

    #[test]
    fn test_unknown_category_is_accepted() {
        let post = Post::new("x", "no/such/category");
        assert_eq!(post.category(), "no/such/category");
    }

    #[test]
    fn test_reference_delegates_category() {
        let post = Post::new("a", "promoted");
        let by_ref = &post;
        assert_eq!(Categorized::category(&by_ref), "promoted");
    }
}
