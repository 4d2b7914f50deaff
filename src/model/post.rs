#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: u64,
    pub author_id: u64,
    pub title: String,
    pub content: Option<String>,
    pub like_giver_ids: Vec<u64>,
}

impl Post {
    pub fn new(id: u64, author_id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            author_id,
            title: title.into(),
            content: None,
            like_giver_ids: Vec::new(),
        }
    }

    pub fn with_content(mut self, content: Option<String>) -> Self {
        self.content = content;
        self
    }

    pub fn with_like_givers(mut self, like_giver_ids: Vec<u64>) -> Self {
        self.like_giver_ids = like_giver_ids;
        self
    }

    /// Removes the first occurrence of `user_id` if present, otherwise appends it.
    /// Returns whether the user likes the post afterwards.
    pub fn toggle_like(&mut self, user_id: u64) -> bool {
        match self.like_giver_ids.iter().position(|&id| id == user_id) {
            Some(index) => {
                self.like_giver_ids.remove(index);
                false
            }
            None => {
                self.like_giver_ids.push(user_id);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_like_appends_then_removes() {
        let mut post = Post::new(1, 1, "Hello").with_like_givers(vec![2]);

        assert!(post.toggle_like(1));
        assert_eq!(post.like_giver_ids, vec![2, 1]);

        assert!(!post.toggle_like(1));
        assert_eq!(post.like_giver_ids, vec![2]);
    }

    #[test]
    fn test_toggle_like_removes_only_first_occurrence() {
        let mut post = Post::new(1, 1, "Hello").with_like_givers(vec![1, 3, 1]);
        assert!(!post.toggle_like(1));
        assert_eq!(post.like_giver_ids, vec![3, 1]);
    }
}
