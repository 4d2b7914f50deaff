use super::seed::{seed_posts, seed_users};
use crate::{
    error::{Result, SocialError},
    model::{Post, User},
};
use parking_lot::RwLock;

/// The user mutations are attributed to.
pub const VIEWER_ID: u64 = 1;

/// Owns the users and posts collections.
///
/// Users are read-only after construction. Posts sit behind an `RwLock`; each
/// mutation holds the write guard for its whole read-modify-write so parallel
/// requests cannot interleave inside a toggle.
pub struct SocialRepository {
    users: Vec<User>,
    posts: RwLock<Vec<Post>>,
}

impl Default for SocialRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

impl SocialRepository {
    pub fn new(users: Vec<User>, posts: Vec<Post>) -> Self {
        Self {
            users,
            posts: RwLock::new(posts),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_users(), seed_posts())
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The first seeded user.
    pub fn me(&self) -> Option<&User> {
        self.users.first()
    }

    pub fn find_user_by_id(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_user_by_name(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.name == name)
    }

    /// Users whose id appears in `friend_ids`, in collection order.
    /// Ids that match no user are skipped.
    pub fn friends_of(&self, friend_ids: &[u64]) -> Vec<&User> {
        self.users
            .iter()
            .filter(|u| friend_ids.contains(&u.id))
            .collect()
    }

    pub fn posts_by_author(&self, author_id: u64) -> Vec<Post> {
        self.posts.read()
            .iter()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect()
    }

    pub fn find_post_by_id(&self, id: u64) -> Option<Post> {
        self.posts.read().iter().find(|p| p.id == id).cloned()
    }

    /// Appends a post written by [`VIEWER_ID`].
    ///
    /// The id is the collection length plus one. Nothing is ever deleted so
    /// this stays unique, but it would collide as soon as deletion existed.
    pub fn add_post(&self, title: String, content: Option<String>) -> Post {
        let mut posts = self.posts.write();
        let id = posts.len() as u64 + 1;
        let post = Post::new(id, VIEWER_ID, title).with_content(content);
        posts.push(post.clone());
        tracing::debug!(post_id = id, author_id = VIEWER_ID, "post created");
        post
    }

    /// Toggles [`VIEWER_ID`] in the like-giver list of post `id`.
    pub fn toggle_like(&self, id: u64) -> Result<Post> {
        let mut posts = self.posts.write();
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| SocialError::PostNotFound(id.to_string()))?;
        let liked = post.toggle_like(VIEWER_ID);
        tracing::debug!(post_id = id, user_id = VIEWER_ID, liked, "like toggled");
        Ok(post.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_user_lookups() {
        let repo = SocialRepository::seeded();

        assert_eq!(repo.me().unwrap().name, "Fong");
        assert_eq!(repo.find_user_by_id(3).unwrap().name, "Mary");
        assert!(repo.find_user_by_id(42).is_none());
        assert_eq!(repo.find_user_by_name("Kevin").unwrap().id, 2);
        assert!(repo.find_user_by_name("kevin").is_none());
        assert!(repo.find_user_by_name("Nonexistent").is_none());
    }

    #[test]
    fn test_friends_follow_collection_order_and_skip_dangling_ids() {
        let users = vec![
            User::new(1, "A", 1).with_friends(vec![3, 99, 2]),
            User::new(2, "B", 1),
            User::new(3, "C", 1),
        ];
        let repo = SocialRepository::new(users, Vec::new());
        let a = repo.find_user_by_id(1).unwrap();

        let ids: Vec<u64> = repo.friends_of(&a.friend_ids).iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_posts_by_author() {
        let repo = SocialRepository::seeded();
        let ids: Vec<u64> = repo.posts_by_author(1).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(repo.posts_by_author(3).is_empty());
    }

    #[test]
    fn test_add_post_uses_length_plus_one() {
        let repo = SocialRepository::seeded();

        let post = repo.add_post("T".to_string(), Some("C".to_string()));
        assert_eq!(post.id, 4);
        assert_eq!(post.author_id, VIEWER_ID);
        assert!(post.like_giver_ids.is_empty());

        let post = repo.add_post("Untitled".to_string(), None);
        assert_eq!(post.id, 5);
        assert_eq!(post.content, None);

        assert_eq!(repo.find_post_by_id(4).unwrap().title, "T");
        assert!(repo.find_post_by_id(6).is_none());
    }

    #[test]
    fn test_toggle_like_twice_restores_like_givers() {
        let repo = SocialRepository::seeded();
        let before = repo.find_post_by_id(2).unwrap().like_giver_ids;

        let liked = repo.toggle_like(2).unwrap();
        assert_eq!(liked.like_giver_ids, vec![2, 3, VIEWER_ID]);

        let unliked = repo.toggle_like(2).unwrap();
        assert_eq!(unliked.like_giver_ids, before);
    }

    #[test]
    fn test_toggle_like_missing_post() {
        let repo = SocialRepository::seeded();
        let err = repo.toggle_like(9999).unwrap_err();
        assert!(matches!(err, SocialError::PostNotFound(ref id) if id == "9999"));
        assert_eq!(err.to_string(), "Post 9999 Not Exists");
    }

    #[test]
    fn test_concurrent_toggles_do_not_corrupt_like_givers() {
        let repo = Arc::new(SocialRepository::seeded());

        // An even number of toggles must leave the list exactly as it was.
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repo = Arc::clone(&repo);
                thread::spawn(move || {
                    for _ in 0..250 {
                        repo.toggle_like(3).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert!(repo.find_post_by_id(3).unwrap().like_giver_ids.is_empty());

        // An odd number adds the viewer exactly once.
        repo.toggle_like(3).unwrap();
        assert_eq!(repo.find_post_by_id(3).unwrap().like_giver_ids, vec![VIEWER_ID]);
    }

    #[test]
    fn test_concurrent_add_post_assigns_distinct_ids() {
        let repo = Arc::new(SocialRepository::seeded());

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let repo = Arc::clone(&repo);
                thread::spawn(move || {
                    (0..25)
                        .map(|i| repo.add_post(format!("{}-{}", t, i), None).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (4..=103).collect::<Vec<_>>());
    }
}
