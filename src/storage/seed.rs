use crate::model::{Post, User};

pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "Fong", 23)
            .with_friends(vec![2, 3])
            .with_measurements(175.0, 70.0),
        User::new(2, "Kevin", 40)
            .with_friends(vec![1])
            .with_measurements(180.0, 80.0),
        User::new(3, "Mary", 18)
            .with_friends(vec![1])
            .with_measurements(162.0, 50.0),
    ]
}

pub fn seed_posts() -> Vec<Post> {
    vec![
        Post::new(1, 1, "Hello World!")
            .with_content(Some("This is my first post.".to_string()))
            .with_like_givers(vec![2]),
        Post::new(2, 2, "Good Night")
            .with_content(Some("Have a Nice Dream =)".to_string()))
            .with_like_givers(vec![2, 3]),
        Post::new(3, 1, "I Love U").with_content(Some("Here's my second post!".to_string())),
    ]
}
