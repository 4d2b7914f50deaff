#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub age: i32,

    /// Weak references to other users; may dangle or point back at this user.
    pub friend_ids: Vec<u64>,

    /// Centimetres.
    pub height: f64,

    /// Kilograms.
    pub weight: f64,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>, age: i32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            friend_ids: Vec::new(),
            height: 0.0,
            weight: 0.0,
        }
    }

    pub fn with_friends(mut self, friend_ids: Vec<u64>) -> Self {
        self.friend_ids = friend_ids;
        self
    }

    pub fn with_measurements(mut self, height_cm: f64, weight_kg: f64) -> Self {
        self.height = height_cm;
        self.weight = weight_kg;
        self
    }
}
