use std::sync::Arc;

use async_graphql::{ComplexObject, Context, Enum, ID, SimpleObject};

use crate::model::{self, Post as ModelPost, User as ModelUser};
use crate::storage::SocialRepository;

pub(crate) fn get_repo<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<SocialRepository>> {
    ctx.data::<Arc<SocialRepository>>()
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum HeightUnit {
    Metre,
    Centimetre,
    Foot,
}

impl From<HeightUnit> for model::HeightUnit {
    fn from(u: HeightUnit) -> Self {
        match u {
            HeightUnit::Metre => model::HeightUnit::Metre,
            HeightUnit::Centimetre => model::HeightUnit::Centimetre,
            HeightUnit::Foot => model::HeightUnit::Foot,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum WeightUnit {
    Kilogram,
    Gram,
    Pound,
}

impl From<WeightUnit> for model::WeightUnit {
    fn from(u: WeightUnit) -> Self {
        match u {
            WeightUnit::Kilogram => model::WeightUnit::Kilogram,
            WeightUnit::Gram => model::WeightUnit::Gram,
            WeightUnit::Pound => model::WeightUnit::Pound,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub age: i32,

    #[graphql(skip)]
    pub user_id: u64,
    #[graphql(skip)]
    pub friend_ids: Vec<u64>,
    #[graphql(skip)]
    pub height_cm: f64,
    #[graphql(skip)]
    pub weight_kg: f64,
}

impl From<ModelUser> for User {
    fn from(u: ModelUser) -> Self {
        Self {
            id: ID(u.id.to_string()),
            name: u.name,
            age: u.age,
            user_id: u.id,
            friend_ids: u.friend_ids,
            height_cm: u.height,
            weight_kg: u.weight,
        }
    }
}

impl From<&ModelUser> for User {
    fn from(u: &ModelUser) -> Self {
        u.clone().into()
    }
}

#[ComplexObject]
impl User {
    /// Users listed in this user's friend ids
    async fn friends(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let repo = get_repo(ctx)?;
        Ok(repo
            .friends_of(&self.friend_ids)
            .into_iter()
            .map(User::from)
            .collect())
    }

    /// Posts written by this user
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        let repo = get_repo(ctx)?;
        Ok(repo
            .posts_by_author(self.user_id)
            .into_iter()
            .map(Post::from)
            .collect())
    }

    /// Height, stored in centimetres
    async fn height(
        &self,
        #[graphql(default_with = "Some(HeightUnit::Centimetre)")] unit: Option<HeightUnit>,
    ) -> f64 {
        model::HeightUnit::convert_or_default(unit.map(Into::into), self.height_cm)
    }

    /// Weight, stored in kilograms
    async fn weight(
        &self,
        #[graphql(default_with = "Some(WeightUnit::Kilogram)")] unit: Option<WeightUnit>,
    ) -> f64 {
        model::WeightUnit::convert_or_default(unit.map(Into::into), self.weight_kg)
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Post {
    pub id: ID,
    pub title: String,
    pub content: Option<String>,

    #[graphql(skip)]
    pub author_id: u64,
    #[graphql(skip)]
    pub like_giver_ids: Vec<u64>,
}

impl From<ModelPost> for Post {
    fn from(p: ModelPost) -> Self {
        Self {
            id: ID(p.id.to_string()),
            title: p.title,
            content: p.content,
            author_id: p.author_id,
            like_giver_ids: p.like_giver_ids,
        }
    }
}

#[ComplexObject]
impl Post {
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<User>> {
        let repo = get_repo(ctx)?;
        Ok(repo.find_user_by_id(self.author_id).map(User::from))
    }

    /// One entry per like, null where the id matches no user
    async fn like_givers(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Option<User>>> {
        let repo = get_repo(ctx)?;
        Ok(self
            .like_giver_ids
            .iter()
            .map(|&id| repo.find_user_by_id(id).map(User::from))
            .collect())
    }
}
