use async_graphql::{Context, Object};
use marquee_store::models::{self, IntId};

use super::ctx_data;

#[derive(Clone, Debug, derive_more::From)]
pub struct Movie {
    model: models::Movie,
}

impl Movie {
    pub fn id(&self) -> IntId {
        self.model.id
    }

    pub fn name(&self) -> &str {
        self.model.name.as_str()
    }

    pub fn actor_id(&self) -> IntId {
        self.model.actor_id
    }
}

/// Represents a single movie with an actor
#[Object]
impl Movie {
    #[graphql(name = "id")]
    async fn graphql_id(&self) -> IntId {
        self.id()
    }

    #[graphql(name = "name")]
    async fn graphql_name(&self) -> &str {
        self.name()
    }

    #[graphql(name = "actorId")]
    async fn graphql_actor_id(&self) -> IntId {
        self.actor_id()
    }

    /// The actor starring in this movie. Null if `actorId` doesn't match any
    /// known actor.
    async fn actor(&self, ctx: &Context<'_>) -> Option<Actor> {
        let store = &ctx_data(ctx).store;
        store.actor_of_movie(&self.model).await.map(Into::into)
    }
}

#[derive(Clone, Debug, derive_more::From)]
pub struct Actor {
    model: models::Actor,
}

impl Actor {
    pub fn id(&self) -> IntId {
        self.model.id
    }

    pub fn name(&self) -> &str {
        self.model.name.as_str()
    }
}

/// Represents a single actor of a movie
#[Object]
impl Actor {
    #[graphql(name = "id")]
    async fn graphql_id(&self) -> IntId {
        self.id()
    }

    #[graphql(name = "name")]
    async fn graphql_name(&self) -> &str {
        self.name()
    }

    /// Movies starring this actor, in insertion order. Never null; empty when
    /// the actor has no movies.
    async fn movies(&self, ctx: &Context<'_>) -> Option<Vec<Movie>> {
        let store = &ctx_data(ctx).store;
        let movies = store.movies_by_actor(self.model.id).await;

        Some(movies.into_iter().map(Into::into).collect())
    }
}
