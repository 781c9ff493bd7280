use async_graphql::{Context, Object, Result};
use marquee_store::models::{IntId, NewMovie};
use tracing::debug;

use super::{api_types, ctx_data};

pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// A single movie
    async fn movie(&self, ctx: &Context<'_>, id: Option<IntId>) -> Option<api_types::Movie> {
        debug!(?id, "Resolving movie");
        let store = &ctx_data(ctx).store;

        // An omitted id matches nothing.
        match id {
            Some(id) => store.movie(id).await.map(Into::into),
            None => None,
        }
    }

    /// List of all movies
    async fn movies(&self, ctx: &Context<'_>) -> Option<Vec<Option<api_types::Movie>>> {
        let store = &ctx_data(ctx).store;
        let movies = store.movies().await;

        Some(movies.into_iter().map(|m| Some(m.into())).collect())
    }

    /// A single actor
    async fn actor(&self, ctx: &Context<'_>, id: Option<IntId>) -> Option<api_types::Actor> {
        debug!(?id, "Resolving actor");
        let store = &ctx_data(ctx).store;

        match id {
            Some(id) => store.actor(id).await.map(Into::into),
            None => None,
        }
    }

    /// List of all actors
    async fn actors(&self, ctx: &Context<'_>) -> Option<Vec<Option<api_types::Actor>>> {
        let store = &ctx_data(ctx).store;
        let actors = store.actors().await;

        Some(actors.into_iter().map(|a| Some(a.into())).collect())
    }
}

pub struct MutationRoot;

/// Root mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    /// Adding a movie
    async fn add_movie(
        &self,
        ctx: &Context<'_>,
        name: String,
        actor_id: IntId,
    ) -> Result<Option<api_types::Movie>> {
        debug!(%name, actor_id, "Adding movie");

        // `actor_id` is taken verbatim, dangling references included.
        let store = &ctx_data(ctx).store;
        let movie = store.add_movie(NewMovie { name, actor_id }).await?;

        Ok(Some(movie.into()))
    }
}
