use std::fmt::Debug;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::{Actor, IntId, Movie, NewMovie};
use crate::seed::{SeedData, SeedError};

#[cfg(test)]
mod tests;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no movie ids left to allocate")]
    MovieIdsExhausted,
}

struct Tables {
    actors: Vec<Actor>,
    movies: Vec<Movie>,
    /// `None` once every id up to `IntId::MAX` has been handed out.
    next_movie_id: Option<IntId>,
}

/// An abstraction over all data operations. It uses [`Arc`] internally, so
/// it's cheaply cloneable and every clone sees the same data.
///
/// All lookups are linear scans in insertion order; the first match wins.
#[derive(Clone)]
pub struct Store {
    tables: Arc<RwLock<Tables>>,
}

impl Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

impl Store {
    /// Validates the seed data and builds a store holding it.
    pub fn new(seed: SeedData) -> Result<Self, SeedError> {
        seed.validate()?;

        let SeedData { actors, movies } = seed;
        let next_movie_id = first_free_id(&movies);

        info!(
            actors = actors.len(),
            movies = movies.len(),
            next_movie_id = ?next_movie_id,
            "Seeded store"
        );

        Ok(Self {
            tables: Arc::new(RwLock::new(Tables {
                actors,
                movies,
                next_movie_id,
            })),
        })
    }

    /// All actors, in insertion order.
    pub async fn actors(&self) -> Vec<Actor> {
        self.tables.read().await.actors.clone()
    }

    pub async fn actor(&self, id: IntId) -> Option<Actor> {
        debug!(actor_id = id, "Looking up actor");
        let tables = self.tables.read().await;
        tables.actors.iter().find(|actor| actor.id == id).cloned()
    }

    /// All movies, in insertion order.
    pub async fn movies(&self) -> Vec<Movie> {
        self.tables.read().await.movies.clone()
    }

    pub async fn movie(&self, id: IntId) -> Option<Movie> {
        debug!(movie_id = id, "Looking up movie");
        let tables = self.tables.read().await;
        tables.movies.iter().find(|movie| movie.id == id).cloned()
    }

    /// Movies starring the given actor, in insertion order. Empty if there
    /// are none.
    pub async fn movies_by_actor(&self, actor_id: IntId) -> Vec<Movie> {
        let tables = self.tables.read().await;
        tables
            .movies
            .iter()
            .filter(|movie| movie.actor_id == actor_id)
            .cloned()
            .collect()
    }

    /// The actor referenced by `movie.actor_id`, if it exists.
    pub async fn actor_of_movie(&self, movie: &Movie) -> Option<Actor> {
        self.actor(movie.actor_id).await
    }

    /// Appends a new movie and returns it with its freshly allocated id.
    ///
    /// Id allocation and the append happen under the same write lock, so
    /// concurrent calls never hand out the same id. Fails without touching
    /// the store once ids are exhausted.
    pub async fn add_movie(&self, new_movie: NewMovie) -> Result<Movie, StoreError> {
        let mut tables = self.tables.write().await;

        let id = tables.next_movie_id.ok_or(StoreError::MovieIdsExhausted)?;
        let movie = Movie {
            id,
            name: new_movie.name,
            actor_id: new_movie.actor_id,
        };
        tables.next_movie_id = id.checked_add(1);
        tables.movies.push(movie.clone());

        info!(
            movie_id = movie.id,
            actor_id = movie.actor_id,
            movies = tables.movies.len(),
            "Appended movie"
        );

        Ok(movie)
    }
}

/// One past the largest of the highest seeded id and the number of seeded
/// movies. For densely numbered seeds this equals `movies.len() + 1`.
/// `None` if that would overflow.
fn first_free_id(movies: &[Movie]) -> Option<IntId> {
    let max_id = movies.iter().map(|movie| movie.id).max().unwrap_or(0);
    let count = IntId::try_from(movies.len()).unwrap_or(IntId::MAX);
    max_id.max(count).checked_add(1)
}
