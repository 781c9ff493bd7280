use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{Actor, IntId, Movie};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("duplicate actor id {0} in seed data")]
    DuplicateActorId(IntId),
    #[error("duplicate movie id {0} in seed data")]
    DuplicateMovieId(IntId),
}

/// The initial contents of a [`Store`](crate::Store).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SeedData {
    #[serde(default)]
    pub actors: Vec<Actor>,
    #[serde(default)]
    pub movies: Vec<Movie>,
}

impl SeedData {
    /// Seed data without any records.
    pub fn empty() -> Self {
        Self {
            actors: vec![],
            movies: vec![],
        }
    }

    /// Ids must be unique within each list. Dangling `actor_id`s are fine.
    pub fn validate(&self) -> Result<(), SeedError> {
        let mut seen = HashSet::new();
        for actor in &self.actors {
            if !seen.insert(actor.id) {
                return Err(SeedError::DuplicateActorId(actor.id));
            }
        }

        let mut seen = HashSet::new();
        for movie in &self.movies {
            if !seen.insert(movie.id) {
                return Err(SeedError::DuplicateMovieId(movie.id));
            }
        }

        Ok(())
    }
}

impl Default for SeedData {
    fn default() -> Self {
        let actor = |id, name: &str| Actor {
            id,
            name: name.to_string(),
        };
        let movie = |id, name: &str, actor_id| Movie {
            id,
            name: name.to_string(),
            actor_id,
        };

        Self {
            actors: vec![
                actor(1, "Robin Williams"),
                actor(2, "Pedro Pascal"),
                actor(3, "Jennifer Lawrenec"),
            ],
            movies: vec![
                movie(1, "iRobot", 1),
                movie(2, "GoodWill Hunting", 1),
                movie(3, "The Pursuit of Happyness", 2),
                movie(4, "Home Alone", 3),
            ],
        }
    }
}
