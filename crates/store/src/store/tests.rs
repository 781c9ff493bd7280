use std::collections::HashSet;

use quickcheck_macros::quickcheck;
use tracing_test::traced_test;

use super::*;

fn seeded() -> Store {
    Store::new(SeedData::default()).unwrap()
}

fn new_movie(name: &str, actor_id: IntId) -> NewMovie {
    NewMovie {
        name: name.to_string(),
        actor_id,
    }
}

#[tokio::test]
async fn lists_preserve_seed_order() {
    let store = seeded();

    let actor_ids: Vec<_> = store.actors().await.iter().map(|a| a.id).collect();
    let movie_ids: Vec<_> = store.movies().await.iter().map(|m| m.id).collect();

    assert_eq!(actor_ids, vec![1, 2, 3]);
    assert_eq!(movie_ids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn lookups_by_id() {
    let store = seeded();

    let movie = store.movie(3).await.unwrap();
    assert_eq!(movie.name, "The Pursuit of Happyness");
    assert_eq!(movie.actor_id, 2);

    let actor = store.actor_of_movie(&movie).await.unwrap();
    assert_eq!(actor.name, "Pedro Pascal");

    assert_eq!(store.movie(999).await, None);
    assert_eq!(store.actor(999).await, None);
}

#[tokio::test]
async fn movies_by_actor_filters_in_order() {
    let store = seeded();

    let names: Vec<_> = store
        .movies_by_actor(1)
        .await
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, vec!["iRobot", "GoodWill Hunting"]);

    assert!(store.movies_by_actor(999).await.is_empty());
}

#[tokio::test]
async fn dangling_actor_id_resolves_to_none() {
    let store = seeded();

    let movie = store.add_movie(new_movie("Orphan", 42)).await.unwrap();
    assert_eq!(store.actor_of_movie(&movie).await, None);
}

#[tokio::test]
#[traced_test]
async fn add_movie_appends_with_next_id() {
    let store = seeded();

    let movie = store.add_movie(new_movie("Good Omens", 1)).await.unwrap();
    assert_eq!(movie.id, 5);
    assert_eq!(store.movies().await.len(), 5);
    assert_eq!(store.movie(5).await, Some(movie.clone()));
    assert_eq!(store.movies_by_actor(1).await.last(), Some(&movie));

    assert!(logs_contain("Appended movie"));
}

#[tokio::test]
async fn clones_share_state() {
    let store = seeded();
    let other = store.clone();

    other.add_movie(new_movie("Jumanji", 1)).await.unwrap();
    assert_eq!(store.movies().await.len(), 5);
}

#[tokio::test]
async fn ids_skip_past_sparse_seed_ids() {
    let mut seed = SeedData::default();
    seed.movies.truncate(1);
    seed.movies[0].id = 10;
    let store = Store::new(seed).unwrap();

    let movie = store.add_movie(new_movie("Hook", 1)).await.unwrap();
    assert_eq!(movie.id, 11);
}

#[tokio::test]
async fn empty_store_starts_at_one() {
    let store = Store::new(SeedData::empty()).unwrap();
    assert!(store.actors().await.is_empty());

    let movie = store.add_movie(new_movie("Aladdin", 1)).await.unwrap();
    assert_eq!(movie.id, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_never_share_ids() {
    let store = seeded();

    let handles: Vec<_> = (0..64)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .add_movie(new_movie(&format!("m{i}"), 2))
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        assert!(ids.insert(handle.await.unwrap().id));
    }
    assert_eq!(ids.len(), 64);
    assert_eq!(store.movies().await.len(), 68);
}

#[tokio::test]
async fn ids_run_out_at_int_max() {
    let mut seed = SeedData::default();
    seed.movies[0].id = IntId::MAX - 1;
    let store = Store::new(seed).unwrap();

    let last = store.add_movie(new_movie("Last", 1)).await.unwrap();
    assert_eq!(last.id, IntId::MAX);

    let err = store.add_movie(new_movie("One Too Many", 1)).await;
    assert_eq!(err, Err(StoreError::MovieIdsExhausted));
    assert_eq!(store.movies().await.len(), 5);
}

#[tokio::test]
async fn seed_holding_int_max_never_reuses_it() {
    let mut seed = SeedData::default();
    seed.movies[0].id = IntId::MAX;
    let store = Store::new(seed).unwrap();

    let err = store.add_movie(new_movie("Duplicate", 1)).await;
    assert_eq!(err, Err(StoreError::MovieIdsExhausted));

    let ids: Vec<_> = store.movies().await.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![IntId::MAX, 2, 3, 4]);
}

#[test]
fn seed_with_duplicate_ids_is_rejected() {
    let mut seed = SeedData::default();
    seed.actors.push(seed.actors[1].clone());
    assert_eq!(Store::new(seed).unwrap_err(), SeedError::DuplicateActorId(2));
}

#[quickcheck]
fn appended_movies_are_retrievable_by_id(movies: Vec<(String, IntId)>) -> bool {
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();

    rt.block_on(async {
        let store = seeded();
        let mut last_id = 4;

        for (name, actor_id) in movies {
            let movie = store.add_movie(new_movie(&name, actor_id)).await.unwrap();
            if movie.id != last_id + 1 || movie.name != name || movie.actor_id != actor_id {
                return false;
            }
            if store.movie(movie.id).await.as_ref() != Some(&movie) {
                return false;
            }
            last_id = movie.id;
        }

        true
    })
}
