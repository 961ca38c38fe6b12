use async_trait::async_trait;
use model::Movie;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use store::StoreErrorReason::MissingTable;
use store::StoreOperation::PutMovie;
use store::{MovieStore, StoreError};

/// Movie table held in process memory, keyed by record id.
///
/// Mirrors the backend contract closely enough for handler tests: a call
/// without a table reference fails at this layer, as the real service would.
pub struct InMemoryMovieStore {
    movies: Arc<Mutex<HashMap<String, Movie>>>,
}

impl Default for InMemoryMovieStore {
    fn default() -> Self {
        InMemoryMovieStore {
            movies: Arc::new(Mutex::new(Default::default())),
        }
    }
}

impl InMemoryMovieStore {
    pub fn get(&self, id: &str) -> Option<Movie> {
        self.movies.lock().unwrap().get(id).cloned()
    }

    pub fn movies(&self) -> Vec<Movie> {
        self.movies.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn put_movie(&self, table_name: Option<&str>, movie: &Movie) -> Result<(), StoreError> {
        if table_name.is_none() {
            return Err(StoreError::new(movie.id.clone(), PutMovie, MissingTable));
        }

        self.movies
            .lock()
            .unwrap()
            .insert(movie.id.clone(), movie.clone());

        Ok(())
    }
}
