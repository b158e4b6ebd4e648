use crate::adapters::http::BackendClient;
use crate::domain::model::{EntityId, Movie, NewMovie};
use crate::domain::ports::MovieRepository;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Movies over `/movies`.
#[derive(Debug, Clone)]
pub struct HttpMovieRepository {
    backend: BackendClient,
}

impl HttpMovieRepository {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl MovieRepository for HttpMovieRepository {
    async fn create_movie(&self, movie: &NewMovie) -> Result<Movie> {
        self.backend.create::<Movie>(movie).await
    }

    async fn delete_movie(&self, id: EntityId) -> Result<()> {
        self.backend.delete::<Movie>(id).await
    }

    async fn get_all_movies(&self) -> Result<Vec<Movie>> {
        self.backend.list::<Movie>().await
    }

    async fn get_movie_by_id(&self, id: EntityId) -> Result<Option<Movie>> {
        self.backend.fetch::<Movie>(id).await
    }

    async fn update_movie(&self, movie: &Movie) -> Result<Movie> {
        self.backend.update(movie).await
    }
}
