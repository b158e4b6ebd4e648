use crate::core::{EntityId, Movie, MovieRepository, MovieService, NewMovie, Result};
use async_trait::async_trait;

pub struct MovieServiceImpl<R: MovieRepository> {
    repository: R,
}

impl<R: MovieRepository> MovieServiceImpl<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: MovieRepository> MovieService for MovieServiceImpl<R> {
    async fn create_movie(&self, movie: &NewMovie) -> Result<Movie> {
        self.repository.create_movie(movie).await
    }

    async fn delete_movie(&self, id: EntityId) -> Result<()> {
        self.repository.delete_movie(id).await
    }

    async fn get_all_movies(&self) -> Result<Vec<Movie>> {
        self.repository.get_all_movies().await
    }

    async fn get_movie_by_id(&self, id: EntityId) -> Result<Option<Movie>> {
        self.repository.get_movie_by_id(id).await
    }

    async fn update_movie(&self, movie: &Movie) -> Result<Movie> {
        self.repository.update_movie(movie).await
    }
}
