use crate::domain::model::{
    Customer, EntityId, LoanMovie, Movie, NewCustomer, NewLoanMovie, NewMovie, NewTopic, Topic,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
    fn user_agent(&self) -> &str;
}

// Repositories: one HTTP call per operation. `get_*_by_id` returns `Ok(None)`
// when the backend has nothing for the id.

#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn create_movie(&self, movie: &NewMovie) -> Result<Movie>;
    async fn delete_movie(&self, id: EntityId) -> Result<()>;
    async fn get_all_movies(&self) -> Result<Vec<Movie>>;
    async fn get_movie_by_id(&self, id: EntityId) -> Result<Option<Movie>>;
    async fn update_movie(&self, movie: &Movie) -> Result<Movie>;
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create_customer(&self, customer: &NewCustomer) -> Result<Customer>;
    async fn delete_customer(&self, id: EntityId) -> Result<()>;
    async fn get_all_customers(&self) -> Result<Vec<Customer>>;
    async fn get_customer_by_id(&self, id: EntityId) -> Result<Option<Customer>>;
    async fn update_customer(&self, customer: &Customer) -> Result<Customer>;
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create_topic(&self, topic: &NewTopic) -> Result<Topic>;
    async fn delete_topic(&self, id: EntityId) -> Result<()>;
    async fn get_all_topics(&self) -> Result<Vec<Topic>>;
    async fn get_topic_by_id(&self, id: EntityId) -> Result<Option<Topic>>;
    async fn update_topic(&self, topic: &Topic) -> Result<Topic>;
}

#[async_trait]
pub trait LoanRepository: Send + Sync {
    async fn create_loan(&self, loan: &NewLoanMovie) -> Result<LoanMovie>;
    async fn delete_loan(&self, id: EntityId) -> Result<()>;
    async fn get_all_loans(&self) -> Result<Vec<LoanMovie>>;
    async fn get_loan_by_id(&self, id: EntityId) -> Result<Option<LoanMovie>>;
    async fn update_loan(&self, loan: &LoanMovie) -> Result<LoanMovie>;
}

// Services: what presentation code depends on. Same operations, no transport.

#[async_trait]
pub trait MovieService: Send + Sync {
    async fn create_movie(&self, movie: &NewMovie) -> Result<Movie>;
    async fn delete_movie(&self, id: EntityId) -> Result<()>;
    async fn get_all_movies(&self) -> Result<Vec<Movie>>;
    async fn get_movie_by_id(&self, id: EntityId) -> Result<Option<Movie>>;
    async fn update_movie(&self, movie: &Movie) -> Result<Movie>;
}

#[async_trait]
pub trait CustomerService: Send + Sync {
    async fn create_customer(&self, customer: &NewCustomer) -> Result<Customer>;
    async fn delete_customer(&self, id: EntityId) -> Result<()>;
    async fn get_all_customers(&self) -> Result<Vec<Customer>>;
    async fn get_customer_by_id(&self, id: EntityId) -> Result<Option<Customer>>;
    async fn update_customer(&self, customer: &Customer) -> Result<Customer>;
}

#[async_trait]
pub trait TopicService: Send + Sync {
    async fn create_topic(&self, topic: &NewTopic) -> Result<Topic>;
    async fn delete_topic(&self, id: EntityId) -> Result<()>;
    async fn get_all_topics(&self) -> Result<Vec<Topic>>;
    async fn get_topic_by_id(&self, id: EntityId) -> Result<Option<Topic>>;
    async fn update_topic(&self, topic: &Topic) -> Result<Topic>;
}

#[async_trait]
pub trait LoanService: Send + Sync {
    async fn create_loan(&self, loan: &NewLoanMovie) -> Result<LoanMovie>;
    async fn delete_loan(&self, id: EntityId) -> Result<()>;
    async fn get_all_loans(&self) -> Result<Vec<LoanMovie>>;
    async fn get_loan_by_id(&self, id: EntityId) -> Result<Option<LoanMovie>>;
    async fn update_loan(&self, loan: &LoanMovie) -> Result<LoanMovie>;
}
