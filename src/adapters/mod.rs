// Adapters layer: concrete implementations of the domain ports against the HTTP backend.

pub mod http;
pub mod repositories;

pub use http::BackendClient;
pub use repositories::{
    HttpCustomerRepository, HttpLoanRepository, HttpMovieRepository, HttpTopicRepository,
};
