pub mod customer_service;
pub mod loan_service;
pub mod movie_service;
pub mod topic_service;

pub use crate::domain::model::{
    Customer, EntityId, LoanMovie, Movie, NewCustomer, NewLoanMovie, NewMovie, NewTopic, Topic,
};
pub use crate::domain::ports::{
    CustomerRepository, CustomerService, LoanRepository, LoanService, MovieRepository,
    MovieService, TopicRepository, TopicService,
};
pub use crate::utils::error::Result;

pub use customer_service::CustomerServiceImpl;
pub use loan_service::LoanServiceImpl;
pub use movie_service::MovieServiceImpl;
pub use topic_service::TopicServiceImpl;
