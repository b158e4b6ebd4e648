pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod router;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::BackendClient;
pub use app::RentalServices;
pub use config::{toml_config::TomlConfig, ClientSettings};
pub use core::{CustomerServiceImpl, LoanServiceImpl, MovieServiceImpl, TopicServiceImpl};
pub use domain::model::{
    Customer, EntityId, LoanMovie, Movie, NewCustomer, NewLoanMovie, NewMovie, NewTopic, Topic,
};
pub use domain::ports::{
    CustomerRepository, CustomerService, LoanRepository, LoanService, MovieRepository,
    MovieService, TopicRepository, TopicService,
};
pub use utils::error::{FailureKind, RentalError, Result};
