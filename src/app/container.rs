use crate::adapters::{
    BackendClient, HttpCustomerRepository, HttpLoanRepository, HttpMovieRepository,
    HttpTopicRepository,
};
use crate::config::ClientSettings;
use crate::core::{CustomerServiceImpl, LoanServiceImpl, MovieServiceImpl, TopicServiceImpl};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Every service wired to its HTTP repository over one shared backend client.
pub struct RentalServices {
    pub movies: MovieServiceImpl<HttpMovieRepository>,
    pub customers: CustomerServiceImpl<HttpCustomerRepository>,
    pub topics: TopicServiceImpl<HttpTopicRepository>,
    pub loans: LoanServiceImpl<HttpLoanRepository>,
}

impl RentalServices {
    pub fn new(backend: BackendClient) -> Self {
        tracing::debug!("Wiring services against {}", backend.base_url());
        Self {
            movies: MovieServiceImpl::new(HttpMovieRepository::new(backend.clone())),
            customers: CustomerServiceImpl::new(HttpCustomerRepository::new(backend.clone())),
            topics: TopicServiceImpl::new(HttpTopicRepository::new(backend.clone())),
            loans: LoanServiceImpl::new(HttpLoanRepository::new(backend)),
        }
    }

    pub fn connect<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Ok(Self::new(BackendClient::from_config(config)?))
    }

    /// Builds the services from `VHS_API_URL` / `VHS_TIMEOUT_SECONDS`.
    pub fn from_env() -> Result<Self> {
        let settings = ClientSettings::from_env()?;
        settings.validate()?;
        Self::connect(&settings)
    }
}
