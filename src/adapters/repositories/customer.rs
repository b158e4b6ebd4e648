use crate::adapters::http::BackendClient;
use crate::domain::model::{Customer, EntityId, NewCustomer};
use crate::domain::ports::CustomerRepository;
use crate::utils::error::Result;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct HttpCustomerRepository {
    backend: BackendClient,
}

impl HttpCustomerRepository {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl CustomerRepository for HttpCustomerRepository {
    async fn create_customer(&self, customer: &NewCustomer) -> Result<Customer> {
        self.backend.create::<Customer>(customer).await
    }

    async fn delete_customer(&self, id: EntityId) -> Result<()> {
        self.backend.delete::<Customer>(id).await
    }

    async fn get_all_customers(&self) -> Result<Vec<Customer>> {
        self.backend.list::<Customer>().await
    }

    async fn get_customer_by_id(&self, id: EntityId) -> Result<Option<Customer>> {
        self.backend.fetch::<Customer>(id).await
    }

    async fn update_customer(&self, customer: &Customer) -> Result<Customer> {
        self.backend.update(customer).await
    }
}
