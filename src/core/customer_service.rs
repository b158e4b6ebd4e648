use crate::core::{Customer, CustomerRepository, CustomerService, EntityId, NewCustomer, Result};
use async_trait::async_trait;

pub struct CustomerServiceImpl<R: CustomerRepository> {
    repository: R,
}

impl<R: CustomerRepository> CustomerServiceImpl<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: CustomerRepository> CustomerService for CustomerServiceImpl<R> {
    async fn create_customer(&self, customer: &NewCustomer) -> Result<Customer> {
        self.repository.create_customer(customer).await
    }

    async fn delete_customer(&self, id: EntityId) -> Result<()> {
        self.repository.delete_customer(id).await
    }

    async fn get_all_customers(&self) -> Result<Vec<Customer>> {
        self.repository.get_all_customers().await
    }

    async fn get_customer_by_id(&self, id: EntityId) -> Result<Option<Customer>> {
        self.repository.get_customer_by_id(id).await
    }

    async fn update_customer(&self, customer: &Customer) -> Result<Customer> {
        self.repository.update_customer(customer).await
    }
}
