use crate::adapters::http::BackendClient;
use crate::domain::model::{EntityId, LoanMovie, NewLoanMovie};
use crate::domain::ports::LoanRepository;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Loans over `/loans`. The backend fills in the joined movie, client and
/// topic names on the rows it returns.
#[derive(Debug, Clone)]
pub struct HttpLoanRepository {
    backend: BackendClient,
}

impl HttpLoanRepository {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl LoanRepository for HttpLoanRepository {
    async fn create_loan(&self, loan: &NewLoanMovie) -> Result<LoanMovie> {
        self.backend.create::<LoanMovie>(loan).await
    }

    async fn delete_loan(&self, id: EntityId) -> Result<()> {
        self.backend.delete::<LoanMovie>(id).await
    }

    async fn get_all_loans(&self) -> Result<Vec<LoanMovie>> {
        self.backend.list::<LoanMovie>().await
    }

    async fn get_loan_by_id(&self, id: EntityId) -> Result<Option<LoanMovie>> {
        self.backend.fetch::<LoanMovie>(id).await
    }

    async fn update_loan(&self, loan: &LoanMovie) -> Result<LoanMovie> {
        self.backend.update(loan).await
    }
}
