use crate::core::{EntityId, LoanMovie, LoanRepository, LoanService, NewLoanMovie, Result};
use async_trait::async_trait;

pub struct LoanServiceImpl<R: LoanRepository> {
    repository: R,
}

impl<R: LoanRepository> LoanServiceImpl<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: LoanRepository> LoanService for LoanServiceImpl<R> {
    async fn create_loan(&self, loan: &NewLoanMovie) -> Result<LoanMovie> {
        self.repository.create_loan(loan).await
    }

    async fn delete_loan(&self, id: EntityId) -> Result<()> {
        self.repository.delete_loan(id).await
    }

    async fn get_all_loans(&self) -> Result<Vec<LoanMovie>> {
        self.repository.get_all_loans().await
    }

    async fn get_loan_by_id(&self, id: EntityId) -> Result<Option<LoanMovie>> {
        self.repository.get_loan_by_id(id).await
    }

    async fn update_loan(&self, loan: &LoanMovie) -> Result<LoanMovie> {
        self.repository.update_loan(loan).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{FailureKind, RentalError};
    use chrono::NaiveDate;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Create(NewLoanMovie),
        Delete(EntityId),
        GetAll,
        GetById(EntityId),
        Update(LoanMovie),
    }

    #[derive(Clone, Default)]
    struct RecordingRepository {
        calls: Arc<Mutex<Vec<Call>>>,
        fail_with: Option<FailureKind>,
    }

    impl RecordingRepository {
        async fn record(&self, call: Call, message: &str) -> Result<()> {
            self.calls.lock().await.push(call);
            match self.fail_with {
                Some(kind) => Err(RentalError::operation(kind, message, None, "connection reset")),
                None => Ok(()),
            }
        }
    }

    fn draft() -> NewLoanMovie {
        NewLoanMovie {
            date_loan: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            date_return: None,
            movie_id: 12,
            movie_name: String::new(),
            client_id: 1,
            client_name: String::new(),
            topic_id: 3,
            topic_name: String::new(),
            state: true,
        }
    }

    #[async_trait]
    impl LoanRepository for RecordingRepository {
        async fn create_loan(&self, loan: &NewLoanMovie) -> Result<LoanMovie> {
            self.record(Call::Create(loan.clone()), "Error al crear préstamo").await?;
            Ok(loan.clone().with_id(9))
        }

        async fn delete_loan(&self, id: EntityId) -> Result<()> {
            self.record(Call::Delete(id), "Error al eliminar préstamo").await
        }

        async fn get_all_loans(&self) -> Result<Vec<LoanMovie>> {
            self.record(Call::GetAll, "Error al obtener préstamos").await?;
            Ok(vec![draft().with_id(9)])
        }

        async fn get_loan_by_id(&self, id: EntityId) -> Result<Option<LoanMovie>> {
            self.record(Call::GetById(id), "Error al obtener préstamo por ID").await?;
            Ok(None)
        }

        async fn update_loan(&self, loan: &LoanMovie) -> Result<LoanMovie> {
            self.record(Call::Update(loan.clone()), "Error al actualizar préstamo").await?;
            Ok(loan.clone())
        }
    }

    #[tokio::test]
    async fn test_each_operation_delegates_once() {
        let repository = RecordingRepository::default();
        let service = LoanServiceImpl::new(repository.clone());

        let created = service.create_loan(&draft()).await.unwrap();
        assert_eq!(created, draft().with_id(9));
        let returned = LoanMovie {
            date_return: NaiveDate::from_ymd_opt(2024, 5, 8),
            state: false,
            ..created.clone()
        };
        assert_eq!(service.update_loan(&returned).await.unwrap(), returned);
        assert_eq!(service.get_loan_by_id(9).await.unwrap(), None);
        assert_eq!(service.get_all_loans().await.unwrap(), vec![created]);
        service.delete_loan(9).await.unwrap();

        assert_eq!(
            *repository.calls.lock().await,
            vec![
                Call::Create(draft()),
                Call::Update(returned),
                Call::GetById(9),
                Call::GetAll,
                Call::Delete(9),
            ]
        );
    }

    #[tokio::test]
    async fn test_errors_propagate_unchanged() {
        let service = LoanServiceImpl::new(RecordingRepository {
            fail_with: Some(FailureKind::Network),
            ..RecordingRepository::default()
        });

        let err = service.get_all_loans().await.unwrap_err();
        assert_eq!(err.to_string(), "Error al obtener préstamos");
        assert_eq!(err.kind(), Some(FailureKind::Network));
        assert_eq!(err.detail(), Some("connection reset"));
    }
}
