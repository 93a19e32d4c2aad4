use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::bootstrap::client::ClientProvider;
use crate::domain::logger::Logger;
use crate::domain::student_call::errors::StudentCallError;
use crate::domain::student_call::model::StudentCall;
use crate::domain::student_call::panel::Panel;
use crate::domain::student_call::use_cases::call_student::{
    CallStudentParams, CallStudentUseCase,
};

pub struct CallStudentUseCaseImpl {
    pub clients: Arc<dyn ClientProvider>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CallStudentUseCase for CallStudentUseCaseImpl {
    async fn execute(&self, params: CallStudentParams) -> Result<Panel, StudentCallError> {
        let call = StudentCall::new(
            params.student_id,
            params.full_name,
            params.class_name,
            params.photo_url,
        )?;
        let panel = call.panel();

        let client = self.clients.get_client().await?;
        client.calls().save(panel, &call).await?;

        self.logger.info(&format!(
            "Student {} called on {}",
            call.full_name,
            panel.collection()
        ));
        Ok(panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bootstrap::client::ClientHandle;
    use crate::domain::bootstrap::errors::{BootstrapError, ConnectorError, InitializationError};
    use crate::domain::bootstrap::state::BootstrapState;
    use crate::domain::errors::RepositoryError;
    use crate::domain::student_call::repository::StudentCallRepository;
    use chrono::{DateTime, Utc};
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub CallRepo {}

        #[async_trait]
        impl StudentCallRepository for CallRepo {
            async fn save(&self, panel: Panel, call: &StudentCall) -> Result<(), RepositoryError>;
            async fn delete_older_than(&self, panel: Panel, cutoff: DateTime<Utc>) -> Result<u64, RepositoryError>;
            async fn delete_all(&self, panel: Panel) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Clients {}

        #[async_trait]
        impl ClientProvider for Clients {
            async fn get_client(&self) -> Result<ClientHandle, BootstrapError>;
            fn state(&self) -> BootstrapState;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn clients_with(repo: MockCallRepo) -> Arc<dyn ClientProvider> {
        let handle = ClientHandle::new("school-panel", Arc::new(repo));
        let mut clients = MockClients::new();
        clients
            .expect_get_client()
            .returning(move || Ok(handle.clone()));
        Arc::new(clients)
    }

    fn params(full_name: &str, class_name: &str) -> CallStudentParams {
        CallStudentParams {
            student_id: "1042".to_string(),
            full_name: full_name.to_string(),
            class_name: class_name.to_string(),
            photo_url: None,
        }
    }

    #[tokio::test]
    async fn should_save_call_on_routed_panel() {
        let mut repo = MockCallRepo::new();
        repo.expect_save()
            .withf(|panel, call| *panel == Panel::Fundamental && call.full_name == "Ana Souza")
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = CallStudentUseCaseImpl {
            clients: clients_with(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Ana Souza", "INT-AI 3A")).await;

        assert_eq!(result.unwrap(), Panel::Fundamental);
    }

    #[tokio::test]
    async fn should_reject_empty_name_before_touching_client() {
        let mut clients = MockClients::new();
        clients.expect_get_client().never();

        let use_case = CallStudentUseCaseImpl {
            clients: Arc::new(clients),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("", "EI-2B")).await;

        assert!(matches!(result.unwrap_err(), StudentCallError::NameEmpty));
    }

    #[tokio::test]
    async fn should_report_unavailable_client() {
        let mut clients = MockClients::new();
        clients.expect_get_client().returning(|| {
            Err(BootstrapError::Initialization(InitializationError::from(
                ConnectorError::Unreachable("firestore".to_string()),
            )))
        });

        let use_case = CallStudentUseCaseImpl {
            clients: Arc::new(clients),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Pedro", "AF 6A")).await;

        assert!(matches!(
            result.unwrap_err(),
            StudentCallError::ClientUnavailable(BootstrapError::Initialization(_))
        ));
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut repo = MockCallRepo::new();
        repo.expect_save()
            .with(eq(Panel::General), mockall::predicate::always())
            .returning(|_, _| Err(RepositoryError::DatabaseError));

        let use_case = CallStudentUseCaseImpl {
            clients: clients_with(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Lia", "Turma 2025")).await;

        assert!(matches!(
            result.unwrap_err(),
            StudentCallError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
