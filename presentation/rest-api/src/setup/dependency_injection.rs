use std::sync::Arc;

use firestore::connector::FirestoreConnector;
use logger::TracingLogger;

use business::application::bootstrap::client_bootstrapper::ClientBootstrapper;
use business::application::student_call::call_student::CallStudentUseCaseImpl;
use business::application::student_call::clear_panels::ClearPanelsUseCaseImpl;
use business::application::student_call::purge_expired::PurgeExpiredCallsUseCaseImpl;
use business::domain::bootstrap::client::ClientProvider;
use business::domain::student_call::use_cases::purge_expired::PurgeExpiredCallsUseCase;

use crate::config::service_config;

pub struct DependencyContainer {
    pub clients: Arc<ClientBootstrapper>,
    pub purge_expired_use_case: Arc<dyn PurgeExpiredCallsUseCase>,
    pub health_api: crate::api::health::routes::Api,
    pub student_call_api: crate::api::student_call::routes::StudentCallApi,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let clients = Arc::new(ClientBootstrapper::new(
            service_config::init_config_source(),
            Arc::new(FirestoreConnector::new()),
            logger.clone(),
        ));
        let provider: Arc<dyn ClientProvider> = clients.clone();

        // Student call use cases
        let call_student_use_case = Arc::new(CallStudentUseCaseImpl {
            clients: provider.clone(),
            logger: logger.clone(),
        });
        let clear_panels_use_case = Arc::new(ClearPanelsUseCaseImpl {
            clients: provider.clone(),
            logger: logger.clone(),
        });
        let purge_expired_use_case = Arc::new(PurgeExpiredCallsUseCaseImpl {
            clients: provider.clone(),
            logger,
        });

        let health_api = crate::api::health::routes::Api::new(provider);
        let student_call_api = crate::api::student_call::routes::StudentCallApi::new(
            call_student_use_case,
            clear_panels_use_case,
        );

        Self {
            clients,
            purge_expired_use_case,
            health_api,
            student_call_api,
        }
    }
}
