use library_loan_decision::adapters::mock::{AuthorizationService, BookService};
use library_loan_decision::application::loan::LoanDependencies;
use library_loan_decision::domain::value_objects::{BookId, UserId};
use library_loan_decision::ports::{authorization_service, book_service};
use std::sync::Arc;

/// モックサービスで組み立てた依存関係
pub fn mock_deps() -> LoanDependencies {
    LoanDependencies::new(
        Arc::new(AuthorizationService::new()),
        Arc::new(BookService::new()),
    )
}

/// 常に失敗する協調サービス
pub struct FailingService;

impl authorization_service::AuthorizationService for FailingService {
    fn is_authorized(&self, _user_id: UserId) -> authorization_service::Result<bool> {
        Err("service unavailable".into())
    }
}

impl book_service::BookService for FailingService {
    fn is_available_for_loan(&self, _book_id: BookId) -> book_service::Result<bool> {
        Err("service unavailable".into())
    }
}
