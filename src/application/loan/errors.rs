use thiserror::Error;

/// 貸出判定アプリケーション層のエラー
///
/// 認可されない・貸出不可といった判定結果はエラーではなく`LoanOutcome`で返す。
/// ここに現れるのは協調サービス自体の障害のみ。
#[derive(Debug, Error)]
pub enum LoanApplicationError {
    /// AuthorizationServiceのエラー
    #[error("Authorization service error")]
    AuthorizationServiceError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// BookServiceのエラー
    #[error("Book service error")]
    BookServiceError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LoanApplicationError>;
