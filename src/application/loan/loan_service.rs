use crate::domain::{LoanOutcome, commands::LoanBook};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{LoanApplicationError, Result};

/// 貸出判定の依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞いは持たず、呼び出し側が組み立てて`decide_loan`に明示的に渡す。
#[derive(Clone)]
pub struct LoanDependencies {
    pub authorization_service: Arc<dyn AuthorizationService>,
    pub book_service: Arc<dyn BookService>,
}

impl LoanDependencies {
    pub fn new(
        authorization_service: Arc<dyn AuthorizationService>,
        book_service: Arc<dyn BookService>,
    ) -> Self {
        Self {
            authorization_service,
            book_service,
        }
    }
}

/// 書籍を貸し出せるか判定する（純粋な関数）
///
/// ビジネスルール（この順序で評価し、最初に失敗した時点で打ち切る）：
/// 1. 利用者が認可されていること。されていなければ`UserUnauthorized`
///    （書籍の貸出可能性は確認しない）
/// 2. 書籍が貸出可能であること。不可なら`BookUnavailable`
/// 3. 上記を満たせば`LoanGranted`
///
/// 状態を持たないため、同じ入力と同じ協調サービスに対しては常に同じ結果を返す。
///
/// # エラー
/// - AuthorizationServiceError: 認可サービスの障害
/// - BookServiceError: 書籍サービスの障害
pub fn decide_loan(deps: &LoanDependencies, cmd: LoanBook) -> Result<LoanOutcome> {
    let LoanBook { user_id, book_id } = cmd;

    // 1. 利用者の認可確認
    let authorized = deps
        .authorization_service
        .is_authorized(user_id)
        .map_err(|e| {
            tracing::error!(%user_id, "Authorization service error: {}", e);
            LoanApplicationError::AuthorizationServiceError(e)
        })?;
    tracing::debug!(%user_id, authorized, "authorization checked");

    if !authorized {
        return Ok(decided(cmd, LoanOutcome::UserUnauthorized));
    }

    // 2. 書籍の貸出可能性確認
    let available = deps
        .book_service
        .is_available_for_loan(book_id)
        .map_err(|e| {
            tracing::error!(%book_id, "Book service error: {}", e);
            LoanApplicationError::BookServiceError(e)
        })?;
    tracing::debug!(%book_id, available, "availability checked");

    if !available {
        return Ok(decided(cmd, LoanOutcome::BookUnavailable));
    }

    Ok(decided(cmd, LoanOutcome::LoanGranted))
}

fn decided(cmd: LoanBook, outcome: LoanOutcome) -> LoanOutcome {
    tracing::info!(
        user_id = %cmd.user_id,
        book_id = %cmd.book_id,
        outcome = outcome.as_str(),
        "loan decided"
    );
    outcome
}
