use serde::{Deserialize, Serialize};

use super::{BookId, UserId};

/// コマンド：書籍を貸し出す
///
/// 1回の判定のためだけに組み立てられ、判定後は破棄される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanBook {
    pub user_id: UserId,
    pub book_id: BookId,
}

impl LoanBook {
    pub fn new(user_id: impl Into<UserId>, book_id: impl Into<BookId>) -> Self {
        Self {
            user_id: user_id.into(),
            book_id: book_id.into(),
        }
    }
}
