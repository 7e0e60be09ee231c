use serde::{Deserialize, Serialize};
use std::fmt;

/// 貸出判定の結果
///
/// 貸出判定は必ずこの3つのいずれかで終わる。拒否もエラーではなく結果の一つとして扱う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanOutcome {
    /// 貸出成立
    LoanGranted,
    /// 利用者が認可されていない
    UserUnauthorized,
    /// 書籍が貸出不可
    BookUnavailable,
}

impl LoanOutcome {
    /// 機械可読なコードを取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanOutcome::LoanGranted => "loan_granted",
            LoanOutcome::UserUnauthorized => "user_unauthorized",
            LoanOutcome::BookUnavailable => "book_unavailable",
        }
    }

    /// 窓口で利用者に表示する固定メッセージ
    pub fn message(&self) -> &'static str {
        match self {
            LoanOutcome::LoanGranted => "Préstamo exitoso",
            LoanOutcome::UserUnauthorized => "Usuario no autorizado",
            LoanOutcome::BookUnavailable => "Libro no disponible",
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, LoanOutcome::LoanGranted)
    }
}

impl fmt::Display for LoanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::str::FromStr for LoanOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "loan_granted" => Ok(LoanOutcome::LoanGranted),
            "user_unauthorized" => Ok(LoanOutcome::UserUnauthorized),
            "book_unavailable" => Ok(LoanOutcome::BookUnavailable),
            _ => Err(format!("Invalid loan outcome: {}", s)),
        }
    }
}
