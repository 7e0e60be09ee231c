use crate::domain::value_objects::BookId;
use crate::ports::book_service::{BookService as BookServiceTrait, Result};

/// BookServiceのモック実装
///
/// 状態を持たない固定ルール：偶数IDの書籍（0を含む）は貸出可能、奇数IDは貸出不可。
#[derive(Debug, Clone, Copy, Default)]
pub struct BookService;

impl BookService {
    pub fn new() -> Self {
        Self
    }
}

impl BookServiceTrait for BookService {
    fn is_available_for_loan(&self, book_id: BookId) -> Result<bool> {
        Ok(book_id.value() % 2 == 0)
    }
}
