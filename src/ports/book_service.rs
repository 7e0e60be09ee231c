use crate::domain::value_objects::BookId;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍サービスポート
///
/// 貸出コンテキストとカタログコンテキストの境界を維持する。
/// 貸出コンテキストはBookIDのみを知り、書籍詳細は知らない。
pub trait BookService: Send + Sync {
    /// 書籍が貸出可能か確認する
    ///
    /// ビジネスルール: 貸出不可の書籍は貸し出せない。
    fn is_available_for_loan(&self, book_id: BookId) -> Result<bool>;
}
