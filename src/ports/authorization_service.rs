use crate::domain::value_objects::UserId;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 認可サービスポート
///
/// 貸出コンテキストと認可コンテキストの境界を維持する。
/// 貸出コンテキストはUserIDのみを知り、認可の仕組みは知らない。
pub trait AuthorizationService: Send + Sync {
    /// 利用者が貸出を受けられるか確認する
    ///
    /// ビジネスルール: 認可されていない利用者には貸し出せない。
    fn is_authorized(&self, user_id: UserId) -> Result<bool>;
}
