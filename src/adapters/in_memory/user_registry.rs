use crate::domain::value_objects::UserId;
use crate::ports::authorization_service::{
    AuthorizationService as AuthorizationServiceTrait, Result,
};
use std::collections::HashSet;
use std::sync::RwLock;

use super::RegistryError;

/// 登録済み利用者によるAuthorizationService実装
///
/// 登録された利用者のみが認可される。
#[derive(Debug, Default)]
pub struct UserRegistry {
    authorized_users: RwLock<HashSet<UserId>>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 利用者を登録する
    ///
    /// 既に登録済みの場合は何もしない。
    pub fn register(&self, user_id: UserId) -> Result<()> {
        self.authorized_users
            .write()
            .map_err(|_| RegistryError::LockPoisoned("user registry"))?
            .insert(user_id);
        Ok(())
    }

    /// 利用者の認可を取り消す
    ///
    /// 登録されていた場合は`true`を返す。
    pub fn revoke(&self, user_id: UserId) -> Result<bool> {
        let removed = self
            .authorized_users
            .write()
            .map_err(|_| RegistryError::LockPoisoned("user registry"))?
            .remove(&user_id);
        Ok(removed)
    }
}

impl FromIterator<UserId> for UserRegistry {
    fn from_iter<I: IntoIterator<Item = UserId>>(iter: I) -> Self {
        Self {
            authorized_users: RwLock::new(iter.into_iter().collect()),
        }
    }
}

impl AuthorizationServiceTrait for UserRegistry {
    fn is_authorized(&self, user_id: UserId) -> Result<bool> {
        let users = self
            .authorized_users
            .read()
            .map_err(|_| RegistryError::LockPoisoned("user registry"))?;
        Ok(users.contains(&user_id))
    }
}
