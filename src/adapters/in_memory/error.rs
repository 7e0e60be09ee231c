use thiserror::Error;

/// インメモリレジストリのエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// 別スレッドのパニックでロックが汚染された
    #[error("{0} lock poisoned")]
    LockPoisoned(&'static str),
}
