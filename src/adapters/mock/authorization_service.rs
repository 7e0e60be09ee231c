use crate::domain::value_objects::UserId;
use crate::ports::authorization_service::{
    AuthorizationService as AuthorizationServiceTrait, Result,
};

/// Mock implementation of AuthorizationService
///
/// Stateless and deterministic: every user id of 1 or above is authorized.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorizationService;

impl AuthorizationService {
    pub fn new() -> Self {
        Self
    }
}

impl AuthorizationServiceTrait for AuthorizationService {
    fn is_authorized(&self, user_id: UserId) -> Result<bool> {
        Ok(user_id.value() >= 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_ids_are_authorized() {
        let service = AuthorizationService::new();
        assert!(service.is_authorized(UserId::new(1)).unwrap());
        assert!(service.is_authorized(UserId::new(1000)).unwrap());
    }

    #[test]
    fn test_zero_and_negative_ids_are_rejected() {
        let service = AuthorizationService::new();
        assert!(!service.is_authorized(UserId::new(0)).unwrap());
        assert!(!service.is_authorized(UserId::new(-1)).unwrap());
        assert!(!service.is_authorized(UserId::new(i64::MIN)).unwrap());
    }
}
