use crate::contract::model::AuthUser;
use crate::domain::error::DomainError;

/// Fails unless the caller is the target user.
///
/// Mutating operations pass the owner id of the *stored* entity, never an id
/// taken from the request.
pub fn verify_permission(caller: &AuthUser, target_user_id: i32) -> Result<(), DomainError> {
    if caller.id == target_user_id {
        Ok(())
    } else {
        Err(DomainError::authentication_fail(caller.id, target_user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_user_is_permitted() {
        assert!(verify_permission(&AuthUser::new(1), 1).is_ok());
    }

    #[test]
    fn other_user_is_rejected() {
        match verify_permission(&AuthUser::new(2), 1) {
            Err(DomainError::AuthenticationFail { caller, owner }) => {
                assert_eq!(caller, 2);
                assert_eq!(owner, 1);
            }
            other => panic!("expected AuthenticationFail, got {other:?}"),
        }
    }
}
