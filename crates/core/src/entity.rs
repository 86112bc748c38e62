//! Entity trait: identity + continuity across state changes.

use crate::error::DomainResult;
use crate::id::EntityId;

/// Entity marker + minimal interface.
///
/// An entity is defined by its identity rather than its attributes: two
/// instances carrying the same identifier are the same entity, whatever their
/// other fields hold. Equality therefore goes through [`Entity::id`] and
/// nothing else.
///
/// ## Construction contract
///
/// Implementors own exactly one identifier, set once at construction and
/// never reassigned. Constructors must run [`Entity::validate_state`] before
/// handing out an instance and propagate its error with `?`, so that no
/// partially-valid entity is ever observable. The trait cannot force a
/// constructor to do this; it is a contractual obligation on implementors.
///
/// ```ignore
/// pub struct User {
///     id: UserId,
///     name: String,
/// }
///
/// impl User {
///     pub fn new(id: UserId, name: impl Into<String>) -> DomainResult<Self> {
///         let user = Self { id, name: name.into() };
///         user.validate_state()?;
///         Ok(user)
///     }
/// }
///
/// impl Entity for User {
///     type Id = UserId;
///
///     fn id(&self) -> &UserId {
///         &self.id
///     }
///
///     fn validate_state(&self) -> DomainResult<()> {
///         if self.name.trim().is_empty() {
///             return Err(DomainError::invalid_state("user name cannot be empty"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: EntityId;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Check the entity's own invariants.
    ///
    /// What counts as valid is entirely up to the implementor; the trait
    /// itself never raises. Violations are reported as
    /// [`DomainError::InvalidState`](crate::error::DomainError::InvalidState)
    /// with a message naming the broken invariant.
    fn validate_state(&self) -> DomainResult<()>;

    /// Identity-based equality: true iff both identifiers are equal.
    ///
    /// Never inspects any other field.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }

    /// Identity-based equality against an optional counterpart.
    ///
    /// An absent counterpart is never equal.
    fn identity_eq(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|o| self.same_identity_as(o))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainError, DomainResult};
    use crate::id::UuidId;

    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    struct UserId(UuidId);

    impl core::fmt::Display for UserId {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            core::fmt::Display::fmt(&self.0, f)
        }
    }

    impl EntityId for UserId {}

    #[derive(Debug, Clone)]
    struct User {
        id: UserId,
        name: String,
    }

    impl User {
        fn new(id: UserId, name: impl Into<String>) -> DomainResult<Self> {
            let user = Self {
                id,
                name: name.into(),
            };
            user.validate_state()?;
            Ok(user)
        }
    }

    impl Entity for User {
        type Id = UserId;

        fn id(&self) -> &UserId {
            &self.id
        }

        fn validate_state(&self) -> DomainResult<()> {
            if self.name.trim().is_empty() {
                return Err(DomainError::invalid_state("user name cannot be empty"));
            }
            Ok(())
        }
    }

    fn test_user_id() -> UserId {
        UserId(UuidId::new())
    }

    #[test]
    fn constructor_returns_validated_entity() {
        let id = test_user_id();
        let user = User::new(id, "Alice").unwrap();

        assert_eq!(user.id(), &id);
        assert_eq!(user.name, "Alice");
    }

    #[test]
    fn constructor_rejects_blank_name() {
        let err = User::new(test_user_id(), "   ").unwrap_err();

        assert_eq!(
            err,
            DomainError::invalid_state("user name cannot be empty")
        );
    }

    #[test]
    fn constructor_rejects_empty_name() {
        let err = User::new(test_user_id(), "").unwrap_err();

        assert!(matches!(err, DomainError::InvalidState(_)));
    }

    #[test]
    fn same_identity_ignores_non_id_fields() {
        let id = test_user_id();
        let a = User::new(id, "Charlie").unwrap();
        let b = User::new(id, "Dave").unwrap();

        assert!(a.same_identity_as(&b));
        assert!(b.same_identity_as(&a));
    }

    #[test]
    fn different_ids_are_different_identities() {
        let a = User::new(test_user_id(), "Eve").unwrap();
        let b = User::new(test_user_id(), "Eve").unwrap();

        assert!(!a.same_identity_as(&b));
        assert!(!b.same_identity_as(&a));
    }

    #[test]
    fn absent_counterpart_is_never_equal() {
        let user = User::new(test_user_id(), "Frank").unwrap();

        assert!(!user.identity_eq(None));
    }

    #[test]
    fn present_counterpart_compares_by_id() {
        let id = test_user_id();
        let a = User::new(id, "Grace").unwrap();
        let b = User::new(id, "Heidi").unwrap();
        let c = User::new(test_user_id(), "Grace").unwrap();

        assert!(a.identity_eq(Some(&b)));
        assert!(!a.identity_eq(Some(&c)));
    }
}
