//! # Framework Errors
//!
//! Errors raised by the actor runtime itself, as opposed to the domain errors
//! produced inside [`ActorState::handle_action`](crate::ActorState::handle_action).

/// Errors that can occur within the actor runtime.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("State error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Wraps a domain error raised by the state owned by an actor.
    pub fn entity<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        FrameworkError::EntityError(Box::new(error))
    }

    /// Recovers the typed domain error from an [`FrameworkError::EntityError`].
    ///
    /// Returns `Err(self)` unchanged when this is a transport error or the boxed
    /// error is of a different type.
    pub fn into_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(error) => Ok(*error),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("out of beans")]
    struct BeanError;

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct OtherError;

    #[test]
    fn into_entity_recovers_typed_error() {
        let err = FrameworkError::entity(BeanError);
        assert_eq!(err.into_entity::<BeanError>().unwrap(), BeanError);
    }

    #[test]
    fn into_entity_keeps_foreign_errors() {
        let err = FrameworkError::entity(OtherError);
        let back = err.into_entity::<BeanError>().unwrap_err();
        assert_eq!(back.to_string(), "State error: other");

        let closed = FrameworkError::ActorClosed.into_entity::<BeanError>();
        assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    }
}
