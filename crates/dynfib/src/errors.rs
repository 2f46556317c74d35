//! Error handling and exit codes.

use dynfib_core::{exit_codes, FibError};

/// Map a cache error to the process exit code.
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::OutOfCapacity { .. } | FibError::Overflow(_) | FibError::MovedFrom => {
            exit_codes::ERROR_CONTRACT
        }
        FibError::ScenarioFailed(_) => exit_codes::ERROR_SCENARIO,
        FibError::Config(_) | FibError::CapacityTooSmall(_) => exit_codes::ERROR_CONFIG,
    }
}

/// Exit code for an application error, looking through any added context.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<FibError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&FibError::MovedFrom), 2);
        assert_eq!(
            handle_error(&FibError::OutOfCapacity {
                index: 12,
                capacity: 12
            }),
            2
        );
        assert_eq!(handle_error(&FibError::Overflow(94)), 2);
        assert_eq!(handle_error(&FibError::ScenarioFailed("x".into())), 3);
        assert_eq!(handle_error(&FibError::Config("bad".into())), 4);
        assert_eq!(handle_error(&FibError::CapacityTooSmall(1)), 4);
    }

    #[test]
    fn exit_code_sees_through_context() {
        let err = Err::<(), _>(FibError::MovedFrom)
            .context("querying fib")
            .unwrap_err();
        assert_eq!(exit_code(&err), exit_codes::ERROR_CONTRACT);
    }

    #[test]
    fn foreign_errors_are_generic() {
        let err = anyhow::anyhow!("disk on fire");
        assert_eq!(exit_code(&err), exit_codes::ERROR_GENERIC);
    }
}
