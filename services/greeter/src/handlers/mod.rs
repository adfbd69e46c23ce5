pub mod greeting;

use crate::error::GreeterError;

/// Method fallback for the greeting routes.
pub async fn method_not_allowed() -> GreeterError {
    GreeterError::MethodNotAllowed
}
