use crate::runner::session::Asserter;
use crate::runner::types::{GroupFailure, TestFn};
use std::any::Any;
use tracing::debug;

/// Run a test function to completion on its own task.
///
/// Returned errors and panics, including panics raised before the first
/// await, come back as `GroupFailure` instead of unwinding into the caller.
///
/// Must be awaited inside a tokio runtime; `tokio::spawn` panics otherwise.
pub async fn execute_test_fn(test_fn: TestFn, asserter: Asserter) -> Result<(), GroupFailure> {
    let handle = tokio::spawn(async move { test_fn(asserter).await });

    match handle.await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(GroupFailure::Error(e)),
        Err(join_error) if join_error.is_panic() => {
            let message = panic_message(join_error.into_panic());
            debug!("Test function panicked: {}", message);
            Err(GroupFailure::Panicked(message))
        }
        Err(_) => Err(GroupFailure::Cancelled),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::TestSession;
    use crate::runner::types::{Tally, TestFuture};

    fn boxed<F>(f: F) -> TestFn
    where
        F: FnOnce(Asserter) -> TestFuture + Send + 'static,
    {
        Box::new(f)
    }

    #[tokio::test]
    async fn test_completed_function() {
        let session = TestSession::capturing();
        let asserter = session.asserter();
        let probe = asserter.clone();

        let result = execute_test_fn(
            boxed(|t| -> TestFuture {
                Box::pin(async move {
                    t.assert_equals(1, 1, None);
                    anyhow::Ok(())
                })
            }),
            asserter,
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(probe.tally(), Tally::new(1, 0));
    }

    #[tokio::test]
    async fn test_returned_error_is_contained() {
        let session = TestSession::capturing();
        let result = execute_test_fn(
            boxed(|_| -> TestFuture {
                Box::pin(async { Err::<(), _>(anyhow::anyhow!("fixture missing")) })
            }),
            session.asserter(),
        )
        .await;

        match result {
            Err(GroupFailure::Error(e)) => assert_eq!(e.to_string(), "fixture missing"),
            other => panic!("Expected GroupFailure::Error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_panic_before_first_await_is_contained() {
        let session = TestSession::capturing();
        let result = execute_test_fn(
            boxed(|_| panic!("thrown synchronously")),
            session.asserter(),
        )
        .await;

        match result {
            Err(GroupFailure::Panicked(msg)) => assert_eq!(msg, "thrown synchronously"),
            other => panic!("Expected GroupFailure::Panicked, got {:?}", other),
        }
    }

    #[test]
    fn test_panic_message_payloads() {
        assert_eq!(panic_message(Box::new("static")), "static");
        assert_eq!(panic_message(Box::new("owned".to_string())), "owned");
        assert_eq!(panic_message(Box::new(42_u8)), "non-string panic payload");
    }
}
