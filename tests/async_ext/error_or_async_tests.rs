use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use error_or::{Error, ErrorList, ErrorOr};

async fn lookup(id: u32) -> ErrorOr<String> {
    tokio::time::sleep(Duration::from_millis(1)).await;
    match id {
        1 => ErrorOr::ok("alice".to_string()),
        _ => Error::not_found("User.NotFound", "No such user").into(),
    }
}

fn missing() -> ErrorOr<u32> {
    ErrorOr::from_error(Error::not_found("User.NotFound", "No such user"))
}

#[tokio::test]
async fn then_async_chains_values() {
    let name = ErrorOr::ok(1).then_async(lookup).await;
    assert_eq!(name, ErrorOr::ok("alice".to_string()));

    let failed = ErrorOr::ok(2).then_async(lookup).await;
    assert_eq!(failed.first_error().code(), "User.NotFound");
}

#[tokio::test]
async fn value_steps_do_not_run_on_errors() {
    let calls = AtomicU32::new(0);

    let out = missing()
        .then_async(|n| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { ErrorOr::ok(n) }
        })
        .await
        .map_async(|n| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { n + 1 }
        })
        .await
        .then_do_async(|_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async {}
        })
        .await
        .fail_if_async(
            |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { true }
            },
            Error::default(),
        )
        .await;

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(out, missing());
}

#[tokio::test]
async fn error_steps_do_not_run_on_values() {
    let calls = AtomicU32::new(0);

    let out = ErrorOr::ok(5u32)
        .or_else_async(|_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { ErrorOr::ok(0) }
        })
        .await
        .else_value_async(|_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { 0 }
        })
        .await
        .else_error_async(|_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Error::default() }
        })
        .await
        .else_errors_async(|errors| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { errors }
        })
        .await
        .else_do_async(|_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async {}
        })
        .await;

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(out, ErrorOr::ok(5));
}

#[tokio::test]
async fn map_async_wraps_result() {
    let out = ErrorOr::ok(20).map_async(|n| async move { n + 1 }).await;
    assert_eq!(out, ErrorOr::ok(21));
}

#[tokio::test]
async fn then_do_async_observes_copied_state() {
    let seen = AtomicU32::new(0);
    let out = ErrorOr::ok(9u32)
        .then_do_async(|n| {
            let n = *n;
            let seen = &seen;
            async move { seen.store(n, Ordering::SeqCst) }
        })
        .await;

    assert_eq!(out, ErrorOr::ok(9));
    assert_eq!(seen.load(Ordering::SeqCst), 9);
}

#[tokio::test]
async fn else_variants_recover_or_replace() {
    let recovered = missing().else_value_async(|errors| async move { errors.len() as u32 }).await;
    assert_eq!(recovered, ErrorOr::ok(1));

    let replaced = missing()
        .else_error_async(|_| async { Error::unexpected("Wrapped", "lookup failed") })
        .await;
    assert_eq!(replaced.first_error().code(), "Wrapped");

    let extended = missing()
        .else_errors_async(|mut errors: ErrorList| async move {
            errors.push(Error::unexpected("Audit", "logged"));
            errors
        })
        .await;
    assert_eq!(extended.errors().len(), 2);

    let retried = missing().or_else_async(|_| async { ErrorOr::ok(7) }).await;
    assert_eq!(retried, ErrorOr::ok(7));
}

#[tokio::test]
async fn else_do_async_sees_errors() {
    let seen = AtomicU32::new(0);
    let out = missing()
        .else_do_async(|errors| {
            let count = errors.len() as u32;
            let seen = &seen;
            async move { seen.store(count, Ordering::SeqCst) }
        })
        .await;

    assert!(out.is_error());
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn fail_if_async_checks_predicate() {
    let taken = ErrorOr::ok("alice")
        .fail_if_async(
            |name| {
                let exists = *name == "alice";
                async move { exists }
            },
            Error::conflict("User.Duplicate", "Username taken"),
        )
        .await;
    assert_eq!(taken.first_error().code(), "User.Duplicate");

    let free = ErrorOr::ok("bob")
        .fail_if_async(|name| {
            let exists = *name == "alice";
            async move { exists }
        }, Error::default())
        .await;
    assert_eq!(free, ErrorOr::ok("bob"));
}

#[tokio::test]
async fn fail_if_with_async_builds_error_from_value() {
    let out = ErrorOr::ok(12u32)
        .fail_if_with_async(
            |n| {
                let big = *n > 10;
                async move { big }
            },
            |n| {
                let n = *n;
                async move { Error::validation("n", format!("{n} is greater than 10")) }
            },
        )
        .await;

    assert_eq!(out.first_error().description(), "12 is greater than 10");
}

#[tokio::test]
async fn fold_async_runs_one_branch() {
    let ok = ErrorOr::ok(3)
        .fold_async(|n| async move { n * 2 }, |_| async { -1 })
        .await;
    let failed = ErrorOr::<i32>::from_error(Error::default())
        .fold_async(|n| async move { n * 2 }, |errors| async move { -(errors.len() as i32) })
        .await;

    assert_eq!((ok, failed), (6, -1));

    let errors = vec![Error::gone("first", "x"), Error::gone("second", "y")];
    let code = ErrorOr::<i32>::from_errors(errors)
        .fold_first_async(
            |_| async { String::new() },
            |first| async move { first.code().to_string() },
        )
        .await;
    assert_eq!(code, "first");
}

#[tokio::test]
async fn switch_async_runs_side_effects() {
    let value_calls = AtomicU32::new(0);
    let error_calls = AtomicU32::new(0);

    ErrorOr::ok(1)
        .switch_async(
            |_| {
                value_calls.fetch_add(1, Ordering::SeqCst);
                async {}
            },
            |_| {
                error_calls.fetch_add(1, Ordering::SeqCst);
                async {}
            },
        )
        .await;

    missing()
        .switch_first_async(
            |_| {
                value_calls.fetch_add(1, Ordering::SeqCst);
                async {}
            },
            |first| {
                assert_eq!(first.code(), "User.NotFound");
                error_calls.fetch_add(1, Ordering::SeqCst);
                async {}
            },
        )
        .await;

    assert_eq!(value_calls.load(Ordering::SeqCst), 1);
    assert_eq!(error_calls.load(Ordering::SeqCst), 1);
}
