use error_trail::wrap::UNKNOWN_ERROR_MESSAGE;
use error_trail::{
    catch_outcome, err, ok, with_result, with_result_in, ChainedError, Outcome, UnknownError,
};
use std::cell::Cell;
use std::convert::Infallible;
use std::error::Error;
use std::io;
use std::panic;

#[test]
fn ok_return_becomes_success() {
    let wrapped = with_result(|n: u32| Ok::<_, io::Error>(n + 1));

    assert_eq!(wrapped(1), ok(2));
}

#[test]
fn err_return_becomes_failure_with_same_error() {
    let wrapped = with_result(|name: &str| {
        Err::<(), _>(io::Error::new(io::ErrorKind::NotFound, format!("{name} not found")))
    });

    let failed = wrapped("user");
    let chain = failed.error().unwrap();
    assert_eq!(chain.message(), "user not found");
    assert_eq!(chain.downcast_ref::<io::Error>().unwrap().kind(), io::ErrorKind::NotFound);
}

#[test]
fn string_panic_is_coerced_to_unknown_error() {
    let wrapped = with_result(|_: ()| -> Result<(), Infallible> { panic!("plain string") });

    let failed = wrapped(());
    let chain = failed.error().unwrap();
    assert_eq!(chain.message(), UNKNOWN_ERROR_MESSAGE);
    assert_eq!(chain.name(), "UnknownError");
    assert!(chain.downcast_ref::<UnknownError>().is_some());
    assert!(!chain.to_string().contains("plain string"));
}

#[test]
fn arbitrary_panic_payload_is_coerced() {
    let wrapped = with_result(|code: i32| -> Result<(), Infallible> { panic::panic_any(code) });

    assert_eq!(wrapped(7).error().unwrap().message(), "Unknown error");
}

#[test]
fn unwrap_panic_recovers_the_original_chain() {
    let inner = |raw: &str| -> Outcome<u8> {
        match raw.parse::<u8>() {
            Ok(v) => ok(v),
            Err(e) => err(e),
        }
    };
    let wrapped = with_result(|raw: &str| Ok::<_, Infallible>(inner(raw).unwrap() * 2));

    assert_eq!(wrapped("4"), ok(8));

    let failed = wrapped("four");
    let chain = failed.error().unwrap();
    assert_eq!(chain.name(), "ParseIntError");
    assert_eq!(chain.cause_count(), 1);
    assert_eq!(chain.checkpoints().count(), 1);
    assert!(chain.downcast_ref::<UnknownError>().is_none());
}

#[test]
fn lookalike_unwrap_message_is_still_unknown() {
    let wrapped = with_result(|_: ()| -> Result<(), Infallible> {
        panic!("called `Outcome::unwrap()` on a failure: {}", "forged")
    });

    let failed = wrapped(());
    let chain = failed.error().unwrap();
    assert_eq!(chain.message(), "Unknown error");
    assert!(chain.downcast_ref::<UnknownError>().is_some());
}

#[test]
fn boxed_error_panic_keeps_its_message() {
    let wrapped = with_result(|_: ()| -> Result<(), Infallible> {
        let error: Box<dyn Error + Send + Sync> = Box::new(io::Error::other("boxed cause"));
        panic::panic_any(error)
    });

    let failed = wrapped(());
    assert_eq!(failed.error().unwrap().message(), "boxed cause");
}

#[test]
fn tuple_arguments_pass_through() {
    let divide = with_result(|(a, b): (i64, i64)| {
        a.checked_div(b).ok_or_else(|| io::Error::other("division by zero"))
    });

    assert_eq!(divide((9, 3)), ok(3));
    assert_eq!(divide((9, 0)).error().unwrap().message(), "division by zero");
}

#[test]
fn outcome_return_passes_through_unchanged() {
    let wrapped = with_result(|flag: bool| {
        if flag {
            ok(1)
        } else {
            err(io::Error::other("declined"))
        }
    });

    assert_eq!(wrapped(true), ok(1));
    let failed = wrapped(false);
    assert_eq!(failed.error().unwrap().checkpoints().count(), 0);
}

#[test]
fn wrapped_function_can_be_called_repeatedly() {
    let calls = Cell::new(0);
    let wrapped = with_result(|_: ()| {
        calls.set(calls.get() + 1);
        Ok::<_, Infallible>(calls.get())
    });

    assert_eq!(wrapped(()), ok(1));
    assert_eq!(wrapped(()), ok(2));
    assert_eq!(calls.get(), 2);
}

#[test]
fn context_is_passed_to_every_call() {
    struct Prefix(&'static str);

    let greet = with_result_in(Prefix("hello"), |prefix, name: &str| {
        if name.is_empty() {
            Err(io::Error::other("empty name"))
        } else {
            Ok(format!("{} {}", prefix.0, name))
        }
    });

    assert_eq!(greet("ada"), ok("hello ada".to_string()));
    assert!(greet("").is_failure());
}

#[test]
fn context_panics_are_caught_too() {
    let guarded = with_result_in(vec![1, 2, 3], |values, index: usize| {
        Ok::<_, Infallible>(values[index])
    });

    assert_eq!(guarded(1), ok(2));
    assert_eq!(guarded(10).error().unwrap().message(), "Unknown error");
}

#[test]
fn catch_outcome_runs_once() {
    let outcome = catch_outcome(|| Err::<(), _>(io::Error::other("single shot")));

    assert_eq!(outcome.error().unwrap().message(), "single shot");
}

#[test]
fn unknown_error_displays_fixed_message() {
    let chain = ChainedError::from_error(UnknownError);

    assert_eq!(UnknownError.to_string(), "Unknown error");
    assert_eq!(chain.to_string(), "Unknown error");
}
