use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use vows_support::{AssertionError, AssertionHandler, AssertionResolver};

#[test]
fn test_unbound_name_raises_not_found_with_name() {
    let resolver: AssertionResolver = AssertionResolver::new();

    let err = resolver.resolve("does_not_exist").err().unwrap();

    assert_eq!(err.name(), "does_not_exist");
}

#[test]
fn test_bound_handler_resolves_without_side_effects() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let handler: AssertionHandler = Arc::new(move |_: &Value, _: &[Value]| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    let mut resolver = AssertionResolver::new();
    resolver.bind("to_be_counted", Arc::clone(&handler));

    let first = Arc::clone(resolver.resolve("to_be_counted").unwrap());
    let second = Arc::clone(resolver.resolve("to_be_counted").unwrap());

    assert!(Arc::ptr_eq(&first, &handler));
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    first(&json!(1), &[]).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_extension_without_touching_resolver() {
    let mut resolver = AssertionResolver::with_builtins();
    assert!(!resolver.is_bound("to_be_positive"));

    resolver.bind_fn("to_be_positive", |topic, _| {
        if topic.as_f64().is_some_and(|n| n > 0.0) {
            Ok(())
        } else {
            Err(AssertionError::failed("to_be_positive", format!("{topic} is not positive")))
        }
    });

    assert!(resolver.check("to_be_positive", &json!(3.5), &[]).is_ok());
    assert!(resolver.check("to_be_positive", &json!(-1), &[]).is_err());
    assert!(resolver.check("to_equal", &json!("x"), &[json!("x")]).is_ok());
}

#[test]
fn test_missing_builtin_surfaces_through_check() {
    let resolver = AssertionResolver::with_builtins();

    let err = resolver.check("to_be_shiny", &json!(null), &[]).unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "assertion not found: to_be_shiny");
}

#[test]
fn test_resolver_is_shareable_across_threads() {
    let resolver = Arc::new(AssertionResolver::with_builtins());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let resolver = Arc::clone(&resolver);
            std::thread::spawn(move || resolver.check("to_equal", &json!(i), &[json!(i)]))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
}
