#![cfg(test)]

use std::any::Any;

use regex::Regex;

use super::*;
use crate::{assert_panic_message, assert_panics, ensure, impossible, require};

#[test]
fn test_require_passes_and_fails_by_category() {
    require!(1 < 2);
    require!(1 < 2, "never shown");

    assert_panic_message!(
        {
            require!(1 > 2);
        },
        "precondition violated: 1 > 2"
    );
    assert_panic_message!(
        {
            let port = 99_999;
            require!(port <= 65_535, "port {port} out of range");
        },
        "precondition violated: port 99999 out of range"
    );
}

#[test]
fn test_ensure_passes_and_fails_by_category() {
    ensure!(2 + 2 == 4);

    assert_panic_message!(
        {
            let total = -1;
            ensure!(total >= 0, "total ({total}) must be non-negative");
        },
        "postcondition violated: total (-1) must be non-negative"
    );
}

#[test]
fn test_impossible() {
    assert_panic_message!(
        {
            impossible!();
        },
        "reached a condition declared impossible"
    );
    assert_panic_message!(
        {
            impossible!("variant {} has no mapping", 3);
        },
        "reached a condition declared impossible: variant 3 has no mapping"
    );
}

#[test]
fn test_require_that_returns_value_inline() {
    let retries = require_that(3_u32, |r| *r <= 10, "retries must be at most 10");
    assert_eq!(retries, 3, "require_that should pass the value through on success.");

    assert_panic_message!(
        {
            require_that(11_u32, |r| *r <= 10, "retries must be at most 10");
        },
        "precondition violated: retries must be at most 10"
    );
}

#[test]
fn test_ensure_that_uses_postcondition_category() {
    assert_panic_message!(
        {
            ensure_that(11_u32, |r| *r <= 10, "result out of range");
        },
        "postcondition violated: result out of range"
    );
}

#[test]
fn test_require_instance_of() {
    let boxed: Box<dyn Any> = Box::new("hello".to_string());
    assert_eq!(
        *require_instance_of::<String>(boxed),
        "hello",
        "Downcasting to the actual type should succeed."
    );

    assert_panic_message!(
        {
            let boxed: Box<dyn Any> = Box::new(7_u32);
            require_instance_of::<String>(boxed);
        },
        "is not an instance of"
    );
}

#[test]
fn test_require_not_empty() {
    assert_eq!(
        require_not_empty(vec![1, 2], "ids"),
        vec![1, 2],
        "A non-empty collection should pass through."
    );
    assert_panic_message!(
        {
            require_not_empty(Vec::<u8>::new(), "ids");
        },
        "precondition violated: ids must not be empty"
    );
}

#[test]
fn test_require_not_blank() {
    assert_eq!(require_not_blank("name", "label"), "name");
    assert_panics!(
        {
            require_not_blank("   \t", "label");
        },
        "A whitespace-only string should fail the blank check."
    );
}

#[test]
fn test_require_match() {
    let digits = Regex::new(r"^\d+$").expect("pattern should compile");
    assert_eq!(require_match("123", &digits, "id"), "123");
    assert_panic_message!(
        {
            let digits = Regex::new(r"^\d+$").expect("pattern should compile");
            require_match("12a", &digits, "id");
        },
        "must match"
    );
}

#[test]
fn test_syntactic_validity_checks() {
    assert_eq!(require_uri("https://example.org/a?b=1"), "https://example.org/a?b=1");
    assert_eq!(require_email("dev@example.org"), "dev@example.org");
    assert_eq!(require_hostname("db-1.internal.example.org"), "db-1.internal.example.org");

    assert_panics!(
        {
            require_uri("not a uri");
        },
        "A scheme-less string should fail the URI check."
    );
    assert_panics!(
        {
            require_email("dev@@example.org");
        },
        "A double @ should fail the email check."
    );
    assert_panics!(
        {
            require_hostname("-leading.example.org");
        },
        "A label with a leading hyphen should fail the hostname check."
    );
}
