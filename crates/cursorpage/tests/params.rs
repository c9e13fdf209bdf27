mod support;

use cursorpage::prelude::*;
use cursorpage::{cursor::encode_cursor_token, query::QueryError, store::MemoryStore};
use support::{expect_page, feed, ids};

///
/// Thread
///
/// Item whose ordering field is unsigned, unlike the plain cursor parameters.
///

#[derive(Clone, Debug, Eq, PartialEq)]
struct Thread {
    id: u64,
}

impl OrderedItem for Thread {
    fn order_value(&self, field: &str) -> Option<CursorValue> {
        (field == "id").then_some(CursorValue::Uint(self.id))
    }
}

const CONFIG: &str = r#"
[defaults]
max_page_size = 6

[collections.notifications]
order_by = "-id"
strict = true

[collections.archive]
order_by = "id"
max_page_size = 3
cursor_format = "token"
"#;

fn config() -> PaginationConfig {
    PaginationConfig::from_toml_str(CONFIG).expect("test config should parse")
}

fn policy(name: &str) -> CollectionPolicy {
    config().policy(name).expect("collection should be configured")
}

#[test]
fn query_params_drive_a_configured_collection() {
    let outcome = paginate_params(
        &feed(),
        [("before", "4"), ("limit", "4")],
        &policy("notifications"),
    )
    .expect("valid parameters should paginate");

    let page = expect_page(outcome);
    assert_eq!(ids(&page), vec![8, 7, 6, 5]);
    assert!(page.has_previous());
    assert!(page.has_next());
}

#[test]
fn missing_limit_uses_collection_maximum() {
    let page = expect_page(
        paginate_params(&feed(), Vec::<(String, String)>::new(), &policy("notifications"))
            .expect("first page should paginate"),
    );

    assert_eq!(ids(&page), vec![14, 13, 12, 11, 10, 9]);
}

#[test]
fn strict_collection_reports_empty_window_as_not_found() {
    let outcome = paginate_params(&feed(), [("after", "0")], &policy("notifications"))
        .expect("strict empty window is not an error");

    assert!(outcome.is_not_found());
}

#[test]
fn rejected_parameters_are_not_found_class_errors() {
    for params in [
        vec![("before", "3"), ("after", "9")],
        vec![("before", "nope")],
        vec![("limit", "0")],
    ] {
        let err = paginate_params(&feed(), params, &policy("notifications"))
            .expect_err("bad parameters must be rejected");
        assert!(err.is_not_found(), "unexpected error: {err}");
    }
}

#[test]
fn token_collection_round_trips_page_cursors() {
    let archive = policy("archive");
    let first = expect_page(
        paginate_params(&feed(), [("limit", "50")], &archive).expect("first page should paginate"),
    );
    assert_eq!(ids(&first), vec![0, 1, 2]);

    let token = encode_cursor_token(first.next_cursor().expect("archive should continue"))
        .expect("cursor should encode");
    let second = expect_page(
        paginate_params(&feed(), [("after", token.as_str())], &archive)
            .expect("token cursor should paginate"),
    );
    assert_eq!(ids(&second), vec![3, 4, 5]);

    let err = paginate_params(&feed(), [("after", "2")], &archive)
        .expect_err("plain id is not a token");
    assert!(matches!(
        err,
        ParamsError::Query(QueryError::InvalidToken { name: "after", .. })
    ));
}

#[test]
fn ad_hoc_ordering_inherits_defaults() {
    let policy = config().default_policy(OrderingSpec::asc("id"));
    assert!(!policy.strict);

    let first = expect_page(
        paginate_params(&feed(), [("category", "7")], &policy).expect("first page should paginate"),
    );
    assert_eq!(ids(&first), vec![0, 1, 2, 3, 4, 5]);

    let tail = expect_page(
        paginate_params(&feed(), [("after", "14")], &policy)
            .expect("lenient empty window should paginate"),
    );
    assert!(tail.is_empty());
    assert!(tail.has_previous());
    assert!(!tail.has_next());
}

#[test]
fn plain_cursors_match_unsigned_ordering_fields() {
    let threads: MemoryStore<Thread> = (0..15_u64).map(|id| Thread { id }).collect();
    let policy = config().default_policy(OrderingSpec::asc("id"));

    let page = expect_page(
        paginate_params(&threads, [("after", "4"), ("limit", "4")], &policy)
            .expect("unsigned store should paginate"),
    );
    let thread_ids: Vec<u64> = page.items().iter().map(|thread| thread.id).collect();
    assert_eq!(thread_ids, vec![5, 6, 7, 8]);
    assert!(page.has_previous());
    assert!(page.has_next());

    let page = expect_page(
        paginate_params(&threads, [("before", "4")], &policy)
            .expect("unsigned store should paginate"),
    );
    let thread_ids: Vec<u64> = page.into_items().into_iter().map(|thread| thread.id).collect();
    assert_eq!(thread_ids, vec![0, 1, 2, 3]);
}
