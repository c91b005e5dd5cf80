use super::*;

// =============================================================
// Transitions
// =============================================================

#[test]
fn new_view_is_idle() {
    let view = AsyncView::<u32>::new();
    assert!(view.is_idle());
    assert_eq!(view.data(), None);
    assert_eq!(view.error(), None);
}

#[test]
fn begin_enters_loading_without_data() {
    let mut view = AsyncView::<u32>::new();
    view.begin();
    assert_eq!(view.state(), &ViewState::Loading { previous: None });
}

#[test]
fn success_enters_ready() {
    let mut view = AsyncView::new();
    let token = view.begin();
    assert!(view.settle(token, Ok(5)));
    assert_eq!(view.state(), &ViewState::Ready(5));
    assert_eq!(view.ready(), Some(&5));
}

#[test]
fn failure_enters_error() {
    let mut view = AsyncView::<u32>::new();
    let token = view.begin();
    assert!(view.settle(token, Err("boom".to_owned())));
    assert_eq!(view.error(), Some("boom"));
    assert_eq!(view.data(), None);
}

#[test]
fn retry_from_error_clears_message_and_recovers() {
    let mut view = AsyncView::new();
    let first = view.begin();
    view.settle(first, Err("down".to_owned()));

    let retry = view.begin();
    assert_eq!(view.state(), &ViewState::Loading { previous: None });
    view.settle(retry, Ok(9));
    assert_eq!(view.state(), &ViewState::Ready(9));
}

#[test]
fn refresh_retains_previous_until_result_lands() {
    let mut view = AsyncView::new();
    let first = view.begin();
    view.settle(first, Ok(vec![1, 2]));

    let refresh = view.begin();
    assert!(view.is_loading());
    assert_eq!(view.data(), Some(&vec![1, 2]));
    assert_eq!(view.ready(), None);

    view.settle(refresh, Ok(vec![3]));
    assert_eq!(view.data(), Some(&vec![3]));
}

#[test]
fn failed_refresh_drops_previous_data() {
    let mut view = AsyncView::new();
    let first = view.begin();
    view.settle(first, Ok(1));
    let refresh = view.begin();
    view.settle(refresh, Err("gone".to_owned()));
    assert_eq!(view.data(), None);
    assert_eq!(view.error(), Some("gone"));
}

// =============================================================
// Stale responses
// =============================================================

#[test]
fn stale_response_is_discarded() {
    let mut view = AsyncView::new();
    let slow = view.begin();
    let fast = view.begin();

    assert!(view.settle(fast, Ok("new")));
    assert!(!view.settle(slow, Ok("old")));
    assert_eq!(view.ready(), Some(&"new"));
}

#[test]
fn stale_error_does_not_clobber_loading() {
    let mut view = AsyncView::<u32>::new();
    let slow = view.begin();
    let _fast = view.begin();
    assert!(!view.settle(slow, Err("late failure".to_owned())));
    assert!(view.is_loading());
}

#[test]
fn reset_invalidates_in_flight_request() {
    let mut view = AsyncView::new();
    let token = view.begin();
    view.reset();
    assert!(!view.settle(token, Ok(1)));
    assert!(view.is_idle());
}
