use super::*;
use crate::model::Uploader;
use crate::score::StatusBadge;
use crate::support_test::{server_error, submission};

fn with_uploader(mut sub: Submission, first: &str, last: &str, email: &str) -> Submission {
    sub.uploader = Uploader {
        id: None,
        first_name: Some(first.to_owned()),
        last_name: Some(last.to_owned()),
        username: None,
        email: Some(email.to_owned()),
    };
    sub
}

fn loaded(list: Vec<Submission>) -> SubmissionTracker {
    let mut tracker = SubmissionTracker::new();
    let (token, _) = tracker.begin_fetch();
    tracker.settle(token, Ok(list));
    tracker
}

// =============================================================
// SubmissionStats
// =============================================================

#[test]
fn stats_for_empty_list_are_zero() {
    let stats = SubmissionStats::compute(&[]);
    assert_eq!(stats, SubmissionStats::default());
    assert_eq!(stats.average_label(), "0.0%");
}

#[test]
fn stats_one_evaluated_one_pending() {
    let list = vec![submission(1, "a.pdf", Some(92.0)), submission(2, "b.pdf", None)];
    let stats = SubmissionStats::compute(&list);
    assert_eq!(stats.total, 2);
    assert_eq!(stats.evaluated, 1);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.average_score, 92.0);

    let badges = list.iter().map(|s| StatusBadge::for_submission(s).label()).collect::<Vec<_>>();
    assert_eq!(badges, vec!["Compliant (92%)", "Pending"]);
}

#[test]
fn stats_average_ignores_pending_items() {
    let list = vec![
        submission(1, "a.pdf", Some(60.0)),
        submission(2, "b.pdf", Some(91.0)),
        submission(3, "c.pdf", None),
        submission(4, "d.pdf", None),
    ];
    let stats = SubmissionStats::compute(&list);
    assert_eq!(stats.evaluated + stats.pending, stats.total);
    assert_eq!(stats.average_score, 75.5);
    assert_eq!(stats.average_label(), "75.5%");
}

#[test]
fn stats_all_pending_average_is_zero() {
    let list = vec![submission(1, "a.pdf", None), submission(2, "b.pdf", None)];
    let stats = SubmissionStats::compute(&list);
    assert_eq!(stats.pending, 2);
    assert_eq!(stats.average_score, 0.0);
}

// =============================================================
// matches_query
// =============================================================

#[test]
fn empty_query_matches_everything() {
    let sub = submission(1, "report.pdf", None);
    assert!(matches_query(&sub, ""));
    assert!(matches_query(&sub, "   "));
}

#[test]
fn query_matches_file_name_case_insensitively() {
    let sub = submission(1, "Final_Report.PDF", None);
    assert!(matches_query(&sub, "final_report"));
    assert!(matches_query(&sub, "REPORT.pdf"));
}

#[test]
fn query_matches_full_name_across_parts() {
    let sub = with_uploader(submission(1, "x.pdf", None), "Alan", "Turing", "alan@bletchley.uk");
    assert!(matches_query(&sub, "alan tur"));
    assert!(matches_query(&sub, "TURING"));
}

#[test]
fn query_matches_email() {
    let sub = with_uploader(submission(1, "x.pdf", None), "Alan", "Turing", "alan@bletchley.uk");
    assert!(matches_query(&sub, "@BLETCHLEY"));
    assert!(!matches_query(&sub, "hopper"));
}

// =============================================================
// SubmissionTracker
// =============================================================

#[test]
fn search_filters_rows_but_not_stats() {
    let mut tracker = loaded(vec![
        with_uploader(submission(1, "essay.pdf", Some(85.0)), "Grace", "Hopper", "grace@navy.mil"),
        with_uploader(submission(2, "lab.pdf", None), "Alan", "Turing", "alan@bletchley.uk"),
    ]);
    tracker.set_search_query("grace");
    let visible = tracker.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 1);
    assert_eq!(tracker.stats().total, 2);
}

#[test]
fn search_with_no_hits_yields_empty_visible_list() {
    let mut tracker = loaded(vec![submission(1, "essay.pdf", None)]);
    tracker.set_search_query("zzz");
    assert!(tracker.visible().is_empty());
    assert!(tracker.view.ready().is_some());
}

#[test]
fn setting_same_filter_does_not_request_refetch() {
    let mut tracker = SubmissionTracker::new();
    assert!(!tracker.set_status_filter(StatusFilter::All));
    assert!(tracker.set_status_filter(StatusFilter::Evaluated));
    assert!(!tracker.set_status_filter(StatusFilter::Evaluated));
}

#[test]
fn begin_fetch_carries_current_filter() {
    let mut tracker = SubmissionTracker::new();
    tracker.set_status_filter(StatusFilter::Evaluated);

    let (token, filter) = tracker.begin_fetch();
    assert_eq!(filter, StatusFilter::Evaluated);
    assert!(tracker.view.is_loading());

    assert!(tracker.settle(token, Ok(vec![submission(1, "a.pdf", Some(70.0))])));
    assert_eq!(tracker.view.ready().map(Vec::len), Some(1));
}

#[test]
fn failure_uses_server_message_or_fallback() {
    let mut tracker = SubmissionTracker::new();

    let (token, _) = tracker.begin_fetch();
    tracker.settle(token, Err(server_error("Database offline")));
    assert_eq!(tracker.view.error(), Some("Database offline"));

    let (token, _) = tracker.begin_fetch();
    tracker.settle(token, Err(ApiError::Network("timeout".to_owned())));
    assert_eq!(tracker.view.error(), Some("Failed to load submissions"));
}

#[test]
fn retry_after_failure_clears_error() {
    let mut tracker = SubmissionTracker::new();
    let (token, _) = tracker.begin_fetch();
    tracker.settle(token, Err(server_error("oops")));
    assert!(tracker.view.error().is_some());

    let (token, filter) = tracker.begin_fetch();
    assert_eq!(filter, StatusFilter::All);
    assert_eq!(tracker.view.error(), None);
    tracker.settle(token, Ok(vec![submission(1, "a.pdf", None)]));
    assert_eq!(tracker.visible().len(), 1);
}

#[test]
fn refresh_keeps_rows_visible_until_settled() {
    let mut tracker = loaded(vec![submission(1, "a.pdf", Some(90.0))]);
    let (token, _) = tracker.begin_fetch();
    assert!(tracker.view.is_loading());
    assert_eq!(tracker.visible().len(), 1);
    assert_eq!(tracker.stats().total, 1);

    tracker.settle(token, Ok(Vec::new()));
    assert!(tracker.visible().is_empty());
}

#[test]
fn filter_change_mid_flight_discards_older_response() {
    let mut tracker = SubmissionTracker::new();
    let (first, _) = tracker.begin_fetch();
    tracker.set_status_filter(StatusFilter::Pending);
    let (second, filter) = tracker.begin_fetch();
    assert_eq!(filter, StatusFilter::Pending);

    assert!(tracker.settle(second, Ok(vec![submission(2, "b.pdf", None)])));
    assert!(!tracker.settle(first, Ok(vec![submission(1, "a.pdf", Some(50.0))])));
    assert_eq!(tracker.visible()[0].id, 2);
}
