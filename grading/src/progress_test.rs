use super::*;
use crate::lifecycle::ViewState;
use crate::model::{PendingTask, RecentDocument};
use crate::support_test::server_error;

fn report() -> ProgressReport {
    ProgressReport {
        student_name: Some("Ada Lovelace".to_owned()),
        email: Some("ada@uni.edu".to_owned()),
        total_documents: 4,
        evaluated_documents: 3,
        total_tasks: 3,
        completed_tasks: 2,
        average_score: Some(72.456),
        recent_documents: vec![RecentDocument {
            file_name: "essay.pdf".to_owned(),
            evaluated: true,
            score: Some(88.0),
        }],
        pending_tasks: vec![PendingTask {
            title: "Upload appendix".to_owned(),
            due_date: None,
        }],
    }
}

// =============================================================
// ProgressReport derivations
// =============================================================

#[test]
fn labels_format_average_and_tasks() {
    let r = report();
    assert_eq!(r.average_label(), "72.5%");
    assert_eq!(r.tasks_label(), "2/3");
}

#[test]
fn missing_average_renders_zero() {
    let r = ProgressReport::default();
    assert_eq!(r.average_label(), "0.0%");
}

#[test]
fn task_completion_percent_rounds() {
    let r = report();
    assert_eq!(r.task_completion_percent(), Some(67));

    let done = ProgressReport {
        total_tasks: 4,
        completed_tasks: 4,
        ..ProgressReport::default()
    };
    assert_eq!(done.task_completion_percent(), Some(100));
}

#[test]
fn task_completion_hidden_without_tasks() {
    assert_eq!(ProgressReport::default().task_completion_percent(), None);
}

#[test]
fn empty_activity_requires_no_documents_and_no_tasks() {
    assert!(!ProgressReport::default().has_activity());
    let docs_only = ProgressReport {
        total_documents: 1,
        ..ProgressReport::default()
    };
    assert!(docs_only.has_activity());
    let tasks_only = ProgressReport {
        total_tasks: 1,
        ..ProgressReport::default()
    };
    assert!(tasks_only.has_activity());
}

// =============================================================
// StudentProgress lifecycle
// =============================================================

fn fetched(widget: &mut StudentProgress, result: Result<ProgressReport, ApiError>) {
    let (token, _) = widget.begin_fetch().unwrap();
    assert!(widget.settle(token, result));
}

#[test]
fn missing_user_id_never_fetches() {
    let mut widget = StudentProgress::new(None, Some("Fallback".to_owned()));
    assert!(widget.begin_fetch().is_none());
    assert_eq!(widget.view.state(), &ViewState::Idle);
}

#[test]
fn blank_user_id_is_treated_as_missing() {
    let mut widget = StudentProgress::new(Some("  ".to_owned()), None);
    assert!(widget.begin_fetch().is_none());
}

#[test]
fn begin_fetch_targets_selected_user() {
    let mut widget = StudentProgress::new(Some("17".to_owned()), None);
    let (token, user) = widget.begin_fetch().unwrap();
    assert_eq!(user, "17");
    assert!(widget.view.is_loading());

    widget.settle(token, Ok(report()));
    assert_eq!(widget.view.ready().map(|r| r.total_documents), Some(4));
}

#[test]
fn server_name_preferred_over_fallback() {
    let mut widget = StudentProgress::new(Some("17".to_owned()), Some("A. L.".to_owned()));
    assert_eq!(widget.display_name(), "A. L.");

    fetched(&mut widget, Ok(report()));
    assert_eq!(widget.display_name(), "Ada Lovelace");
}

#[test]
fn fallback_name_used_when_server_omits_name() {
    let mut widget = StudentProgress::new(Some("17".to_owned()), Some("A. L.".to_owned()));
    fetched(&mut widget, Ok(ProgressReport::default()));
    assert_eq!(widget.display_name(), "A. L.");

    let mut anonymous = StudentProgress::new(Some("17".to_owned()), None);
    fetched(&mut anonymous, Ok(ProgressReport::default()));
    assert_eq!(anonymous.display_name(), "Student");
}

#[test]
fn failure_then_retry_recovers() {
    let mut widget = StudentProgress::new(Some("17".to_owned()), None);

    fetched(&mut widget, Err(server_error("Student not found")));
    assert_eq!(widget.view.error(), Some("Student not found"));

    fetched(&mut widget, Ok(report()));
    assert_eq!(widget.view.error(), None);
    assert!(widget.view.ready().is_some());
}

#[test]
fn failure_without_message_uses_fallback() {
    let mut widget = StudentProgress::new(Some("17".to_owned()), None);
    fetched(&mut widget, Err(ApiError::Network("offline".to_owned())));
    assert_eq!(widget.view.error(), Some("Failed to load student progress"));
}

#[test]
fn changing_user_requests_refetch_and_clearing_goes_idle() {
    let mut widget = StudentProgress::new(Some("1".to_owned()), None);
    assert!(!widget.set_user_id(Some("1".to_owned())));
    assert!(widget.set_user_id(Some("2".to_owned())));

    let (token, user) = widget.begin_fetch().unwrap();
    assert_eq!(user, "2");
    assert!(!widget.set_user_id(None));
    assert!(widget.view.is_idle());
    assert!(!widget.settle(token, Ok(report())));
}
