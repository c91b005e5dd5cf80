use super::*;
use crate::net::types::{ComplianceScore, Uploader};

fn evaluated_submission() -> Submission {
    Submission {
        id: 1,
        file_name: "sample.pdf".to_owned(),
        uploader: Uploader {
            id: Some("42".to_owned()),
            first_name: Some("Ada".to_owned()),
            last_name: Some("Lovelace".to_owned()),
            username: None,
            email: Some("ada@uni.edu".to_owned()),
        },
        uploaded_at: None,
        evaluated: true,
        compliance_score: Some(ComplianceScore {
            overall_score: 70.0,
            notes: None,
        }),
    }
}

#[test]
fn default_state_has_nothing_open() {
    let state = DashboardState::default();
    assert!(state.report_target.is_none());
    assert!(state.override_target.is_none());
    assert_eq!(state.refresh_seq, 0);
}

#[test]
fn open_report_targets_uploader() {
    let mut state = DashboardState::default();
    state.open_report(&evaluated_submission());
    assert_eq!(
        state.report_target,
        Some(ReportTarget {
            user_id: Some("42".to_owned()),
            name: "Ada Lovelace".to_owned(),
        })
    );
    state.close_report();
    assert!(state.report_target.is_none());
}

#[test]
fn open_override_keeps_full_record() {
    let mut state = DashboardState::default();
    state.open_override(evaluated_submission());
    assert_eq!(state.override_target.as_ref().map(|s| s.id), Some(1));
    state.close_override();
    assert!(state.override_target.is_none());
}

#[test]
fn request_refresh_bumps_sequence() {
    let mut state = DashboardState::default();
    state.request_refresh();
    state.request_refresh();
    assert_eq!(state.refresh_seq, 2);
}
