//! Fetch and save sequences shared by the dashboard widgets.
//!
//! DESIGN
//! ======
//! Each function applies the synchronous half immediately (entering
//! `Loading` or the submitting phase) and hands back the network half as a
//! future for `spawn_ui`. `None` means nothing was sent. Responses settle
//! through `try_update`, so a widget unmounted mid-request is left alone.

#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;

use std::future::Future;

use leptos::prelude::*;

use grading::{GradingApi, ScoreOverride, StudentProgress, SubmissionTracker};

/// Begin a submissions fetch for the tracker's current filter.
pub fn fetch_submissions<A>(tracker: RwSignal<SubmissionTracker>, api: A) -> Option<impl Future<Output = ()>>
where
    A: GradingApi + 'static,
{
    let (token, filter) = tracker.try_update(SubmissionTracker::begin_fetch)?;
    Some(async move {
        let result = api.get_all_submissions(filter).await;
        tracker.try_update(|t| t.settle(token, result));
    })
}

/// Begin a progress fetch for the selected student, if any.
pub fn fetch_progress<A>(progress: RwSignal<StudentProgress>, api: A) -> Option<impl Future<Output = ()>>
where
    A: GradingApi + 'static,
{
    let (token, user_id) = progress.try_update(StudentProgress::begin_fetch).flatten()?;
    Some(async move {
        let result = api.get_student_progress(&user_id).await;
        progress.try_update(|p| p.settle(token, result));
    })
}

/// Create progress state for a freshly mounted widget. A present id starts
/// in `Loading` with its fetch returned; an absent one stays idle.
pub fn open_progress<A>(
    user_id: Option<String>,
    fallback_name: Option<String>,
    api: A,
) -> (RwSignal<StudentProgress>, Option<impl Future<Output = ()>>)
where
    A: GradingApi + 'static,
{
    let progress = RwSignal::new(StudentProgress::new(user_id, fallback_name));
    let initial = fetch_progress(progress, api);
    (progress, initial)
}

/// Validate the draft and begin saving it.
///
/// On success `on_success` runs before `on_close`. If the dialog was torn
/// down while the save was in flight, `on_success` still runs so the
/// container can refresh.
pub fn submit_override<A, S, C>(
    form: RwSignal<ScoreOverride>,
    api: A,
    on_success: S,
    on_close: C,
) -> Option<impl Future<Output = ()>>
where
    A: GradingApi + 'static,
    S: FnOnce() + 'static,
    C: FnOnce() + 'static,
{
    let request = form.try_update(ScoreOverride::begin_submit).flatten()?;
    Some(async move {
        let result = api
            .override_score(request.document_id, request.score, &request.notes)
            .await;
        let saved = result.is_ok();
        match form.try_update(|f| f.settle(result)) {
            Some(outcome) => outcome.dispatch(on_success, on_close),
            None if saved => on_success(),
            None => log::debug!("override for document {} settled after dialog closed", request.document_id),
        }
    })
}

/// Close the override dialog unless a save is in flight. Returns whether
/// `on_close` ran.
pub fn close_override(form: RwSignal<ScoreOverride>, on_close: impl FnOnce()) -> bool {
    if !form.try_with_untracked(ScoreOverride::can_close).unwrap_or(true) {
        return false;
    }
    on_close();
    true
}
