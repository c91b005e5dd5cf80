//! Dashboard page composing the grading widgets by user role.
//!
//! SYSTEM CONTEXT
//! ==============
//! Professors get the submission tracker, with report and override dialogs
//! opened from its row actions. Students get their own progress report.
//! Widgets own their fetches; this page only wires callbacks between them.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::score_override_modal::ScoreOverrideModal;
use crate::components::student_progress::StudentProgress;
use crate::components::submission_tracker::SubmissionTracker;
use crate::net::types::{Role, Submission, User};
use crate::state::auth::AuthState;
use crate::state::dashboard::DashboardState;

/// Which dashboard layout a user gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Layout {
    Professor,
    Student,
    Unsupported,
}

fn layout_for(role: Role) -> Layout {
    match role {
        Role::Professor => Layout::Professor,
        Role::Student => Layout::Student,
        Role::Unknown => Layout::Unsupported,
    }
}

fn status_message(auth: &AuthState) -> &'static str {
    if auth.loading {
        "Loading..."
    } else {
        "Sign in to view your dashboard."
    }
}

/// Tracker refetch trigger. Memoized so opening or closing a dialog does not
/// notify the tracker; only `request_refresh` does.
fn tracker_refresh_trigger(dashboard: RwSignal<DashboardState>) -> Signal<u64> {
    Memo::new(move |_| dashboard.with(|d| d.refresh_seq)).into()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <Show
            when=move || auth.with(|a| !a.loading && a.user.is_some())
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || auth.with(status_message)}</p>
                    </div>
                }
            }
        >
            {move || {
                auth.get()
                    .user
                    .map(|user| {
                        view! {
                            <div class="dashboard-page">
                                <header class="dashboard-page__header toolbar">
                                    <span class="toolbar__title">"Compliance Dashboard"</span>
                                    <span class="toolbar__spacer"></span>
                                    <span class="toolbar__self">{user.display_name()}</span>
                                </header>
                                {match layout_for(user.role) {
                                    Layout::Professor => view! { <ProfessorDashboard/> }.into_any(),
                                    Layout::Student => view! { <StudentDashboard user=user/> }.into_any(),
                                    Layout::Unsupported => {
                                        view! {
                                            <p class="dashboard-page__notice">
                                                "No dashboard is available for this account."
                                            </p>
                                        }
                                            .into_any()
                                    }
                                }}
                            </div>
                        }
                    })
            }}
        </Show>
    }
}

#[component]
fn ProfessorDashboard() -> impl IntoView {
    let dashboard = RwSignal::new(DashboardState::default());

    let on_view_report = Callback::new(move |submission: Submission| {
        dashboard.update(|d| d.open_report(&submission));
    });
    let on_override_score = Callback::new(move |submission: Submission| {
        dashboard.update(|d| d.open_override(submission));
    });
    let close_report = Callback::new(move |()| dashboard.update(DashboardState::close_report));
    let close_override = Callback::new(move |()| dashboard.update(DashboardState::close_override));
    let override_saved = Callback::new(move |()| dashboard.update(DashboardState::request_refresh));
    let refresh_trigger = tracker_refresh_trigger(dashboard);
    // Memoized so a refresh bump does not remount an open dialog.
    let report_target = Memo::new(move |_| dashboard.with(|d| d.report_target.clone()));
    let override_target = Memo::new(move |_| dashboard.with(|d| d.override_target.clone()));

    view! {
        <div class="dashboard-page__grid">
            <SubmissionTracker
                on_view_report=on_view_report
                on_override_score=on_override_score
                refresh_trigger=refresh_trigger
            />
            {move || {
                report_target
                    .get()
                    .map(|target| {
                        view! {
                            <aside class="dashboard-page__report">
                                <StudentProgress
                                    user_id=target.user_id
                                    fallback_name=target.name
                                    on_close=close_report
                                />
                            </aside>
                        }
                    })
            }}
            {move || {
                override_target
                    .get()
                    .map(|document| {
                        view! {
                            <ScoreOverrideModal
                                document=document
                                on_success=override_saved
                                on_close=close_override
                            />
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn StudentDashboard(user: User) -> impl IntoView {
    let name = user.display_name();
    view! {
        <div class="dashboard-page__grid">
            <StudentProgress user_id=user.id fallback_name=name/>
        </div>
    }
}
