//! Submission tracker: searchable, status-filtered table of all submissions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The status filter and the container's refresh trigger drive refetches;
//! the search box only filters locally. Row actions never mutate anything
//! here, they hand the full submission to the container.

use leptos::prelude::*;

use grading::dates::format_date;
use grading::tracker::SubmissionTracker as TrackerModel;
use grading::{StatusBadge, StatusFilter, Submission, ViewState};

use crate::components::stat_tile::StatTile;
use crate::net::api::HttpGradingApi;
use crate::util::requests::fetch_submissions;
use crate::util::task::spawn_ui;

/// What the table area should show for the current tracker state.
enum TrackerBody {
    Loading,
    Error(String),
    Rows { rows: Vec<Submission>, refreshing: bool },
}

impl TrackerBody {
    fn of(tracker: &TrackerModel) -> Self {
        match tracker.view.state() {
            ViewState::Idle | ViewState::Loading { previous: None } => Self::Loading,
            ViewState::Error(message) => Self::Error(message.clone()),
            ViewState::Ready(_) | ViewState::Loading { previous: Some(_) } => Self::Rows {
                rows: tracker.visible().into_iter().cloned().collect(),
                refreshing: tracker.view.is_loading(),
            },
        }
    }
}

/// Professor-facing submissions table with stats, search, and status filter.
#[component]
pub fn SubmissionTracker(
    #[prop(optional)] on_view_report: Option<Callback<Submission>>,
    #[prop(optional)] on_override_score: Option<Callback<Submission>>,
    #[prop(optional, into)] refresh_trigger: Option<Signal<u64>>,
) -> impl IntoView {
    let api = expect_context::<HttpGradingApi>();
    let tracker = RwSignal::new(TrackerModel::new());

    let fetch = Callback::new(move |()| {
        if let Some(task) = fetch_submissions(tracker, api.clone()) {
            spawn_ui(task);
        }
    });

    // Refetch on mount, on filter change, and when the container bumps the trigger.
    let status_filter = Memo::new(move |_| tracker.with(TrackerModel::status_filter));
    Effect::new(move || {
        status_filter.track();
        if let Some(trigger) = refresh_trigger {
            trigger.track();
        }
        fetch.run(());
    });

    let stats = move || tracker.with(TrackerModel::stats);
    let is_loading = move || tracker.with(|t| t.view.is_loading());

    view! {
        <section class="submission-tracker">
            <header class="submission-tracker__header">
                <h2>"Submissions"</h2>
                <button
                    class="btn submission-tracker__refresh"
                    on:click=move |_| fetch.run(())
                    disabled=is_loading
                >
                    {move || if is_loading() { "Refreshing..." } else { "Refresh" }}
                </button>
            </header>

            <div class="submission-tracker__stats">
                <StatTile label="Total" value=Signal::derive(move || stats().total.to_string())/>
                <StatTile label="Evaluated" value=Signal::derive(move || stats().evaluated.to_string())/>
                <StatTile label="Pending" value=Signal::derive(move || stats().pending.to_string())/>
                <StatTile label="Average Score" value=Signal::derive(move || stats().average_label())/>
            </div>

            <div class="submission-tracker__controls">
                <input
                    class="submission-tracker__search"
                    type="search"
                    placeholder="Search by file name, student, or email"
                    prop:value=move || tracker.with(|t| t.search_query().to_owned())
                    on:input=move |ev| tracker.update(|t| t.set_search_query(event_target_value(&ev)))
                />
                <select
                    class="submission-tracker__filter"
                    on:change=move |ev| {
                        let filter = StatusFilter::from_query(&event_target_value(&ev));
                        tracker.update(|t| {
                            t.set_status_filter(filter);
                        });
                    }
                >
                    {StatusFilter::ALL
                        .into_iter()
                        .map(|f| {
                            view! {
                                <option
                                    value=f.as_query()
                                    selected=move || tracker.with(TrackerModel::status_filter) == f
                                >
                                    {f.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            {move || match tracker.with(TrackerBody::of) {
                TrackerBody::Loading => {
                    view! { <p class="submission-tracker__loading">"Loading submissions..."</p> }.into_any()
                }
                TrackerBody::Error(message) => {
                    view! {
                        <div class="submission-tracker__error">
                            <p>{message}</p>
                            <button class="btn" on:click=move |_| fetch.run(())>"Retry"</button>
                        </div>
                    }
                        .into_any()
                }
                TrackerBody::Rows { rows, .. } if rows.is_empty() => {
                    view! { <p class="submission-tracker__empty">"No submissions found"</p> }.into_any()
                }
                TrackerBody::Rows { rows, refreshing } => {
                    view! {
                        <table class="submission-tracker__table" class:submission-tracker__table--stale=refreshing>
                            <thead>
                                <tr>
                                    <th>"Document"</th>
                                    <th>"Student"</th>
                                    <th>"Uploaded"</th>
                                    <th>"Status"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|submission| {
                                        view! {
                                            <SubmissionRow
                                                submission=submission
                                                on_view_report=on_view_report
                                                on_override_score=on_override_score
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn SubmissionRow(
    submission: Submission,
    on_view_report: Option<Callback<Submission>>,
    on_override_score: Option<Callback<Submission>>,
) -> impl IntoView {
    let badge = StatusBadge::for_submission(&submission);
    // Row actions only make sense once a score exists.
    let actionable = submission.evaluated;
    let uploaded = submission
        .uploaded_at
        .as_deref()
        .map_or_else(|| "—".to_owned(), format_date);
    let student = submission.uploader.display_name();
    let email = submission.uploader.email.clone().unwrap_or_default();
    let file_name = submission.file_name.clone();
    let for_report = submission.clone();
    let for_override = submission;

    view! {
        <tr class="submission-row">
            <td class="submission-row__file">{file_name}</td>
            <td class="submission-row__student">
                <span class="submission-row__name">{student}</span>
                <span class="submission-row__email">{email}</span>
            </td>
            <td class="submission-row__uploaded">{uploaded}</td>
            <td>
                <span class=badge.css_class()>{badge.label()}</span>
            </td>
            <td class="submission-row__actions">
                <button
                    class="btn btn--small"
                    disabled=!actionable
                    title="View student report"
                    on:click=move |_| {
                        if let Some(cb) = on_view_report {
                            cb.run(for_report.clone());
                        }
                    }
                >
                    "View Report"
                </button>
                <button
                    class="btn btn--small btn--primary"
                    disabled=!actionable
                    title="Override compliance score"
                    on:click=move |_| {
                        if let Some(cb) = on_override_score {
                            cb.run(for_override.clone());
                        }
                    }
                >
                    "Override"
                </button>
            </td>
        </tr>
    }
}
