//! Student progress report with retry and refresh.

use leptos::prelude::*;

use grading::dates::format_due_date;
use grading::{ProgressReport, ScoreBand, ViewState};

use crate::components::stat_tile::StatTile;
use crate::net::api::HttpGradingApi;
use crate::util::requests::{fetch_progress, open_progress};
use crate::util::task::spawn_ui;

const EMPTY_ACTIVITY_MESSAGE: &str = "No activity yet. This student has not uploaded documents or been assigned tasks.";

/// Read-only progress report for one student.
///
/// Without a `user_id` nothing is fetched and the widget stays idle.
#[component]
pub fn StudentProgress(
    #[prop(optional, into)] user_id: MaybeProp<String>,
    #[prop(optional, into)] fallback_name: MaybeProp<String>,
    #[prop(optional)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    let api = expect_context::<HttpGradingApi>();
    // A present id renders `Loading` from the first pass, server included.
    let (progress, initial) = open_progress(user_id.get_untracked(), fallback_name.get_untracked(), api.clone());
    if let Some(task) = initial {
        spawn_ui(task);
    }

    let fetch = Callback::new(move |()| {
        if let Some(task) = fetch_progress(progress, api.clone()) {
            spawn_ui(task);
        }
    });

    Effect::new(move || {
        let id = user_id.get();
        if progress.try_update(|p| p.set_user_id(id)).unwrap_or(false) {
            fetch.run(());
        }
    });
    Effect::new(move || {
        let name = fallback_name.get();
        progress.update(|p| p.set_fallback_name(name));
    });

    let close = move |_| {
        if let Some(cb) = on_close {
            cb.run(());
        }
    };

    move || {
        let (state, name) = progress.with(|p| (p.view.state().clone(), p.display_name()));
        match state {
            ViewState::Idle => view! {
                <section class="student-progress student-progress--idle">
                    <p>"Select a student to view their progress."</p>
                </section>
            }
            .into_any(),
            ViewState::Loading { previous: None } => view! {
                <section class="student-progress student-progress--loading">
                    <p>"Loading progress..."</p>
                </section>
            }
            .into_any(),
            ViewState::Error(message) => view! {
                <section class="student-progress student-progress--error">
                    <p class="student-progress__error">{message}</p>
                    <div class="student-progress__actions">
                        <button class="btn" on:click=close>"Back"</button>
                        <button class="btn btn--primary" on:click=move |_| fetch.run(())>"Retry"</button>
                    </div>
                </section>
            }
            .into_any(),
            ViewState::Ready(report) => render_report(report, name, false, fetch, on_close).into_any(),
            ViewState::Loading { previous: Some(report) } => render_report(report, name, true, fetch, on_close).into_any(),
        }
    }
}

fn render_report(
    report: ProgressReport,
    name: String,
    refreshing: bool,
    on_refresh: Callback<()>,
    on_close: Option<Callback<()>>,
) -> impl IntoView {
    let email = report.email.clone().unwrap_or_default();
    let body = if report.has_activity() {
        render_overview(report).into_any()
    } else {
        view! { <p class="student-progress__empty">{EMPTY_ACTIVITY_MESSAGE}</p> }.into_any()
    };

    view! {
        <section class="student-progress" class:student-progress--refreshing=refreshing>
            <header class="student-progress__header">
                <div class="student-progress__identity">
                    <h2 class="student-progress__name">{name}</h2>
                    <span class="student-progress__email">{email}</span>
                </div>
                <button class="btn" disabled=refreshing on:click=move |_| on_refresh.run(())>
                    {if refreshing { "Refreshing..." } else { "Refresh" }}
                </button>
                {on_close
                    .map(|cb| {
                        view! {
                            <button class="btn" on:click=move |_| cb.run(())>
                                "Close"
                            </button>
                        }
                    })}
            </header>
            {body}
        </section>
    }
}

fn render_overview(report: ProgressReport) -> impl IntoView {
    let completion = report.task_completion_percent();
    let average = report.average_label();
    let tasks = report.tasks_label();

    view! {
        <div class="student-progress__tiles">
            <StatTile label="Documents" value=report.total_documents.to_string()/>
            <StatTile label="Evaluated" value=report.evaluated_documents.to_string()/>
            <StatTile label="Average Score" value=average/>
            <StatTile label="Tasks Completed" value=tasks/>
        </div>

        {completion
            .map(|pct| {
                view! {
                    <div class="student-progress__completion">
                        <span class="student-progress__completion-label">
                            {format!("Task completion: {pct}%")}
                        </span>
                        <div class="progress-bar">
                            <div class="progress-bar__fill" style=format!("width: {pct}%")></div>
                        </div>
                    </div>
                }
            })}

        <div class="student-progress__section">
            <h3>"Recent Documents"</h3>
            <ul class="student-progress__documents">
                {report
                    .recent_documents
                    .into_iter()
                    .map(|doc| {
                        let score = match (doc.evaluated, doc.score) {
                            (true, Some(score)) => view! {
                                <span class=format!("score {}", ScoreBand::of(score).css_class())>
                                    {format!("{score:.0}%")}
                                </span>
                            }
                            .into_any(),
                            _ => view! { <span class="badge badge--pending">"Pending"</span> }.into_any(),
                        };
                        view! {
                            <li class="student-progress__document">
                                <span class="student-progress__document-name">{doc.file_name}</span>
                                {score}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>

        <div class="student-progress__section">
            <h3>"Pending Tasks"</h3>
            <ul class="student-progress__tasks">
                {report
                    .pending_tasks
                    .into_iter()
                    .map(|task| {
                        let due = format_due_date(task.due_date.as_deref());
                        view! {
                            <li class="student-progress__task">
                                <span class="student-progress__task-title">{task.title}</span>
                                <span class="student-progress__task-due">{due}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
