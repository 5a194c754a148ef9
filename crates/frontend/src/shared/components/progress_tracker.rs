//! Vertical progress tracker for status histories.

use contracts::shared::progress::ProgressStage;
use leptos::prelude::*;

#[component]
pub fn ProgressTracker(#[prop(into)] stages: Signal<Vec<ProgressStage>>) -> impl IntoView {
    view! {
        <ol class="progress-tracker">
            <For
                each=move || stages.get()
                key=|stage| stage.id.clone()
                children=move |stage: ProgressStage| {
                    let class = format!(
                        "progress-tracker__stage progress-tracker__stage--{}",
                        stage.status.css_modifier()
                    );
                    view! {
                        <li class=class class:progress-tracker__stage--synthetic=stage.synthetic>
                            <span class="progress-tracker__marker"></span>
                            <div class="progress-tracker__body">
                                <div class="progress-tracker__title">{stage.title}</div>
                                <div class="progress-tracker__subtitle">{stage.subtitle}</div>
                                {stage.user.map(|user| view! {
                                    <div class="progress-tracker__user">{user}</div>
                                })}
                                {stage.note.map(|note| view! {
                                    <div class="progress-tracker__note">{note}</div>
                                })}
                            </div>
                        </li>
                    }
                }
            />
        </ol>
    }
}
