use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::behavior::metrics::{TaskFeed, TaskStatus};
use crate::components::animated_counter::AnimatedCounter;
use crate::config;
use crate::dom;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub visible: bool,
}

/// Live-looking task processor. Ticks only while the benefit is on screen.
#[function_component(TaskDashboard)]
pub fn task_dashboard(props: &DashboardProps) -> Html {
    let feed = use_state(TaskFeed::seeded);

    {
        let feed = feed.clone();
        use_effect_with_deps(
            move |visible: &bool| {
                let interval = visible.then(|| {
                    let mut current = (*feed).clone();
                    Interval::new(config::DASHBOARD_TICK_MS, move || {
                        if current.is_settled() {
                            return;
                        }
                        if current.tick(&mut dom::random) {
                            feed.set(current.clone());
                        }
                    })
                });
                move || drop(interval)
            },
            props.visible,
        );
    }

    html! {
        <div class="dashboard">
            <div class="dashboard-header">
                <div class="dashboard-title">
                    <span class="pulse-dot green"></span>
                    <span>{"Aufgabenverarbeiter"}</span>
                </div>
                <span class="dashboard-tag">{"Echtzeit"}</span>
            </div>

            <div class="dashboard-metrics">
                <div class="metric-card">
                    <div class="metric-label">{"Aufgaben abgeschlossen"}</div>
                    <div class="metric-value">{feed.completed_total()}</div>
                    <div class="metric-delta up">{format!("+{} heute", feed.completed_today())}</div>
                </div>
                <div class="metric-card">
                    <div class="metric-label">{"Erfolgsquote"}</div>
                    <div class="metric-value green">{format!("{}%", feed.success_rate())}</div>
                </div>
            </div>

            <div class="task-list">
                { for feed.tasks().iter().enumerate().map(|(index, task)| {
                    let (dot, label) = match task.status {
                        TaskStatus::Completed => ("status-dot done", "Abgeschlossen"),
                        TaskStatus::Processing => ("status-dot busy", "In Bearbeitung"),
                        TaskStatus::Queued => ("status-dot queued", "Warteschlange"),
                    };
                    html! {
                        <div
                            key={task.id}
                            class={classes!("task-row", props.visible.then(|| "shown"))}
                            style={format!("transition-delay: {}ms;", index * 100)}
                        >
                            <span class={dot}></span>
                            <div class="task-body">
                                <div class="task-name">{task.name}</div>
                                {
                                    if task.status == TaskStatus::Processing {
                                        html! {
                                            <div class="task-bar">
                                                <div class="task-bar-fill" style={format!("width: {:.0}%;", task.progress)}></div>
                                            </div>
                                        }
                                    } else {
                                        html! { <div class="task-status">{label}</div> }
                                    }
                                }
                            </div>
                            { if task.status == TaskStatus::Completed { html! { <span class="task-check">{"✓"}</span> } } else { html! {} } }
                        </div>
                    }
                }) }
            </div>

            <div class="dashboard-footer">
                <span>{"Verfolgungszeitraum"}</span>
                <span class="live-tag red"><span class="pulse-dot red"></span>{"Aktiv"}</span>
            </div>
        </div>
    }
}

const COST_TREND: [(&str, f64); 6] = [
    ("Jan", 100.0),
    ("Feb", 85.0),
    ("Mar", 70.0),
    ("Apr", 55.0),
    ("May", 40.0),
    ("Jun", 25.0),
];

fn chart_point(index: usize, cost: f64) -> (f64, f64) {
    let x = 20.0 + (index as f64 / (COST_TREND.len() - 1) as f64) * 240.0;
    let y = 80.0 - cost * 0.6;
    (x, y)
}

#[function_component(CostDashboard)]
pub fn cost_dashboard(props: &DashboardProps) -> Html {
    let points: Vec<(f64, f64)> = COST_TREND
        .iter()
        .enumerate()
        .map(|(i, (_, cost))| chart_point(i, *cost))
        .collect();
    let line = points
        .iter()
        .map(|(x, y)| format!("{x},{y}"))
        .collect::<Vec<_>>()
        .join(" ");
    let area = format!("20,80 {line} 260,80");
    let fade = if props.visible { "chart-shown" } else { "chart-hidden" };

    html! {
        <div class="dashboard">
            <div class="dashboard-header">
                <div class="dashboard-title">
                    <span class="pulse-dot green"></span>
                    <span>{"Kostenanalyse"}</span>
                </div>
                <span class="dashboard-tag">{"Echtzeit"}</span>
            </div>

            <div class="dashboard-metrics">
                <div class="metric-card">
                    <div class="metric-label">{"Kostenreduktion"}</div>
                    <div class="metric-value red"><AnimatedCounter end={30} suffix="%" /></div>
                    <div class="metric-delta down">{"↓ seit Einführung"}</div>
                </div>
                <div class="metric-card">
                    <div class="metric-label">{"Jährliche Einsparungen"}</div>
                    <div class="metric-value green"><AnimatedCounter end={28} suffix="'000 CHF" /></div>
                </div>
            </div>

            <div class="chart">
                <svg viewBox="0 0 280 80" preserveAspectRatio="xMidYMid meet">
                    <polygon class={fade} points={area} fill="rgba(220, 38, 38, 0.25)" />
                    <polyline class={fade} points={line} fill="none" stroke="#dc2626" stroke-width="2" />
                    { for points.iter().enumerate().map(|(i, (x, y))| html! {
                        <circle
                            class={fade}
                            cx={x.to_string()}
                            cy={y.to_string()}
                            r="3"
                            fill="#dc2626"
                            stroke="#ffffff"
                            stroke-width="2"
                            style={format!("transition-delay: {}ms;", i * 200)}
                        />
                    }) }
                </svg>
                <div class="chart-labels">
                    { for COST_TREND.iter().map(|(month, _)| html! { <span>{*month}</span> }) }
                </div>
            </div>

            <div class="dashboard-footer">
                <span>{"Kostenverlauf"}</span>
                <span class="live-tag green"><span class="pulse-dot green"></span>{"Live"}</span>
            </div>
        </div>
    }
}

const COMPETITORS: [(&str, u32); 3] = [
    ("Ihr Unternehmen", 95),
    ("Konkurrent A", 68),
    ("Konkurrent B", 62),
];

#[function_component(CompetitionDashboard)]
pub fn competition_dashboard(props: &DashboardProps) -> Html {
    html! {
        <div class="dashboard">
            <div class="dashboard-header">
                <div class="dashboard-title">
                    <span class="pulse-dot green"></span>
                    <span>{"Wettbewerbsanalyse"}</span>
                </div>
                <span class="dashboard-tag">{"Echtzeit"}</span>
            </div>

            <div class="dashboard-metrics">
                <div class="metric-card">
                    <div class="metric-label">{"Leistungsvorteil"}</div>
                    <div class="metric-value green"><AnimatedCounter end={27} suffix="%" /></div>
                    <div class="metric-delta up">{"↑ vs. nächster"}</div>
                </div>
                <div class="metric-card">
                    <div class="metric-label">{"Marktposition"}</div>
                    <div class="metric-value blue">{"#1"}</div>
                    <div class="metric-delta blue">{"Branchenführer"}</div>
                </div>
            </div>

            <div class="comparison">
                <div class="metric-label">{"Leistungsvergleich"}</div>
                { for COMPETITORS.iter().enumerate().map(|(index, (name, score))| {
                    let ours = index == 0;
                    let width = if props.visible { *score } else { 0 };
                    html! {
                        <div class="comparison-row" key={*name}>
                            <div class={classes!("comparison-label", ours.then(|| "ours"))}>
                                <span>{*name}</span>
                                <span>{format!("{score}%")}</span>
                            </div>
                            <div class="comparison-track">
                                <div
                                    class={classes!("comparison-fill", ours.then(|| "ours"))}
                                    style={format!("width: {width}%; transition-delay: {}ms;", index * 300)}
                                ></div>
                            </div>
                        </div>
                    }
                }) }
            </div>

            <div class="dashboard-footer">
                <span>{"Analysestatus"}</span>
                <span class="live-tag green"><span class="pulse-dot green"></span>{"Live"}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_spans_the_viewbox() {
        assert_eq!(chart_point(0, 100.0), (20.0, 20.0));
        assert_eq!(chart_point(5, 25.0), (260.0, 65.0));
    }
}
