//! Composition of the four report figures.
//!
//! Each figure is built once from the loaded bundle. Trace order is the
//! canonical algorithm order restricted to algorithms with data; the
//! dropdown carries one button per included algorithm plus a final
//! "Todos" entry that restores every trace and the generic title.

use crate::aggregate::{self, SmoothedSeries};
use crate::algorithms::Algorithm;
use crate::artifacts::ArtifactBundle;
use crate::charts::figure::{
    BoxTrace, Button, Figure, Layout, LayoutUpdate, LineTrace, Title, Trace, TraceUpdate,
    UpdateMenu,
};

/// Dropdown label for the show-all entry.
pub const SHOW_ALL_LABEL: &str = "Todos";

/// The four chart tabs, in presentation order.
#[derive(Debug, Clone)]
pub struct ChartSet {
    pub reward_box: Figure,
    pub reward_smoothed: Figure,
    pub error_box: Figure,
    pub error_lines: Figure,
}

/// Build all four figures from one loaded bundle.
pub fn compose_all(bundle: &ArtifactBundle, window: usize) -> ChartSet {
    let smoothed = aggregate::smoothed_rewards(&bundle.rewards, window);
    ChartSet {
        reward_box: reward_box(bundle),
        reward_smoothed: reward_smoothed(&smoothed),
        error_box: error_box(bundle),
        error_lines: error_lines(bundle),
    }
}

/// Distribution of raw episode rewards, one box per algorithm.
pub fn reward_box(bundle: &ArtifactBundle) -> Figure {
    let traces: Vec<Trace> = Algorithm::ALL
        .into_iter()
        .filter_map(|algorithm| {
            let rewards: Vec<f64> = bundle
                .rewards
                .iter()
                .filter(|r| r.algorithm == algorithm)
                .map(|r| r.reward)
                .collect();
            if rewards.is_empty() {
                return None;
            }
            Some(Trace::Box(BoxTrace::new(algorithm, rewards)))
        })
        .collect();

    finish(
        traces,
        "Boxplot da Recompensa por Algoritmo",
        "Boxplot da Recompensa",
        "Algoritmo",
        "Recompensa Acumulada",
    )
}

/// Smoothed per-episode mean reward, one line per algorithm.
pub fn reward_smoothed(series: &[SmoothedSeries]) -> Figure {
    let traces: Vec<Trace> = series
        .iter()
        .map(|s| {
            Trace::Line(LineTrace::new(
                s.algorithm,
                Some(s.episodes.clone()),
                s.values.clone(),
            ))
        })
        .collect();

    finish(
        traces,
        "Recompensa Média Suavizada por Episódio",
        "Recompensa Média Suavizada",
        "Episódio",
        "Recompensa Média Suavizada",
    )
}

/// Distribution of estimation-error samples, one box per algorithm.
pub fn error_box(bundle: &ArtifactBundle) -> Figure {
    let melted = aggregate::melt_errors(&bundle.errors);
    let traces: Vec<Trace> = Algorithm::ALL
        .into_iter()
        .filter_map(|algorithm| {
            let values: Vec<f64> = melted
                .iter()
                .filter(|s| s.algorithm == algorithm)
                .map(|s| s.value)
                .collect();
            if values.is_empty() {
                return None;
            }
            Some(Trace::Box(BoxTrace::new(algorithm, values)))
        })
        .collect();

    finish(
        traces,
        "Boxplot do Erro Médio por Algoritmo",
        "Boxplot do Erro Médio",
        "Algoritmo",
        "Erro Médio (|Q - Q*|)",
    )
}

/// Estimation error over training, one line per algorithm, x implicit.
pub fn error_lines(bundle: &ArtifactBundle) -> Figure {
    let traces: Vec<Trace> = Algorithm::ALL
        .into_iter()
        .filter_map(|algorithm| {
            let values = bundle.errors_for(algorithm);
            if values.is_empty() {
                return None;
            }
            Some(Trace::Line(LineTrace::new(
                algorithm,
                None,
                values.to_vec(),
            )))
        })
        .collect();

    finish(
        traces,
        "Erro Médio Estimado por Episódio",
        "Erro Médio Estimado",
        "Episódios",
        "Erro Médio Estimado",
    )
}

fn finish(
    traces: Vec<Trace>,
    generic_title: &str,
    selected_prefix: &str,
    xaxis_title: &str,
    yaxis_title: &str,
) -> Figure {
    let included: Vec<Algorithm> = traces.iter().map(Trace::algorithm).collect();
    let mut layout = Layout::dark(generic_title, xaxis_title, yaxis_title);
    layout.updatemenus = vec![dropdown(&included, selected_prefix, generic_title)];
    Figure {
        data: traces,
        layout,
    }
}

/// One button per included algorithm plus the show-all entry.
fn dropdown(included: &[Algorithm], selected_prefix: &str, generic_title: &str) -> UpdateMenu {
    let mut buttons: Vec<Button> = included
        .iter()
        .enumerate()
        .map(|(index, algorithm)| Button {
            label: algorithm.label().to_string(),
            method: "update",
            args: (
                TraceUpdate {
                    visible: (0..included.len()).map(|i| i == index).collect(),
                },
                LayoutUpdate {
                    title: Title::new(format!("{selected_prefix} - {algorithm}")),
                },
            ),
        })
        .collect();
    buttons.push(Button {
        label: SHOW_ALL_LABEL.to_string(),
        method: "update",
        args: (
            TraceUpdate {
                visible: vec![true; included.len()],
            },
            LayoutUpdate {
                title: Title::new(generic_title),
            },
        ),
    });

    UpdateMenu {
        buttons,
        direction: "down",
        showactive: true,
        x: 1.1,
        y: 1.2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::RewardRecord;

    /// Three algorithms with 100 episodes each, six error arrays of 500.
    fn example_bundle() -> ArtifactBundle {
        let algorithms = [Algorithm::Td0, Algorithm::Sarsa, Algorithm::QLearning];
        let rewards = algorithms
            .into_iter()
            .flat_map(|algorithm| {
                (0..100).map(move |episode| RewardRecord {
                    algorithm,
                    episode,
                    reward: -(episode as f64),
                })
            })
            .collect();
        let errors = Algorithm::ALL
            .into_iter()
            .map(|a| (a, vec![0.25; 500]))
            .collect();
        ArtifactBundle {
            rewards,
            errors,
            skipped_reward_rows: 0,
        }
    }

    #[test]
    fn end_to_end_shapes_match_inputs() {
        let charts = compose_all(&example_bundle(), 50);

        assert_eq!(charts.reward_box.data.len(), 3);
        assert_eq!(charts.reward_smoothed.data.len(), 3);
        for trace in &charts.reward_smoothed.data {
            let Trace::Line(line) = trace else {
                panic!("expected line traces")
            };
            assert_eq!(line.y.len(), 100);
        }
        assert_eq!(charts.error_box.data.len(), 6);
        assert_eq!(charts.error_lines.data.len(), 6);
        for trace in &charts.error_lines.data {
            let Trace::Line(line) = trace else {
                panic!("expected line traces")
            };
            assert_eq!(line.y.len(), 500);
            assert!(line.x.is_none());
        }
    }

    #[test]
    fn traces_follow_canonical_order_and_colors() {
        let charts = compose_all(&example_bundle(), 50);
        for figure in [
            &charts.reward_box,
            &charts.reward_smoothed,
            &charts.error_box,
            &charts.error_lines,
        ] {
            let order = figure.trace_algorithms();
            let expected: Vec<Algorithm> = Algorithm::ALL
                .into_iter()
                .filter(|a| order.contains(a))
                .collect();
            assert_eq!(order, expected, "trace order must be canonical");

            let json = serde_json::to_value(figure).unwrap();
            for (trace, algorithm) in json["data"].as_array().unwrap().iter().zip(&order) {
                let color = trace
                    .pointer("/marker/color")
                    .or_else(|| trace.pointer("/line/color"))
                    .and_then(|c| c.as_str());
                assert_eq!(color, Some(algorithm.color()));
                assert_eq!(trace["name"].as_str(), Some(algorithm.label()));
            }
        }
    }

    #[test]
    fn dropdown_masks_single_out_each_trace() {
        let charts = compose_all(&example_bundle(), 50);
        let figure = &charts.error_box;
        let menu = &figure.layout.updatemenus[0];
        assert_eq!(menu.buttons.len(), figure.data.len() + 1);

        for (index, button) in menu.buttons[..figure.data.len()].iter().enumerate() {
            let visible = &button.args.0.visible;
            assert_eq!(visible.len(), figure.data.len());
            for (i, &flag) in visible.iter().enumerate() {
                assert_eq!(flag, i == index);
            }
            assert!(button.args.1.title.text.ends_with(&button.label));
        }

        let show_all = menu.buttons.last().unwrap();
        assert_eq!(show_all.label, SHOW_ALL_LABEL);
        assert!(show_all.args.0.visible.iter().all(|&v| v));
        assert_eq!(show_all.args.1.title.text, figure.layout.title.text);
    }

    #[test]
    fn dropdown_buttons_carry_no_series_data() {
        // Toggling is a pure display operation: a button may only flip
        // visibility flags and retitle the chart.
        let charts = compose_all(&example_bundle(), 50);
        let json = serde_json::to_value(&charts.reward_box).unwrap();
        for button in json["layout"]["updatemenus"][0]["buttons"]
            .as_array()
            .unwrap()
        {
            let args = button["args"].as_array().unwrap();
            assert_eq!(args.len(), 2);
            let trace_keys: Vec<&String> = args[0].as_object().unwrap().keys().collect();
            assert_eq!(trace_keys, vec!["visible"]);
            let layout_keys: Vec<&String> = args[1].as_object().unwrap().keys().collect();
            assert_eq!(layout_keys, vec!["title"]);
        }
    }

    #[test]
    fn empty_algorithm_contributes_no_trace() {
        let mut bundle = example_bundle();
        bundle.errors[5].1.clear(); // DQN
        let figure = error_box(&bundle);
        assert_eq!(figure.data.len(), 5);
        assert!(!figure.trace_algorithms().contains(&Algorithm::Dqn));
        let menu = &figure.layout.updatemenus[0];
        assert_eq!(menu.buttons.len(), 6);
    }

    #[test]
    fn error_lines_use_same_order_as_other_charts() {
        // The per-episode error tab must not reorder algorithms.
        let charts = compose_all(&example_bundle(), 50);
        assert_eq!(
            charts.error_lines.trace_algorithms(),
            charts.error_box.trace_algorithms()
        );
    }

    #[test]
    fn box_traces_serialize_as_plotly_boxes() {
        let charts = compose_all(&example_bundle(), 50);
        let json = serde_json::to_value(&charts.reward_box).unwrap();
        let first = &json["data"][0];
        assert_eq!(first["type"].as_str(), Some("box"));
        assert_eq!(first["boxpoints"].as_str(), Some("outliers"));
        assert_eq!(first["y"].as_array().unwrap().len(), 100);
    }
}
