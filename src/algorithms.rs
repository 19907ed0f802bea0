//! Algorithm identities and the fixed display mappings attached to them.
//!
//! Every chart, table, and gallery in the report joins on [`Algorithm`].
//! The canonical ordering ([`Algorithm::ALL`]) and the color assignments
//! are fixed at compile time and shared by all views; loaded data never
//! changes legend order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The six algorithms covered by the experiment artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "Monte Carlo First-Visit")]
    MonteCarloFirstVisit,
    #[serde(rename = "Monte Carlo Every-Visit")]
    MonteCarloEveryVisit,
    #[serde(rename = "TD(0)")]
    Td0,
    #[serde(rename = "SARSA")]
    Sarsa,
    #[serde(rename = "Q-Learning")]
    QLearning,
    #[serde(rename = "DQN")]
    Dqn,
}

impl Algorithm {
    /// Canonical ordering used by every chart legend, selector, and table.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::MonteCarloFirstVisit,
        Algorithm::MonteCarloEveryVisit,
        Algorithm::Td0,
        Algorithm::Sarsa,
        Algorithm::QLearning,
        Algorithm::Dqn,
    ];

    /// Human-readable name, as it appears in the `algoritmo` column.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::MonteCarloFirstVisit => "Monte Carlo First-Visit",
            Algorithm::MonteCarloEveryVisit => "Monte Carlo Every-Visit",
            Algorithm::Td0 => "TD(0)",
            Algorithm::Sarsa => "SARSA",
            Algorithm::QLearning => "Q-Learning",
            Algorithm::Dqn => "DQN",
        }
    }

    /// Display color, shared by every trace for this algorithm.
    pub fn color(self) -> &'static str {
        match self {
            Algorithm::MonteCarloFirstVisit => "#AB63FA",
            Algorithm::MonteCarloEveryVisit => "#FFA15A",
            Algorithm::Td0 => "#EF553B",
            Algorithm::Sarsa => "#00CC96",
            Algorithm::QLearning => "#636EFA",
            Algorithm::Dqn => "#19D3F3",
        }
    }

    /// File name of the serialized estimation-error array for this algorithm.
    pub fn error_artifact(self) -> &'static str {
        match self {
            Algorithm::MonteCarloFirstVisit => "erro_monte_carlo.npy",
            Algorithm::MonteCarloEveryVisit => "erro_monte_carlo_every.npy",
            Algorithm::Td0 => "erro_td.npy",
            Algorithm::Sarsa => "erro_sarsa.npy",
            Algorithm::QLearning => "erro_q_learning.npy",
            Algorithm::Dqn => "erro_dqn.npy",
        }
    }

    /// File name of the greedy-episode animation for this algorithm.
    pub fn media_filename(self) -> &'static str {
        match self {
            Algorithm::MonteCarloFirstVisit => "Monte_Carlo.gif",
            Algorithm::MonteCarloEveryVisit => "Monte_Carlo_Every.gif",
            Algorithm::Td0 => "TD(0).gif",
            Algorithm::Sarsa => "SARSA.gif",
            Algorithm::QLearning => "Q-Learning.gif",
            Algorithm::Dqn => "DQN.gif",
        }
    }

    /// Look up an algorithm by its display label.
    ///
    /// # Examples
    ///
    /// ```
    /// use cliffviz::Algorithm;
    ///
    /// assert_eq!(Algorithm::from_label("SARSA"), Some(Algorithm::Sarsa));
    /// assert_eq!(Algorithm::from_label("REINFORCE"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Algorithm> {
        Algorithm::ALL.into_iter().find(|a| a.label() == label)
    }

    /// Comma-separated list of all display labels, for error messages.
    pub fn expected_labels() -> String {
        Algorithm::ALL
            .iter()
            .map(|a| a.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Algorithm::from_label(input).ok_or_else(|| Error::UnknownAlgorithm {
            input: input.to_string(),
            expected: Algorithm::expected_labels(),
        })
    }
}
