//! Built-in module plan and import table
//!
//! These reproduce the split used for the tile-game crate this tool was first
//! written for. A `modsplit.toml` replaces the plan wholesale.

use modsplit_foundation::{ImportTable, ModulePlan};
use std::collections::BTreeMap;

pub const DEFAULT_SOURCE_PATH: &str = "src/main.rs";
pub const DEFAULT_ANCHOR: &str = "mod test;";
pub const DEFAULT_BACKUP_SUFFIX: &str = ".backup";

/// Config files searched in the working directory, first match wins
pub const CONFIG_PATHS: [&str; 2] = ["modsplit.toml", ".modsplit/config.toml"];

/// Environment variable prefix for overrides (`MODSPLIT__SOURCE__PATH`)
pub const ENV_PREFIX: &str = "MODSPLIT__";

pub fn default_plan() -> Vec<ModulePlan> {
    vec![
        ModulePlan::new("game").with_functions([
            "create_plateau_empty",
            "create_shuffle_deck",
            "is_plateau_full",
            "get_legal_moves",
            "generate_tile_image_names",
            "is_game_over",
            "apply_move",
            "placer_tile",
        ]),
        ModulePlan::new("scoring").with_functions([
            "result",
            "calculate_line_completion_bonus",
            "enhanced_position_evaluation",
            "compute_alignment_score",
            "compute_potential_scores",
        ]),
        ModulePlan::new("mcts")
            .with_functions([
                "mcts_find_best_position_for_tile_with_nn",
                "simulate_games",
                "local_lookahead",
            ])
            .with_structs(["MCTSResult"]),
        ModulePlan::new("neural").with_functions([
            "convert_plateau_to_tensor",
            "enhanced_gradient_clipping",
            "robust_state_normalization",
            "train_network_with_game_data",
            "compute_global_stats",
            "normalize_input",
            "calculate_n_step_returns",
            "huber_loss",
            "calculate_prediction_accuracy",
        ]),
        ModulePlan::new("utils").with_functions([
            "random_index",
            "load_game_data",
            "save_game_data",
            "serialize_tensor",
            "tensor_to_vec",
            "deserialize_game_data",
            "append_to_results_file",
        ]),
    ]
}

pub fn default_import_table() -> ImportTable {
    let lines = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    ImportTable {
        global: lines(&["use crate::test::{Deck, Plateau, Tile};"]),
        modules: BTreeMap::from([
            (
                "neural".to_string(),
                lines(&[
                    "use tch::{nn, Tensor};",
                    "use tch::nn::{Optimizer, OptimizerConfig};",
                    "use std::collections::HashMap;",
                    "use crate::policy_value_net::{PolicyNet, ValueNet};",
                ]),
            ),
            (
                "mcts".to_string(),
                lines(&[
                    "use std::collections::HashMap;",
                    "use tch::Tensor;",
                    "use rand::Rng;",
                    "use crate::policy_value_net::{PolicyNet, ValueNet};",
                ]),
            ),
            (
                "scoring".to_string(),
                lines(&["use std::collections::HashMap;"]),
            ),
            ("game".to_string(), lines(&["use rand::Rng;"])),
            ("utils".to_string(), lines(&["use rand::Rng;"])),
        ]),
    }
}
