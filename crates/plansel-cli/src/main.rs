//! plansel CLI: explain which plan a policy lets the optimizer choose.

use clap::{Parser, Subcommand};
use plansel_core::config::OptimizerConfig;
use plansel_planner::{CursorOptions, Optimizer, PlanRequest, Selection};
use plansel_policy::registry;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "plansel")]
#[command(about = "Inspect query plan selection under a selection policy", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select a plan for a JSON plan request and print the decision
    Explain {
        /// Path to the plan request JSON file
        #[arg(short, long)]
        request: PathBuf,

        /// Policy name (overrides PLANSEL_POLICY)
        #[arg(long)]
        policy: Option<String>,

        /// Plan the request as a count query
        #[arg(long)]
        count: bool,
    },
    /// List the built-in policies
    Policies,
}

#[derive(Debug, Serialize)]
struct Explanation<'a> {
    policy: &'a str,
    namespace: &'a str,
    selection: Selection,
    cursor: CursorOptions,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Explain {
            request,
            policy,
            count,
        } => {
            if let Err(e) = explain(&request, policy, count) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Policies => {
            for (name, policy) in registry::builtins() {
                println!(
                    "{:<10} optimalNatural={} matcher={} countingCursor={}",
                    name,
                    policy.permit_optimal_natural_plan(),
                    policy.request_matcher(),
                    policy.request_counting_cursor()
                );
            }
        }
    }
}

fn apply_overrides(config: &mut OptimizerConfig, policy: Option<String>) {
    if let Some(policy) = policy {
        config.policy = policy;
    }
}

fn explain(
    request_path: &Path,
    policy: Option<String>,
    count: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(request_path)?;
    let request: PlanRequest = serde_json::from_str(&content)?;

    let mut config = OptimizerConfig::from_env();
    apply_overrides(&mut config, policy);
    let optimizer = Optimizer::new(config)?;

    let (policy_name, selection, cursor) = if count {
        let (selection, cursor) = optimizer.count(&request)?;
        (registry::count().name(), selection, cursor)
    } else {
        let selection = optimizer.select(&request)?;
        let cursor = optimizer.cursor_options(&selection, &request)?;
        (optimizer.policy().name(), selection, cursor)
    };

    let out = Explanation {
        policy: policy_name,
        namespace: &request.namespace,
        selection,
        cursor,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{apply_overrides, explain, OptimizerConfig};
    use std::path::Path;

    #[test]
    fn policy_flag_overrides_config() {
        let mut config = OptimizerConfig::default();
        apply_overrides(&mut config, Some("indexOnly".into()));
        assert_eq!(config.policy, "indexOnly");
    }

    #[test]
    fn missing_flag_keeps_config() {
        let mut config = OptimizerConfig::default().with_policy("indexOnly");
        apply_overrides(&mut config, None);
        assert_eq!(config.policy, "indexOnly");
    }

    #[test]
    fn explain_reports_missing_request_file() {
        let missing = Path::new("/nonexistent/plansel/request.json");
        assert!(explain(missing, None, false).is_err());
    }
}
