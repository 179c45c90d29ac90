//! list_bench - array vs. linked list throughput
//!
//! Argument-free driver:
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  Config  │───▶│ Catalog  │───▶│ Harness  │───▶│  Report  │
//! │  (YAML)  │    │ (8 ops)  │    │ (timing) │    │ (stdout) │
//! └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```

use anyhow::Context;

use list_bench::config::{AppConfig, ENV_VAR};
use list_bench::core_types::SIZE_SWEEP;
use list_bench::harness::Harness;
use list_bench::operation::Operation;
use list_bench::report;

fn get_env() -> String {
    std::env::var(ENV_VAR).unwrap_or_else(|_| "dev".to_string())
}

fn run(app_config: &AppConfig) -> anyhow::Result<()> {
    let harness = Harness::new(app_config.self_check_enabled());

    println!("{}", report::banner());
    for op in Operation::catalog(app_config.binary_search) {
        let result = harness
            .run_operation(op, &SIZE_SWEEP)
            .with_context(|| format!("measuring {}", op))?;
        for line in report::render(&result) {
            println!("{}", line);
        }
    }
    println!("{}", report::DONE_MARKER);
    Ok(())
}

fn main() {
    let env = get_env();
    let app_config = match AppConfig::load(&env) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("FATAL: {}", e);
            std::process::exit(1);
        }
    };
    let log_guard = list_bench::logging::init_logging(&app_config);

    tracing::info!(
        env = %env,
        config_file = AppConfig::config_path(&env).exists(),
        os = std::env::consts::OS,
        arch = std::env::consts::ARCH,
        self_check = app_config.self_check_enabled(),
        "Starting list_bench"
    );

    if let Err(e) = run(&app_config) {
        tracing::error!("{:#}", e);
        eprintln!("FATAL: {:#}", e);
        drop(log_guard);
        std::process::exit(1);
    }

    tracing::info!("Sweep complete");
}
