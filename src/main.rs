mod checks;
mod config;

use checks::report::CheckReport;
use checks::{Checker, SetupError};
use tracing::{error, info};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let reports = match run_suite() {
        Ok(reports) => reports,
        Err(err) => {
            error!("suite aborted: {}", err);
            std::process::exit(2);
        }
    };

    let mut failed = 0;
    for report in &reports {
        if report.passed {
            info!("PASS {}: {}", report.name, report.detail);
        } else {
            failed += 1;
            error!("FAIL {}: {}", report.name, report.detail);
        }
    }
    info!("{} checks run, {} failed", reports.len(), failed);
    if failed > 0 {
        std::process::exit(1);
    }
}

//the checker drops (and the connection closes) before we report, whatever
//the individual check outcomes were
fn run_suite() -> Result<Vec<CheckReport>, SetupError> {
    let config = config::Config::from_env()?;
    let mut checker = Checker::connect(&config)?;
    info!("connected to database");
    Ok(checker.run_all()?)
}
