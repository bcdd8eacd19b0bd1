use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use mctest::config::{ConfigLoader, McTestConfig};
use mctest::{Tally, TestGroup, TestSession, Value, delay};

pub type Result<T> = std::result::Result<T, anyhow::Error>;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of searching for mctest.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the built-in self-check suite
    Selfcheck,
}

fn resolve_config(cli: &Cli) -> Result<McTestConfig> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::apply_env(ConfigLoader::load_from_path(path)?),
        None => ConfigLoader::find_and_load(),
    };
    if cli.no_color {
        config.report.color = false;
    }
    Ok(config)
}

pub async fn run(cli: Cli) -> Result<Tally> {
    let config = resolve_config(&cli)?;
    let session = TestSession::from_config(&config);

    match cli.command {
        Commands::Selfcheck => Ok(selfcheck(&session).await),
    }
}

/// Exercise every operation against a capturing probe session and assert
/// on what it reports.
async fn selfcheck(session: &TestSession) -> Tally {
    session
        .run_group(TestGroup::new("Equality assertions").test_sync(|t| {
            let probe = TestSession::capturing().asserter();
            t.assert_equals(probe.assert_equals(2 + 2, 4, None).as_str(), "Passed", "pass string");
            t.assert_equals(
                probe.assert_equals(2 + 2, 5, "math check").as_str(),
                "Failed: math check =>  Expected 5, Got 4",
                "failure string",
            );
            t.assert_not_equals("a", "b", "distinct strings");
            t.assert_equals(probe.tally().passed, 1, "probe passes");
            t.assert_equals(probe.tally().failed, 1, "probe failures");
            Ok(())
        }))
        .await;

    session
        .run_group(TestGroup::new("Deep equality assertions").test_sync(|t| {
            let probe = TestSession::capturing().asserter();
            let a = Value::object([("x", 1)]);
            let b = Value::object([("x", 1)]);
            t.assert_not_equals(a.clone(), b.clone(), "distinct instances");
            t.assert_strict_equals(a.clone(), b, "same structure");
            t.assert_not_strict_equals(a, Value::object([("x", 2)]), "different structure");
            t.assert_equals(
                probe
                    .assert_strict_equals(Value::function("f"), Value::Null, None)
                    .as_str(),
                "",
                "opaque values error out",
            );
            t.assert_equals(probe.tally().failed, 1, "errors count as failures");
            Ok(())
        }))
        .await;

    session
        .run_group(TestGroup::new("Delay").test(|t| async move {
            let start = Instant::now();
            delay(10).await;
            t.assert_equals(
                start.elapsed() >= Duration::from_millis(10),
                true,
                "delay elapsed",
            );
            anyhow::Ok(())
        }))
        .await;

    session
        .run_group(TestGroup::new("Group runner").test(|t| async move {
            let probe = TestSession::capturing();
            let crashed = probe
                .run_group(TestGroup::new("crash").test_sync(|_| {
                    anyhow::bail!("test function failed on purpose")
                }))
                .await;
            t.assert_equals(crashed.failure().is_some(), true, "error contained");

            let skipped = probe.run_group(TestGroup::new("empty")).await;
            t.assert_equals(skipped.is_skipped(), true, "missing function skipped");
            t.assert_equals(skipped.tally.total(), 0, "skip changes no counts");
            anyhow::Ok(())
        }))
        .await;

    session
        .run_group(TestGroup::new("Summary reset").test_sync(|t| {
            let probe = TestSession::capturing();
            probe.asserter().assert_equals(1, 1, None);
            t.assert_equals(probe.post_test_result().total(), 1, "first report");
            t.assert_equals(probe.post_test_result().total(), 0, "second report");
            Ok(())
        }))
        .await;

    session.post_test_result()
}
