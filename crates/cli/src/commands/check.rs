use anyhow::{bail, Result};
use dnastrand::checks;

pub fn run_checks() -> Result<()> {
    println!("🔍 Running strand self-checks");
    println!("{}", "-".repeat(50));

    let outcomes = checks::run_all();
    for outcome in &outcomes {
        let mark = if outcome.passed { "✓" } else { "✗" };
        let status = if outcome.passed { "passed" } else { "FAILED" };
        println!(
            "{mark} {}: {status} ({})",
            outcome.name, outcome.description
        );
    }

    let failed = outcomes.iter().filter(|o| !o.passed).count();
    println!("{}", "=".repeat(50));
    if failed > 0 {
        bail!("{failed} of {} self-check(s) failed", outcomes.len());
    }
    println!("✓ All {} self-checks passed", outcomes.len());
    Ok(())
}
