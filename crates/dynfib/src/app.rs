//! Application entry point and the ownership-transfer driver.

use anyhow::{Context, Result};

use dynfib_core::constants::REPLACED_CAPACITY;
use dynfib_core::{stats, DynFibonacci, FibError, FIB_TABLE};

use crate::config::AppConfig;
use crate::report::{ScenarioReport, StepOutcome};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let report = run_scenario(config)?;

    if config.quiet {
        println!("{}", report.value);
    } else if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render());
    }
    Ok(())
}

fn ensure_step(ok: bool, detail: impl FnOnce() -> String) -> Result<(), FibError> {
    if ok {
        Ok(())
    } else {
        Err(FibError::ScenarioFailed(detail()))
    }
}

/// Build, query, move and move-assign caches, checking each observation.
pub fn run_scenario(config: &AppConfig) -> Result<ScenarioReport> {
    config.validate()?;
    let AppConfig {
        capacity, index, ..
    } = *config;
    let expected = FIB_TABLE[index];
    let start = stats::snapshot();
    let mut steps = Vec::with_capacity(4);

    // Construct and fill.
    let mut fib = DynFibonacci::new(capacity).context("constructing fib")?;
    let value = fib.get(index).context("querying fib")?;
    ensure_step(value == expected, || {
        format!("fib[{index}] = {value}, expected {expected}")
    })?;
    steps.push(StepOutcome::new(
        "construct",
        format!("fib({capacity})[{index}] = {value}"),
    ));
    tracing::info!(capacity, index, value, "constructed");

    // Move construction into a read-only binding.
    let ptr = fib.as_ptr();
    let fib_ = fib.take();
    ensure_step(!fib.is_alive(), || {
        "source still owns a buffer after move construction".into()
    })?;
    ensure_step(fib_.as_ptr() == ptr, || {
        "move construction did not keep the same buffer".into()
    })?;
    let moved_value = fib_.peek(index).context("fib_ lost its cached prefix")?;
    ensure_step(moved_value == expected, || {
        format!("fib_[{index}] = {moved_value}, expected {expected}")
    })?;
    steps.push(StepOutcome::new(
        "take",
        format!("fib dead, fib_[{index}] = {}", fib_[index]),
    ));
    tracing::info!("move construction verified");

    // Move assignment, then self-move-assignment.
    let mut fib0 = DynFibonacci::new(REPLACED_CAPACITY).context("constructing fib0")?;
    let mut fib1 = DynFibonacci::new(capacity).context("constructing fib1")?;
    let before = stats::snapshot();
    fib0.assign_from(&mut fib1);
    let released = stats::snapshot().since(&before).releases;
    ensure_step(released == 1, || {
        format!("move assignment released {released} buffers, expected 1")
    })?;
    ensure_step(!fib1.is_alive(), || {
        "fib1 still owns a buffer after move assignment".into()
    })?;

    let ptr = fib0.as_ptr();
    let same = fib0.take();
    fib0.assign(same);
    ensure_step(fib0.is_alive() && fib0.as_ptr() == ptr, || {
        "self-move-assignment lost the buffer".into()
    })?;
    let assigned_value = fib0.get(index).context("querying fib0")?;
    ensure_step(assigned_value == expected, || {
        format!("fib0[{index}] = {assigned_value}, expected {expected}")
    })?;
    steps.push(StepOutcome::new(
        "assign",
        format!("fib0 = move(fib1) released {released}, fib0[{index}] = {assigned_value}"),
    ));
    tracing::info!("move assignment verified");

    // Destruction, including the moved-from husks.
    drop(fib);
    drop(fib_);
    drop(fib1);
    drop(fib0);
    let used = stats::snapshot().since(&start);
    ensure_step(used.live() == 0, || {
        format!("{} buffers still live after drop", used.live())
    })?;
    steps.push(StepOutcome::new(
        "release",
        format!("{} buffers released once each", used.releases),
    ));

    Ok(ScenarioReport {
        capacity,
        index,
        value,
        steps,
        stats: used,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario_yields_55() {
        let report = run_scenario(&AppConfig::default()).unwrap();
        assert_eq!(report.value, 55);
        assert_eq!(report.steps.len(), 4);
        assert_eq!(report.stats.allocations, 3);
        assert_eq!(report.stats.releases, 3);
        assert_eq!(report.stats.bytes_allocated, report.stats.bytes_released);
    }

    #[test]
    fn largest_index_scenario() {
        let config = AppConfig {
            capacity: 94,
            index: 93,
            ..AppConfig::default()
        };
        let report = run_scenario(&config).unwrap();
        assert_eq!(report.value, 12_200_160_415_121_876_738);
    }

    #[test]
    fn small_index_scenario() {
        let config = AppConfig {
            capacity: 2,
            index: 1,
            ..AppConfig::default()
        };
        let report = run_scenario(&config).unwrap();
        assert_eq!(report.value, 1);
        assert_eq!(report.steps[0].step, "construct");
        assert_eq!(report.steps[3].step, "release");
    }

    #[test]
    fn scenario_rejects_unvalidated_index() {
        for index in [94, 200] {
            let config = AppConfig {
                capacity: 12,
                index,
                ..AppConfig::default()
            };
            let err = run_scenario(&config).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<FibError>(),
                Some(FibError::Config(_))
            ));
        }
    }

    #[test]
    fn large_capacity_scenario() {
        let config = AppConfig {
            capacity: 200,
            index: 10,
            ..AppConfig::default()
        };
        let report = run_scenario(&config).unwrap();
        assert_eq!(report.value, 55);
        assert_eq!(report.stats.live(), 0);
    }

    #[test]
    fn run_rejects_invalid_config() {
        let config = AppConfig {
            capacity: 6,
            index: 10,
            ..AppConfig::default()
        };
        let err = run(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FibError>(),
            Some(FibError::Config(_))
        ));
    }

    #[test]
    fn failed_step_is_scenario_error() {
        let err = ensure_step(false, || "boom".into()).unwrap_err();
        assert_eq!(err, FibError::ScenarioFailed("boom".into()));
        assert!(ensure_step(true, || unreachable!()).is_ok());
    }
}
