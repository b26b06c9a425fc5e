mod consts;
mod host;
mod report;
mod runtime;
mod settings;

use std::io;

use anyhow::{Context, Result};
use consts::*;
use host::HostCollector;
use report::{Report, SchedulerEnv};
use runtime::InterpreterProbe;
use settings::ProbeConfig;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("{}", MSG_STARTING_PROBE);

    let config = ProbeConfig::load().context("Failed to load probe configuration")?;

    let collector = HostCollector::new(InterpreterProbe::new(config.interpreter.as_str()));
    let host_info = collector
        .collect_info()
        .context("Failed to collect host information")?;

    let scheduler = SchedulerEnv::from_process();
    match scheduler.job_id.as_deref() {
        Some(job_id) => {
            log::info!("{}", MSG_ALLOCATION.replace("{}", job_id));
            log::debug!(
                "{}",
                MSG_VISIBLE_GPUS.replace("{}", &scheduler.visible_gpu_count().to_string())
            );
        }
        None => log::warn!("{}", MSG_NO_ALLOCATION),
    }

    let report = Report::new(host_info, scheduler);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report
        .write_to(&mut out, config.format)
        .context("Failed to write report")?;

    log::info!("{}", MSG_REPORT_WRITTEN);
    Ok(())
}
