use std::env;
use std::io::{self, Write};

use serde::Serialize;

use crate::consts::*;
use crate::host::HostInfo;
use crate::settings::OutputFormat;

/// Scheduler-provided variables; `None` means the variable is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchedulerEnv {
    pub job_id: Option<String>,
    pub cpus_per_task: Option<String>,
    pub mem_per_node: Option<String>,
    pub cuda_visible_devices: Option<String>,
}

impl SchedulerEnv {
    pub fn from_process() -> Self {
        Self::from_lookup(|name| env::var_os(name).map(|v| v.to_string_lossy().into_owned()))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            job_id: lookup(ENV_JOB_ID),
            cpus_per_task: lookup(ENV_CPUS_PER_TASK),
            mem_per_node: lookup(ENV_MEM_PER_NODE),
            cuda_visible_devices: lookup(ENV_CUDA_VISIBLE_DEVICES),
        }
    }

    /// Variables in report order.
    pub fn entries(&self) -> [(&'static str, Option<&str>); 4] {
        [
            (ENV_JOB_ID, self.job_id.as_deref()),
            (ENV_CPUS_PER_TASK, self.cpus_per_task.as_deref()),
            (ENV_MEM_PER_NODE, self.mem_per_node.as_deref()),
            (ENV_CUDA_VISIBLE_DEVICES, self.cuda_visible_devices.as_deref()),
        ]
    }

    pub fn visible_gpu_count(&self) -> usize {
        self.cuda_visible_devices
            .as_deref()
            .map(|devices| {
                devices
                    .split(',')
                    .filter(|d| !d.trim().is_empty())
                    .count()
            })
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub interpreter_version: String,
    pub host: String,
    pub scheduler: SchedulerEnv,
}

impl Report {
    pub fn new(host: HostInfo, scheduler: SchedulerEnv) -> Self {
        Self {
            interpreter_version: host.interpreter_version,
            host: host.hostname,
            scheduler,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(8);
        lines.push(BANNER_START.to_string());
        lines.push(format!(
            "{}: {}",
            LABEL_INTERPRETER_VERSION, self.interpreter_version
        ));
        lines.push(format!("{}: {}", LABEL_HOST, self.host));
        for (name, value) in self.scheduler.entries() {
            lines.push(format!("{}: {}", name, value.unwrap_or(PLACEHOLDER_NOT_SET)));
        }
        lines.push(BANNER_END.to_string());
        lines
    }

    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => {
                let mut text = self.lines().join("\n");
                text.push('\n');
                Ok(text)
            }
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(self)?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    pub fn write_to(&self, out: &mut impl Write, format: OutputFormat) -> io::Result<()> {
        let rendered = self.render(format)?;
        out.write_all(rendered.as_bytes())?;
        out.flush()
    }
}
