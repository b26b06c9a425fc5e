// Scheduler environment variables
pub const ENV_JOB_ID: &str = "SLURM_JOB_ID";
pub const ENV_CPUS_PER_TASK: &str = "SLURM_CPUS_PER_TASK";
pub const ENV_MEM_PER_NODE: &str = "SLURM_MEM_PER_NODE";
pub const ENV_CUDA_VISIBLE_DEVICES: &str = "CUDA_VISIBLE_DEVICES";

// Report layout
pub const BANNER_START: &str = "=== Python Test Job Running ===";
pub const BANNER_END: &str = "===============================";
pub const LABEL_INTERPRETER_VERSION: &str = "Python Version";
pub const LABEL_HOST: &str = "Host";
pub const PLACEHOLDER_NOT_SET: &str = "Not set";

// Interpreter probe
pub const INTERPRETER_VERSION_SNIPPET: &str = "import sys; print(sys.version)";

// Configuration
pub const CONFIG_ENV_PREFIX: &str = "JOBPROBE";
pub const DEFAULT_INTERPRETER: &str = "python3";
pub const DEFAULT_FORMAT: &str = "text";

// Log messages
pub const MSG_STARTING_PROBE: &str = "Starting job environment probe...";
pub const MSG_NO_ALLOCATION: &str =
    "SLURM_JOB_ID is not set, not running inside a scheduler allocation";
pub const MSG_ALLOCATION: &str = "Running inside scheduler job {}";
pub const MSG_VISIBLE_GPUS: &str = "Visible GPU devices: {}";
pub const MSG_REPORT_WRITTEN: &str = "Report written";
