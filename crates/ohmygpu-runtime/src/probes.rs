//! Per-OS probe chains.
//!
//! A probe pairs a fixed external-command argument vector with one of the
//! pure parsing rules from `ohmygpu-core`. Chains are static per-OS
//! tables ordered vendor tools first, generic OS inventory last; the
//! first probe that yields a report wins and nothing is merged across
//! probes.

use ohmygpu_core::parse;
use ohmygpu_core::ports::CommandRunner;
use ohmygpu_core::report::GpuReport;
use tracing::debug;

use crate::platform::Os;

/// One external-command invocation plus its output parser.
pub struct Probe {
    /// Short label for logging.
    pub name: &'static str,
    pub program: &'static str,
    pub args: &'static [&'static str],
    pub parser: fn(&str) -> Option<GpuReport>,
}

impl Probe {
    /// Run the probe's command through `runner` and apply its parser.
    /// A spawn failure and unparsable output are identical: no data.
    pub async fn run(&self, runner: &dyn CommandRunner) -> Option<GpuReport> {
        let output = runner.run(self.program, self.args).await?;
        (self.parser)(&output)
    }
}

const NVIDIA_SMI_ARGS: &[&str] = &[
    "--query-gpu=name,memory.total,memory.used,utilization.gpu",
    "--format=csv,noheader",
];

static WINDOWS_CHAIN: &[Probe] = &[
    Probe {
        name: "nvidia-smi",
        program: "nvidia-smi",
        args: NVIDIA_SMI_ARGS,
        parser: parse::nvidia_csv,
    },
    Probe {
        name: "rocm-smi",
        program: "rocm-smi",
        args: &["--showid", "--showtemp"],
        parser: parse::rocm_marker,
    },
    Probe {
        name: "wmic",
        program: "wmic",
        args: &["path", "win32_videocontroller", "get", "name,adapterram"],
        parser: parse::wmic_table,
    },
    Probe {
        name: "powershell",
        program: "powershell",
        args: &[
            "-Command",
            "Get-WmiObject Win32_VideoController | Select-Object Name, AdapterRAM",
        ],
        parser: parse::powershell_table,
    },
];

static LINUX_CHAIN: &[Probe] = &[
    Probe {
        name: "nvidia-smi",
        program: "nvidia-smi",
        args: NVIDIA_SMI_ARGS,
        parser: parse::nvidia_csv,
    },
    Probe {
        name: "rocm-smi",
        program: "rocm-smi",
        args: &["--showid"],
        parser: parse::rocm_marker,
    },
    Probe {
        name: "lspci",
        program: "lspci",
        args: &["-v"],
        parser: parse::lspci_display,
    },
];

static MACOS_CHAIN: &[Probe] = &[Probe {
    name: "system_profiler",
    program: "system_profiler",
    args: &["SPDisplaysDataType"],
    parser: parse::profiler_display,
}];

/// Look up the ordered probe chain for a platform.
/// Unsupported platforms get an empty chain.
pub fn probe_chain(os: Os) -> &'static [Probe] {
    match os {
        Os::Windows => WINDOWS_CHAIN,
        Os::Linux => LINUX_CHAIN,
        Os::MacOs => MACOS_CHAIN,
        Os::Unsupported => &[],
    }
}

/// Run probes in order and return the first report produced, or `None`
/// once the chain is exhausted.
pub async fn run_chain(runner: &dyn CommandRunner, probes: &[Probe]) -> Option<GpuReport> {
    for probe in probes {
        debug!(probe = probe.name, "running probe");

        if let Some(report) = probe.run(runner).await {
            debug!(probe = probe.name, gpu = %report.name, "probe produced a report");
            return Some(report);
        }
    }

    None
}
