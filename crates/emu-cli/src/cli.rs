//! Command-line argument parsing with clap.

use clap::{Parser, ValueEnum};

/// Default REST endpoint of the emulator compute API.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5001";

const EXAMPLES: &str = "\
Examples:
  emu-compute start -d dc2 -n client -i sonatanfv/sonata-iperf3-vnf
  emu-compute start -d dc1 -n client -i sonatanfv/sonata-iperf3-vnf -v /home/wifi/db:/db
  emu-compute list
  emu-compute status -d dc2 -n client
  emu-compute move --orig dc1 --dest dc3 -n client
  emu-compute xterm client server";

/// Compute management client for the network emulator.
#[derive(Parser, Debug, Clone)]
#[command(name = "emu-compute")]
#[command(version, about, long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    /// Action to be executed.
    #[arg(value_enum)]
    pub command: ComputeAction,

    /// VNF names to open an xterm for.
    pub vnf_names: Vec<String>,

    /// Data center to which the command should be applied.
    #[arg(short, long)]
    pub datacenter: Option<String>,

    /// Data center the VNF is moved away from, e.g. 'dc1'.
    #[arg(long, visible_alias = "orig", default_value = "")]
    pub origin: String,

    /// Data center towards which the VNF will be moved, e.g. 'dc3'.
    #[arg(long, visible_alias = "dest", default_value = "")]
    pub destination: String,

    /// Name of compute instance, e.g. 'vnf1'.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Name of container image to be used, e.g. 'ubuntu:trusty'.
    #[arg(short, long)]
    pub image: Option<String>,

    /// Startup command of the container, e.g. './start.sh'.
    #[arg(short = 'c', long = "dcmd")]
    pub docker_command: Option<String>,

    /// CPU percentage of the instance.
    #[arg(long, visible_alias = "cpu", default_value = "")]
    pub cpu_percent: String,

    /// Network properties of a compute instance, e.g.
    /// '(id=input,ip=10.0.10.3/24),(id=output,ip=10.0.10.4/24)' for multiple interfaces.
    #[arg(long = "net")]
    pub network: Option<String>,

    /// REST API endpoint of the emulator.
    #[arg(short, long, env = "SON_EMU_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Host environment variable to use inside VNFs, e.g. IPERF_SERVER.
    #[arg(long, visible_alias = "env")]
    pub environment: Option<String>,

    /// Docker volume to use within the container (docker -v syntax).
    #[arg(short, long, default_value = "")]
    pub volume: String,

    /// CPU share (relative weight) of the container. The runtime default is 1024.
    #[arg(long = "cpu-share", visible_alias = "cpu-shares", default_value = "")]
    pub cpu_shares: String,

    /// CPU CFS scheduler period in microseconds, used alongside --cpu-quota.
    #[arg(long, visible_alias = "cpu-p", default_value = "")]
    pub cpu_period: String,

    /// CPU CFS quota: microseconds per --cpu-period before the container is throttled.
    #[arg(long, visible_aliases = ["cpu_quota", "cpu-q"], default_value = "")]
    pub cpu_quota: String,

    /// Maximum amount of memory the container can use.
    #[arg(long, visible_alias = "mem", default_value = "")]
    pub mem_limit: String,

    /// Output format for tabular results.
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

/// The six compute actions understood by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ComputeAction {
    /// Start a compute instance.
    Start,
    /// Stop a compute instance.
    Stop,
    /// Move a compute instance to another datacenter.
    Move,
    /// List compute instances.
    List,
    /// Show the status of a compute instance.
    Status,
    /// Open an xterm into running VNFs.
    Xterm,
}

impl ComputeAction {
    /// Look an action up by its command-line name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_str(name, false).ok()
    }

    /// The command-line name of the action.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Move => "move",
            Self::List => "list",
            Self::Status => "status",
            Self::Xterm => "xterm",
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[derive(Default)]
pub enum Format {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output for scripting.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("start", ComputeAction::Start)]
    #[test_case("stop", ComputeAction::Stop)]
    #[test_case("move", ComputeAction::Move)]
    #[test_case("list", ComputeAction::List)]
    #[test_case("status", ComputeAction::Status)]
    #[test_case("xterm", ComputeAction::Xterm)]
    fn cli_accepts_action(name: &str, expected: ComputeAction) {
        let cli = Cli::try_parse_from(["emu-compute", name]).expect("should parse");
        assert_eq!(cli.command, expected);
        assert_eq!(expected.name(), name);
        assert_eq!(ComputeAction::from_name(name), Some(expected));
    }

    #[test_case("restart" ; "unknown name")]
    #[test_case("START" ; "uppercase")]
    #[test_case("" ; "empty")]
    fn cli_rejects_unknown_action(name: &str) {
        assert!(Cli::try_parse_from(["emu-compute", name]).is_err());
        assert_eq!(ComputeAction::from_name(name), None);
    }

    #[test]
    fn cli_requires_action() {
        assert!(Cli::try_parse_from(["emu-compute"]).is_err());
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["emu-compute", "list"]).expect("should parse");
        assert_eq!(cli.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cli.datacenter, None);
        assert_eq!(cli.name, None);
        assert_eq!(cli.image, None);
        assert_eq!(cli.environment, None);
        assert_eq!(cli.volume, "");
        assert_eq!(cli.cpu_shares, "");
        assert_eq!(cli.mem_limit, "");
        assert_eq!(cli.format, Format::Table);
        assert!(cli.vnf_names.is_empty());
    }

    #[test]
    fn cli_endpoint_override_is_verbatim() {
        let cli = Cli::try_parse_from(["emu-compute", "-e", "http://emu:9000/", "list"])
            .expect("should parse");
        assert_eq!(cli.endpoint, "http://emu:9000/");
    }

    #[test]
    fn cli_parses_start_flags() {
        let cli = Cli::try_parse_from([
            "emu-compute",
            "start",
            "-d",
            "dc1",
            "-n",
            "vnf1",
            "-i",
            "ubuntu:trusty",
            "-c",
            "./start.sh",
            "--net",
            "(id=input,ip=10.0.10.3/24)",
            "--env",
            "IPERF_SERVER",
            "-v",
            "/home/wifi/db:/db",
            "--cpu-share",
            "512",
            "--cpu-p",
            "100000",
            "--cpu_quota",
            "50000",
            "--mem",
            "256m",
        ])
        .expect("should parse");

        assert_eq!(cli.command, ComputeAction::Start);
        assert_eq!(cli.datacenter.as_deref(), Some("dc1"));
        assert_eq!(cli.name.as_deref(), Some("vnf1"));
        assert_eq!(cli.image.as_deref(), Some("ubuntu:trusty"));
        assert_eq!(cli.docker_command.as_deref(), Some("./start.sh"));
        assert_eq!(cli.network.as_deref(), Some("(id=input,ip=10.0.10.3/24)"));
        assert_eq!(cli.environment.as_deref(), Some("IPERF_SERVER"));
        assert_eq!(cli.volume, "/home/wifi/db:/db");
        assert_eq!(cli.cpu_shares, "512");
        assert_eq!(cli.cpu_period, "100000");
        assert_eq!(cli.cpu_quota, "50000");
        assert_eq!(cli.mem_limit, "256m");
    }

    #[test]
    fn cli_parses_move_aliases() {
        let cli = Cli::try_parse_from([
            "emu-compute",
            "move",
            "--orig",
            "dc1",
            "--dest",
            "dc3",
            "-n",
            "client",
        ])
        .expect("should parse");
        assert_eq!(cli.origin, "dc1");
        assert_eq!(cli.destination, "dc3");
    }

    #[test]
    fn cli_collects_vnf_names() {
        let cli = Cli::try_parse_from(["emu-compute", "xterm", "a", "b"]).expect("should parse");
        assert_eq!(cli.command, ComputeAction::Xterm);
        assert_eq!(cli.vnf_names, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn cli_respects_format_flag() {
        let cli = Cli::try_parse_from(["emu-compute", "--format", "json", "list"])
            .expect("should parse");
        assert_eq!(cli.format, Format::Json);
    }
}
