use std::env;
use std::time::Instant;

use knapsack_dp::{DpSolver, Instance, Item};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("Full-table knapsack probe: wall clock and RSS across an (items, capacity) grid.");
    eprintln!(
        "Results are checked against exhaustive enumeration up to {} items.",
        options.verify_limit
    );
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    // The table is (n + 1) * (capacity + 1) cells, so both axes grow here.
    const CONFIGS: &[(usize, u64)] = &[
        (16, 1_000),
        (64, 2_000),
        (256, 4_000),
        (1_024, 8_000),
        (2_048, 16_000),
    ];

    let total = CONFIGS.len();
    for (idx, &(n, capacity)) in CONFIGS.iter().enumerate() {
        eprint!("[{}/{}] items={n} capacity={capacity}... ", idx + 1, total);
        let m = measure(n, capacity, &options, &mut sys);
        eprintln!(
            "value={}, time={:.3}s, rss_delta={} KiB, status={}",
            m.value,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label()
        );
        measurements.push(m);
    }

    let failed = measurements
        .iter()
        .filter(|m| matches!(m.status, VerificationStatus::Failed))
        .count();

    options.format.write(&measurements);

    if failed > 0 {
        eprintln!("scale_probe: {failed} verification failure(s)");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 20usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_limit(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin scale_probe [-- <options>]

Options:
  --format <csv|table>      Output format (default: csv)
  --verify-limit <N>        Largest item count to verify exhaustively;
                            enumeration is 2^N, keep it small (default: 20)
  -h, --help                Print this help message
"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    let limit = value
        .parse::<usize>()
        .map_err(|_| "verify limit must be a non-negative integer".to_string())?;
    if limit > 24 {
        return Err("verify limit above 24 would enumerate >16M subsets".to_string());
    }
    Ok(limit)
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
        }
    }
}

struct Measurement {
    items: usize,
    capacity: u64,
    value: u64,
    wall_s: f64,
    rss_delta_kib: u64,
    status: VerificationStatus,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

fn measure(n: usize, capacity: u64, options: &Options, sys: &mut System) -> Measurement {
    let instance = deterministic_instance(n, capacity);

    let before = rss_kib(sys);
    let start = Instant::now();
    let solution = DpSolver::new(&instance).run();
    let wall_s = start.elapsed().as_secs_f64();
    let after = rss_kib(sys);

    let status = if n <= options.verify_limit {
        let baseline = brute_force_best(instance.items(), capacity);
        let feasible = solution.selected_weight(&instance) <= capacity
            && solution.selected_value(&instance) == solution.value;
        if solution.value == baseline && feasible {
            VerificationStatus::Passed
        } else {
            VerificationStatus::Failed
        }
    } else {
        VerificationStatus::NotChecked
    };

    Measurement {
        items: n,
        capacity,
        value: solution.value,
        wall_s,
        rss_delta_kib: after.saturating_sub(before),
        status,
    }
}

fn deterministic_instance(n: usize, capacity: u64) -> Instance {
    let items = (0..n as u64)
        .map(|i| Item::new(i * 7 % 1_000 + 1, i * 13 % 97 + 1))
        .collect();
    Instance::new(items, capacity)
}

fn brute_force_best(items: &[Item], capacity: u64) -> u64 {
    let mut best = 0u64;
    for mask in 0u32..1u32 << items.len() {
        let mut value = 0u64;
        let mut weight = 0u64;
        for (i, item) in items.iter().enumerate() {
            if mask & (1 << i) != 0 {
                value += item.value;
                weight += item.weight;
            }
        }
        if weight <= capacity {
            best = best.max(value);
        }
    }
    best
}

fn write_csv(measurements: &[Measurement]) {
    println!("items,capacity,value,wall_s,rss_delta_kib,verification_status");
    for m in measurements {
        println!(
            "{},{},{},{:.3},{},{}",
            m.items,
            m.capacity,
            m.value,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label()
        );
    }
}

fn write_table(measurements: &[Measurement]) {
    println!(
        "{:>8}  {:>10}  {:>12}  {:>10}  {:>14}  {:>12}",
        "items", "capacity", "value", "wall_s", "rss_delta_kib", "status"
    );
    for m in measurements {
        println!(
            "{:>8}  {:>10}  {:>12}  {:>10.3}  {:>14}  {:>12}",
            m.items,
            m.capacity,
            m.value,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label()
        );
    }
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory()
    } else {
        0
    }
}
