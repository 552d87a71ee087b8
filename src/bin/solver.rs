use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use knapsack_dp::io::{read_instance, write_solution};
use knapsack_dp::DpSolver;

fn main() {
    let path = match parse_args(env::args().skip(1)) {
        Ok(path) => path,
        Err(err) => {
            eprintln!("solver: {err}");
            print_help();
            process::exit(2);
        }
    };

    let instance = match read_instance(&path) {
        Ok(instance) => instance,
        Err(err) => {
            eprintln!("solver: {err}");
            process::exit(1);
        }
    };

    let solution = DpSolver::new(&instance).run();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = write_solution(&mut out, &solution) {
        eprintln!("solver: cannot write solution: {err}");
        process::exit(1);
    }
    if let Err(err) = out.flush() {
        eprintln!("solver: cannot write solution: {err}");
        process::exit(1);
    }
}

fn parse_args<I>(args: I) -> Result<PathBuf, String>
where
    I: Iterator<Item = String>,
{
    let mut path = None;
    for arg in args {
        if arg == "--help" || arg == "-h" {
            print_help();
            process::exit(0);
        }
        if arg.starts_with('-') {
            return Err(format!("unrecognized argument '{arg}'"));
        }
        if path.replace(PathBuf::from(arg)).is_some() {
            return Err("expected exactly one input file".to_string());
        }
    }
    path.ok_or_else(|| "missing input file".to_string())
}

fn print_help() {
    println!(
        "\
Usage: solver <input-file>

Reads a 0/1 knapsack instance and prints the exact optimum:
  line 1 of the file:   <item count> <capacity>
  following lines:      <value> <weight>, one item per line

Output is two lines: the optimal value with an optimality indicator, then
one 0/1 selection flag per item in input order.

Options:
  -h, --help    Print this help message
"
    );
}
