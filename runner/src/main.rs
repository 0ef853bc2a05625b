//! Command line front end for the simulator.
//!
//! Reads a process list (`id,arrival,burst[,priority]`, one per line), runs
//! the requested policy — or all three when none is given — and prints a
//! per process table, the average turnaround and waiting times, and an
//! ASCII Gantt chart.

use std::fs;
use std::num::NonZeroUsize;
use std::process::ExitCode;

use clap::{Arg, ArgMatches, Command};
use log::info;
use regex::Regex;

use schedsim::{
    fcfs, feedback_priority_with_sampler, round_robin, GanttTrace, LevelQuantums, ProcessSpec,
    RandomIoSampler, Scheduler, Simulation,
};

fn main() -> ExitCode {
    env_logger::init();

    let matches = Command::new("schedsim")
        .about("CPU scheduling policy simulator (FCFS, round robin, feedback priority)")
        .arg(
            Arg::new("inputfile")
                .long("inputfile")
                .required(true)
                .help("Process list file, one `id,arrival,burst[,priority]` per line"),
        )
        .arg(
            Arg::new("schedspec")
                .short('s')
                .long("schedspec")
                .help("Policy spec: F, R<quantum> or W<q1>:<q2>:<q3>; all three when omitted"),
        )
        .arg(
            Arg::new("quantum")
                .long("quantum")
                .default_value("2")
                .help("Round robin quantum; doubles as the level 1 quantum of the feedback policy"),
        )
        .arg(
            Arg::new("q2")
                .long("q2")
                .default_value("4")
                .help("Feedback policy quantum for priority level 2"),
        )
        .arg(
            Arg::new("q3")
                .long("q3")
                .default_value("6")
                .help("Feedback policy quantum for priority level 3"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Fixed seed for the feedback policy's I/O draws"),
        )
        .get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("schedsim: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &ArgMatches) -> Result<(), String> {
    let inputfile: &String = matches
        .get_one("inputfile")
        .ok_or("missing input file")?;
    let contents = fs::read_to_string(inputfile)
        .map_err(|err| format!("cannot read {inputfile}: {err}"))?;
    let specs = parse_processes(&contents)?;
    if specs.is_empty() {
        return Err(format!("{inputfile} holds no processes"));
    }
    info!("loaded {} processes from {}", specs.len(), inputfile);

    let seed = match matches.get_one::<String>("seed") {
        Some(text) => Some(
            text.parse::<u64>()
                .map_err(|_| format!("invalid seed `{text}`"))?,
        ),
        None => None,
    };

    if let Some(spec) = matches.get_one::<String>("schedspec") {
        run_policy(&parse_schedspec(spec)?, &specs, seed)?;
        return Ok(());
    }

    // No schedspec given: run all three policies back to back.
    let rr_quantum = parse_quantum(matches.get_one::<String>("quantum").expect("defaulted"))?;
    let q2 = parse_quantum(matches.get_one::<String>("q2").expect("defaulted"))?;
    let q3 = parse_quantum(matches.get_one::<String>("q3").expect("defaulted"))?;
    let quantums = LevelQuantums::new(rr_quantum, q2, q3);

    run_policy(&PolicySpec::Fcfs, &specs, seed)?;
    run_policy(&PolicySpec::RoundRobin(rr_quantum), &specs, seed)?;
    run_policy(&PolicySpec::Feedback(quantums), &specs, seed)?;

    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PolicySpec {
    Fcfs,
    RoundRobin(NonZeroUsize),
    Feedback(LevelQuantums),
}

fn run_policy(
    policy: &PolicySpec,
    specs: &[ProcessSpec],
    seed: Option<u64>,
) -> Result<(), String> {
    let simulation = match policy {
        PolicySpec::Fcfs => {
            println!("=== First Come First Served ===");
            fcfs().simulate(specs)
        }
        PolicySpec::RoundRobin(quantum) => {
            println!("=== Round Robin (quantum {quantum}) ===");
            round_robin(*quantum).simulate(specs)
        }
        PolicySpec::Feedback(quantums) => {
            println!(
                "=== Feedback Priority (Q1 {}, Q2 {}, Q3 {}) ===",
                quantums.get(1),
                quantums.get(2),
                quantums.get(3)
            );
            let sampler = match seed {
                Some(seed) => RandomIoSampler::seeded(seed),
                None => RandomIoSampler::from_entropy(),
            };
            feedback_priority_with_sampler(*quantums, sampler).simulate(specs)
        }
    }
    .map_err(|err| err.to_string())?;

    let show_priority = matches!(policy, PolicySpec::Feedback(_));
    print!("{}", render_table(&simulation, show_priority));
    println!("Average turnaround: {:.2}", simulation.avg_turnaround);
    println!("Average waiting:    {:.2}", simulation.avg_waiting);
    println!("{}", render_gantt(&simulation.gantt));
    println!();

    Ok(())
}

/// Parses the free text process list: `id,arrival,burst[,priority]`.
///
/// Blank lines are skipped; an unparsable priority falls back to 1.
fn parse_processes(input: &str) -> Result<Vec<ProcessSpec>, String> {
    let mut specs = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(format!(
                "line {}: expected `id,arrival,burst[,priority]`, got `{line}`",
                index + 1
            ));
        }

        let arrival = parts[1]
            .parse::<usize>()
            .map_err(|_| format!("line {}: invalid arrival `{}`", index + 1, parts[1]))?;
        let burst = parts[2]
            .parse::<usize>()
            .map_err(|_| format!("line {}: invalid burst `{}`", index + 1, parts[2]))?;
        let priority = parts
            .get(3)
            .and_then(|text| text.parse::<u8>().ok())
            .unwrap_or(1);

        specs.push(ProcessSpec::new(parts[0], arrival, burst).with_priority(priority));
    }

    Ok(specs)
}

fn parse_quantum(text: &str) -> Result<NonZeroUsize, String> {
    text.parse::<NonZeroUsize>()
        .map_err(|_| format!("invalid quantum `{text}`: must be a positive integer"))
}

/// Parses the compact policy spec: `F`, `R<quantum>` or `W<q1>:<q2>:<q3>`.
fn parse_schedspec(spec: &str) -> Result<PolicySpec, String> {
    let re = Regex::new(r"^(F|R\d+|W\d+:\d+:\d+)$").unwrap();
    if !re.is_match(spec) {
        return Err(format!(
            "invalid scheduler specification `{spec}`: must be F, R<quantum> or W<q1>:<q2>:<q3>"
        ));
    }

    if spec == "F" {
        return Ok(PolicySpec::Fcfs);
    }

    if let Some(rest) = spec.strip_prefix('R') {
        return Ok(PolicySpec::RoundRobin(parse_quantum(rest)?));
    }

    let rest = spec.strip_prefix('W').unwrap_or(spec);
    let mut quanta = rest.split(':');
    let q1 = parse_quantum(quanta.next().unwrap_or_default())?;
    let q2 = parse_quantum(quanta.next().unwrap_or_default())?;
    let q3 = parse_quantum(quanta.next().unwrap_or_default())?;

    Ok(PolicySpec::Feedback(LevelQuantums::new(q1, q2, q3)))
}

fn render_table(simulation: &Simulation, show_priority: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<10}{:>8}{:>7}{}{:>11}{:>12}{:>9}\n",
        "ID",
        "Arrival",
        "Burst",
        if show_priority { "  Priority" } else { "" },
        "Completion",
        "Turnaround",
        "Waiting"
    ));

    for process in &simulation.processes {
        let priority = if show_priority {
            format!("{:>10}", process.original_priority)
        } else {
            String::new()
        };
        out.push_str(&format!(
            "{:<10}{:>8}{:>7}{}{:>11}{:>12}{:>9}\n",
            process.id,
            process.arrival.get(),
            process.burst,
            priority,
            process.completion.get(),
            process.turnaround,
            process.waiting
        ));
    }

    out
}

/// One line timeline: `| A 0..5 | B 5..8 |`, idle gaps called out.
fn render_gantt(trace: &GanttTrace) -> String {
    let mut out = String::from("Gantt:");
    let mut previous_end: Option<usize> = None;

    for segment in trace.segments() {
        if let Some(end) = previous_end {
            if segment.start.get() > end {
                out.push_str(&format!(" | idle {}..{}", end, segment.start.get()));
            }
        }
        out.push_str(&format!(
            " | {} {}..{}",
            segment.id,
            segment.start.get(),
            segment.end.get()
        ));
        previous_end = Some(segment.end.get());
    }

    out.push_str(" |");
    out
}
