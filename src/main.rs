//! Console demonstrations of the two trees: `tree-demo btree` walks an integer tree and
//! `tree-demo jobs` runs the job sorter.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colored::Colorize;
use ordered_tree::{IntTree, Job, JobKey, JobTree, TreeError};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    disable_help_subcommand = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a small integer tree and print it both ways
    Btree,

    /// Sort, query and delete jobs keyed by year and job number
    Jobs(JobsArgs),
}

#[derive(Args, Debug)]
struct JobsArgs {
    /// print jobs from newest to oldest
    #[arg(long)]
    descending: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Btree => run_btree(),
        Commands::Jobs(arguments) => run_jobs(arguments),
    }
}

fn rule(c: char, n: usize) {
    println!("{}", c.to_string().repeat(n));
}

fn run_btree() -> Result<()> {
    let mut tree = IntTree::new();
    for key in [90, 100, 23, 20, 120, 10, 14] {
        tree.insert_key(key)?;
    }

    rule('-', 40);
    match tree.search(&23) {
        Ok(()) => println!("Value 23 FOUND In Tree!"),
        Err(_) => println!("Value 23 NOT FOUND In Tree"),
    }

    rule('-', 40);
    println!("Minimum key value: {}", tree.minimum()?.0);
    println!("Maximum key value: {}", tree.maximum()?.0);

    rule('-', 40);
    println!("Low to High: ");
    for key in tree.keys() {
        println!("{key}");
    }
    rule('*', 15);
    println!("High to Low: ");
    for (key, ()) in tree.iter_rev() {
        println!("{key}");
    }

    rule('-', 40);
    Ok(())
}

fn run_jobs(arguments: &JobsArgs) -> Result<()> {
    let mut jobs = JobTree::new();

    let new_jobs = [
        (JobKey::new(12, 1), Job::new(15000.0, 32000.0)),
        (JobKey::new(10, 5), Job::new(25000.0, 22000.0)),
        (JobKey::new(10, 3), Job::new(300.0, 800.0)),
        (JobKey::new(10, 6), Job::new(400.0, 400.0)),
        (JobKey::new(11, 35), Job::new(250000.0, 262000.0)),
        (JobKey::new(21, 7), Job::new(18000.0, 22000.0)),
        (JobKey::new(21, 4), Job::new(0.0, 19000.0)),
        (JobKey::new(21, 2), Job::default()),
    ];
    for (key, job) in new_jobs {
        if jobs.insert(key, job) == Err(TreeError::AlreadyExists) {
            println!("{}", format!("[!] JOB {key} Already Exists.").yellow());
        }
    }

    print_jobs(&jobs, arguments.descending);
    print_oldest(&jobs);
    if let Ok((key, _)) = jobs.newest() {
        println!("Newest Job: {key}");
    }
    rule('-', 40);

    for (year, number) in [(10, 5), (21, 4), (10, 3)] {
        match jobs.delete_job(year, number) {
            Ok(_) => {}
            Err(TreeError::EmptyTree) => println!("[*] Tree Empty. Nothing To Delete."),
            Err(_) => {
                let key = JobKey::new(year, number);
                println!("{}", format!("Job: {key} Not Found.").red());
            }
        }
    }

    print_jobs(&jobs, arguments.descending);
    print_oldest(&jobs);
    Ok(())
}

fn print_jobs(jobs: &JobTree, descending: bool) {
    let entries = if descending {
        jobs.descending()
    } else {
        jobs.ascending()
    };
    let Ok(entries) = entries else {
        println!("{}", "[!] No Jobs To Display".red());
        return;
    };

    for (key, job) in entries {
        println!("JOB: {key}");
        rule('-', 14);
        println!("\tEstimate: {}", money(job.estimate));
        println!("\tCost: {}", money(job.cost));
        println!("\tProfit/Loss: {}", money(job.profit()));
        rule('-', 40);
    }
}

fn print_oldest(jobs: &JobTree) {
    match jobs.oldest() {
        Ok((key, _)) => println!("Oldest Job: {key}"),
        Err(_) => println!("{}", "[!] No Jobs To Search".red()),
    }
}

/// Formats an amount as dollars with thousands separators, e.g. `-$3,000.00`.
fn money(amount: f32) -> String {
    let cents = (f64::from(amount) * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();

    let dollars = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{:02}", cents % 100)
}
