use std::{env, path::PathBuf};

use color_eyre::eyre::{self, OptionExt, bail};

mod domain;
mod engine;
mod error;
mod ingest;
mod report;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let args = parse_args()?;
    let from_date = args
        .from
        .as_deref()
        .map(engine::parse_from_date)
        .transpose()?;

    let orders = ingest::read_orders(&args.path)?;
    let stats = engine::aggregate(&orders, from_date);

    println!("{}", report::format_report(&stats));
    Ok(())
}

struct Args {
    path: PathBuf,
    from: Option<String>,
}

fn parse_args() -> eyre::Result<Args> {
    let mut args = env::args();
    args.next(); // Skip the program name

    let path = args
        .next()
        .ok_or_eyre("Please provide the path to the orders JSONL file.")?;

    let mut from = None;
    if let Some(flag) = args.next() {
        match flag.as_str() {
            // The original export tooling spelled this flag "-from".
            "--from" | "-from" => {
                from = Some(
                    args.next()
                        .ok_or_eyre("The --from flag requires a date (YYYY-MM-DD).")?,
                );
            }
            other => bail!("Unknown argument: {other}"),
        }
    }

    if args.next().is_some() {
        bail!("Too many arguments provided. Usage: revenue-engine <orders.jsonl> [--from YYYY-MM-DD]");
    }

    Ok(Args {
        path: PathBuf::from(path),
        from,
    })
}
