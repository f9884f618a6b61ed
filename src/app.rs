use std::io::{BufWriter, stdout};

use crate::{
    common::error::AppError,
    io::{reader, writer},
    worker::processor::{Outcome, Processor},
};

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    if args.len() < 2 {
        return Err(AppError::MissingArg);
    }
    let script_path = &args[1];

    let file = std::fs::File::open(script_path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let mut processor = Processor::new();
    let (mut applied, mut declined, mut rejected) = (0usize, 0usize, 0usize);

    for command in reader::read_commands(&mut reader) {
        let command = command.map_err(AppError::Parse)?;
        match processor.process(command)? {
            Outcome::Applied => applied += 1,
            Outcome::Declined => declined += 1,
            Outcome::Rejected(_) => rejected += 1,
        }
    }
    tracing::info!(script = %script_path, applied, declined, rejected, "replay finished");

    let wallet = processor
        .wallet()
        .ok_or_else(|| AppError::Process("script never opened a wallet".into()))?;

    let stdout = stdout();
    let writer = BufWriter::new(stdout.lock());
    writer::write_wallet(writer, wallet)?;

    Ok(())
}
