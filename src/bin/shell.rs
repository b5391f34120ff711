//! Fatlite interactive shell
//!
//! Line-oriented front end over the in-memory allocation table.

use clap::Parser;
use fatlite::shell::{self, Command};
use fatlite::AllocationTable;
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(name = "fatlite-shell")]
#[command(about = "Interactive shell for a FAT-style allocation table")]
struct Args {
    /// Log allocation decisions (debug level)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .init();

    let mut table = AllocationTable::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // End of input behaves like `exit`.
            break;
        }

        match shell::parse(&line) {
            Ok(Command::Put { name, size }) => {
                if let Err(err) = table.create(&name, size) {
                    println!("{}", err);
                }
            }
            Ok(Command::Del { name }) => {
                if let Err(err) = table.delete(&name) {
                    println!("{}", err);
                }
            }
            Ok(Command::Bitmap) => print!("{}", table.dump_bitmap()),
            Ok(Command::Inodes) => print!("{}", table.dump_chains()),
            Ok(Command::Exit) => {
                println!("Goodbye!");
                break;
            }
            Err(message) => println!("{}", message),
        }
    }

    Ok(())
}
