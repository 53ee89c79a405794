use std::fs::File;
use std::io::{stdin, stdout, Read, Write};

use anyhow::Context;
use clap::Parser;

mod convert;

#[derive(Parser, Debug)]
struct Args {
    /// Input file holding a CBOR-encoded Dhall expression; use "-" for stdin
    #[clap(short, long, default_value = "-")]
    input: String,

    /// Output file to write the decoded expression to; use "-" for stdout
    #[clap(short, long, default_value = "-")]
    output: String,

    /// Re-encode the decoded expression and report whether the re-serialized bytes
    /// match the input
    #[clap(short, long)]
    check: bool,
}

fn open_input(path: &str) -> anyhow::Result<Box<dyn Read>> {
    if path == "-" {
        Ok(Box::new(stdin()))
    } else {
        Ok(Box::new(
            File::open(path).with_context(|| format!("opening input file `{}`", path))?,
        ))
    }
}

fn open_output(path: &str) -> anyhow::Result<Box<dyn Write>> {
    if path == "-" {
        Ok(Box::new(stdout()))
    } else {
        Ok(Box::new(
            File::create(path).with_context(|| format!("opening output file `{}`", path))?,
        ))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut bytes = Vec::new();
    open_input(&args.input)?
        .read_to_end(&mut bytes)
        .context("reading CBOR bytes")?;

    let raw: serde_cbor::Value =
        serde_cbor::from_slice(&bytes).context("parsing input as CBOR")?;
    let item = convert::from_serde(&raw);

    let expr = dhall_cbor::decode(&item).context("decoding Dhall expression from CBOR")?;

    let mut output = open_output(&args.output)?;
    writeln!(output, "{:#?}", expr).context("writing decoded expression")?;

    if args.check {
        let reencoded = dhall_cbor::encode(&expr);
        let reencoded_bytes =
            serde_cbor::to_vec(&convert::to_serde(&reencoded)).context("re-serializing CBOR")?;
        if reencoded_bytes == bytes {
            eprintln!("round trip: bytes match");
        } else {
            eprintln!("round trip: bytes differ from input");
        }
    }

    Ok(())
}
