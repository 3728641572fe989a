//! chainsend CLI — call EVM nodes and decode reverts from the terminal.
//!
//! Usage:
//! ```bash
//! # Send a raw JSON-RPC call
//! chainsend call --url https://cloudflare-eth.com --method eth_blockNumber --decode uint
//!
//! # Decode revert data against known error signatures
//! chainsend decode-revert --data 0x4e487b71... --error "InsufficientBalance(address,uint256)"
//!
//! # Current gas price with the default buffer applied
//! chainsend gas-price --url https://cloudflare-eth.com
//! ```

use std::env;
use std::process;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use tracing_subscriber::EnvFilter;

use chainsend_core::{CallOptions, DecodeMode, DecodedValue, RpcClient};
use chainsend_http::ReqwestTransport;
use chainsend_revert::decode_revert;
use chainsend_tx::{resolve_gas_price, FeePolicy};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "call" => cmd_call(&args[2..]).await,
        "decode-revert" => cmd_decode_revert(&args[2..]),
        "gas-price" => cmd_gas_price(&args[2..]).await,
        "version" | "--version" | "-V" => {
            println!("chainsend {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn print_usage() {
    println!("chainsend {}", env!("CARGO_PKG_VERSION"));
    println!("Call EVM nodes and decode reverts\n");
    println!("USAGE:");
    println!("    chainsend <COMMAND>\n");
    println!("COMMANDS:");
    println!("    call           Send a raw JSON-RPC call");
    println!("    decode-revert  Decode hex revert data against known signatures");
    println!("    gas-price      Current gas price with the default buffer applied");
    println!("    version        Print version");
    println!("    help           Print this help\n");
    println!("CALL FLAGS:");
    println!("    --url <URL>       RPC endpoint URL            [required]");
    println!("    --method <NAME>   JSON-RPC method             [required]");
    println!("    --param <VALUE>   Positional parameter        (repeatable)");
    println!("    --decode <MODE>   Result decoding: hex | uint");
    println!("    --error <SIG>     Known revert signature      (repeatable)");
    println!("    --timeout <MS>    Request timeout, default 30000\n");
    println!("DECODE-REVERT FLAGS:");
    println!("    --data <HEX>      Revert data (0x-prefixed)   [required]");
    println!("    --error <SIG>     Known revert signature      (repeatable)\n");
    println!("GAS-PRICE FLAGS:");
    println!("    --url <URL>       RPC endpoint URL            [required]");
    println!("    --buffer <N>      Base-fee buffer, default 1.20");
}

async fn cmd_call(args: &[String]) -> anyhow::Result<()> {
    let url = parse_flag(args, "--url").ok_or_else(|| anyhow!("--url is required"))?;
    let method = parse_flag(args, "--method").ok_or_else(|| anyhow!("--method is required"))?;

    let params = parse_repeated(args, "--param")
        .into_iter()
        .map(|p| serde_json::from_str(&p).unwrap_or(serde_json::Value::String(p)))
        .collect();

    let opts = CallOptions {
        decode: match parse_flag(args, "--decode").as_deref() {
            None => DecodeMode::None,
            Some("hex") => DecodeMode::Hex,
            Some("uint") => DecodeMode::HexUint,
            Some(other) => return Err(anyhow!("unknown decode mode: {other}")),
        },
        errors: parse_repeated(args, "--error"),
        timeout_ms: parse_flag(args, "--timeout")
            .map(|t| t.parse::<u64>().context("--timeout must be an integer"))
            .transpose()?,
        ..Default::default()
    };

    let client = RpcClient::new(&url, Arc::new(ReqwestTransport::new()));
    match client.call(&method, params, &opts).await? {
        DecodedValue::Raw(value) => {
            println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default())
        }
        DecodedValue::Bytes(bytes) => println!("0x{}", hex::encode(bytes)),
        DecodedValue::Uint(v) => println!("{v}"),
    }
    Ok(())
}

fn cmd_decode_revert(args: &[String]) -> anyhow::Result<()> {
    let data_hex = parse_flag(args, "--data").ok_or_else(|| anyhow!("--data is required"))?;
    let errors = parse_repeated(args, "--error");

    let stripped = data_hex.strip_prefix("0x").unwrap_or(&data_hex);
    let data = hex::decode(stripped).context("--data is not valid hex")?;

    let decoded = decode_revert(&data, &errors);
    println!("{decoded}");
    Ok(())
}

async fn cmd_gas_price(args: &[String]) -> anyhow::Result<()> {
    let url = parse_flag(args, "--url").ok_or_else(|| anyhow!("--url is required"))?;
    let mut policy = FeePolicy::default();
    if let Some(buffer) = parse_flag(args, "--buffer") {
        policy.base_fee_buffer = buffer.parse().context("--buffer must be a number")?;
    }

    let client = RpcClient::new(&url, Arc::new(ReqwestTransport::new()));
    let price = resolve_gas_price(&policy, &client, &CallOptions::default()).await?;
    println!("{price} wei");
    Ok(())
}

fn parse_flag(args: &[String], flag: &str) -> Option<String> {
    let pos = args.iter().position(|a| a == flag)?;
    args.get(pos + 1).cloned()
}

fn parse_repeated(args: &[String], flag: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut i = 0;
    while i < args.len() {
        if args[i] == flag {
            if let Some(value) = args.get(i + 1) {
                values.push(value.clone());
            }
            i += 1;
        }
        i += 1;
    }
    values
}
