// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::process;

use anyhow::{bail, Context, Result};
use iqa_harness::components::Protocol;
use iqa_harness::traits::Executor;
use iqa_harness::Instance;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Parsed command line.
struct Args {
    inventory: String,
    extra_vars: Vec<String>,
    refresh: bool,
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {} <inventory.yml> [-e key=value]... [--refresh]\n\
         Example: {} inventories/interop.yml -e executor=ssh --refresh",
        program, program
    )
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut inventory = None;
    let mut extra_vars = Vec::new();
    let mut refresh = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-e" | "--extra-vars" => {
                let value = iter.next().context("-e requires a key=value argument")?;
                extra_vars.push(value.clone());
            }
            "--refresh" => refresh = true,
            other if other.starts_with('-') => bail!("unknown option '{}'", other),
            other => {
                if inventory.replace(other.to_string()).is_some() {
                    bail!("only one inventory file may be given");
                }
            }
        }
    }

    Ok(Args {
        inventory: inventory.context("missing inventory file")?,
        extra_vars,
        refresh,
    })
}

fn protocol_names(protocols: &[Protocol]) -> String {
    protocols.iter().map(Protocol::name).collect::<Vec<_>>().join(", ")
}

fn run(args: Args) -> Result<()> {
    let instance = Instance::load(&args.inventory, args.extra_vars.as_slice())
        .with_context(|| format!("failed to discover components from {}", args.inventory))?;

    println!("🔎 Inventory: {}", args.inventory);
    println!("═══════════════════════════════════");

    println!("Nodes ({}):", instance.nodes().len());
    for node in instance.nodes() {
        println!("  • {:<16} {:<16} {}", node.hostname(), node.address(), node.executor().name());
    }

    println!("\nComponents ({}):", instance.components().len());
    for component in instance.components() {
        println!(
            "  • {:<8} {:<28} {:<10} [{}]",
            component.kind(),
            component.name(),
            component.implementation(),
            protocol_names(component.supported_protocols())
        );
    }

    let skipped: Vec<_> = instance
        .report()
        .iter()
        .filter_map(|report| report.skip_reason.as_ref().map(|reason| (&report.hostname, reason)))
        .collect();
    if !skipped.is_empty() {
        println!("\nSkipped:");
        for (hostname, reason) in skipped {
            println!("  ⚠️  {}: {}", hostname, reason);
        }
    }

    if args.refresh {
        for broker in instance.brokers() {
            println!("\n{}", "─".repeat(60));
            match broker.try_refresh() {
                Ok(snapshot) => {
                    println!("📬 {} ({} addresses)", broker.name(), snapshot.addresses().len());
                    for address in snapshot.addresses() {
                        println!("  {} [{}]", address.name, address.routing_type);
                        for queue in &address.queues {
                            println!(
                                "    └─ {} [{}] messages={}",
                                queue.name, queue.routing_type, queue.message_count
                            );
                        }
                    }
                }
                Err(e) => println!("❌ {}: {}", broker.name(), e),
            }
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let argv: Vec<String> = env::args().collect();
    let program = argv.first().map(String::as_str).unwrap_or("iqa-harness");

    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}\n{}", e, usage(program));
            process::exit(2);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("❌ {:#}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("iqa-harness")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_args() {
        let args = parse_args(&argv(&["inv.yml", "-e", "a=1", "--refresh", "--extra-vars", "b=2"])).unwrap();

        assert_eq!(args.inventory, "inv.yml");
        assert_eq!(args.extra_vars, vec!["a=1", "b=2"]);
        assert!(args.refresh);
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(&argv(&[])).is_err());
        assert!(parse_args(&argv(&["inv.yml", "-e"])).is_err());
        assert!(parse_args(&argv(&["inv.yml", "--verbose"])).is_err());
        assert!(parse_args(&argv(&["a.yml", "b.yml"])).is_err());
    }
}
