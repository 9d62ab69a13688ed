//! Plugpoint host binary: resolves a variant selection, loads that variant's
//! module set and exercises the service extension points.
//!
//! Selection and loading failures become a non-zero exit code; everything
//! else is printed for the operator.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use plugpoint_core::{
    ExtensionRegistry, VariantCatalog, VariantLoader, VariantSelector,
};
use plugpoint_services::address::{AddressParts, AddressPoint};
use plugpoint_services::greeting::GreeterPoint;
use plugpoint_services::name::NamePoint;

/// Country-variant extension point host.
#[derive(Parser, Debug)]
#[command(name = "plugpoint")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Action to perform.
    #[command(subcommand)]
    command: Command,

    /// Verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Command {
    /// List discovered variant packages.
    Variants,
    /// List declared extension points.
    Points {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Load a variant and run the service demo.
    Demo {
        /// Variant code; falls back to the environment, then the config
        /// file.
        #[arg(short = 'c', long)]
        variant: Option<String>,

        /// Name to greet.
        #[arg(long, default_value = "World")]
        name: String,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "plugpoint=debug"
    } else {
        "plugpoint=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut registry = ExtensionRegistry::new();
    plugpoint_services::declare_all(&mut registry);
    let mut loader =
        VariantLoader::new(VariantCatalog::from_packages(plugpoint_variants::PACKAGES));

    match args.command {
        Command::Variants => {
            for code in loader.available_variants() {
                let location = loader
                    .catalog()
                    .get(&code)
                    .map(|p| p.location)
                    .unwrap_or_default();
                println!("{code}\t{location}");
            }
        }
        Command::Points { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&registry.infos())?);
            } else {
                for info in registry.infos() {
                    let active = info.active_override.as_deref().unwrap_or("-");
                    println!("{}\tbase={}\toverride={active}", info.name, info.base_type);
                }
            }
        }
        Command::Demo { variant, name } => {
            run_demo(&mut registry, &mut loader, variant.as_deref(), &name)?;
        }
    }
    Ok(())
}

fn run_demo(
    registry: &mut ExtensionRegistry,
    loader: &mut VariantLoader,
    variant: Option<&str>,
    name: &str,
) -> Result<()> {
    tracing::info!(available = ?loader.available_variants(), "starting demo");

    let code = VariantSelector::new()
        .resolve(variant)
        .context("no variant could be selected")?;
    loader
        .load_variant(registry, &code)
        .with_context(|| format!("failed to load variant '{code}'"))?;
    tracing::info!(loaded = ?loader.loaded_variants(), points = ?registry.list_extension_points(), "variant active");

    println!("=== Greetings ===");
    let greeter = registry.construct::<GreeterPoint>(());
    println!("Implementation: {}", greeter.type_name());
    match greeter.say_hello(name) {
        Ok(message) => println!("Hello: {message}"),
        Err(err) => println!("Hello failed: {err}"),
    }
    println!("Hello again: {}", greeter.say_hello_again());
    println!("Goodbye: {}", greeter.say_goodbye(name));
    println!(
        "Message end: '{}'",
        registry.shared::<GreeterPoint>().message_end()
    );
    println!("Name: {}", registry.shared::<NamePoint>().get());

    // Postal codes appropriate for the active variant, one valid and one
    // not, so the demo shows validation on both paths.
    let (valid, invalid) = if code == "hu" {
        ("8200", "10 0")
    } else {
        ("12345", "   ")
    };

    println!("=== Addresses ===");
    let address = registry.construct::<AddressPoint>(AddressParts::new(
        "123 Main Street",
        "Budapest",
        valid,
    ));
    println!("Implementation: {}", address.type_name());
    match address.format() {
        Ok(formatted) => println!("Address: {formatted}"),
        Err(err) => println!("Address failed: {err}"),
    }

    let address = registry.construct::<AddressPoint>(AddressParts::new(
        "456 Oak Avenue",
        "Vienna",
        invalid,
    ));
    match address.format() {
        Ok(formatted) => println!("Unexpected address: {formatted}"),
        Err(err) => println!("Rejected '{invalid}': {err}"),
    }

    Ok(())
}
