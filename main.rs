use std::path::PathBuf;
use clap::{Parser, Subcommand};

use apvocab::{Entity, LD, Registry};

#[derive(Parser)]
/// read, check and rewrite activitystreams documents
struct Args {
	#[clap(subcommand)]
	/// command to run
	command: Mode,

	/// path to config file, leave empty to not use any
	#[arg(short, long)]
	config: Option<PathBuf>,

	#[arg(long, default_value_t=false)]
	/// run with debug level tracing
	debug: bool,
}

#[derive(Clone, Subcommand)]
enum Mode {
	/// print current or default configuration
	Config,

	/// decode a document and write it back out, dropping nothing it didn't understand
	Normalize {
		/// json file to read, stdin if not given
		input: Option<PathBuf>,

		#[arg(long)]
		/// add @context to output, overrides config value
		context: Option<bool>,

		#[arg(long, default_value_t=false)]
		/// indent output, overrides config value
		pretty: bool,
	},

	/// list which alternative every property of a document was decoded as
	Inspect {
		/// json file to read, stdin if not given
		input: Option<PathBuf>,
	},
}

fn main() {
	let args = Args::parse();

	tracing_subscriber::fmt()
		.compact()
		.with_max_level(if args.debug { tracing::Level::DEBUG } else { tracing::Level::INFO })
		.init();

	let config = apvocab::Config::load(args.config.as_ref());

	if let Err(e) = run(args.command, config) {
		tracing::error!("{e}");
		std::process::exit(1);
	}
}

fn run(command: Mode, config: apvocab::Config) -> Result<(), Box<dyn std::error::Error>> {
	let registry = Registry::activitystreams().with_config(config.decode.clone());

	match command {
		Mode::Config => println!("{}", toml::to_string_pretty(&config)?),

		Mode::Normalize { input, context, pretty } => {
			let entity = registry.decode_value(&read(input.as_ref())?)?;
			let mut out = entity.serialize()?;
			if context.unwrap_or(config.output.context) {
				out = out.ld_context();
			}
			let out = serde_json::Value::Object(out);
			if pretty || config.output.pretty {
				println!("{}", serde_json::to_string_pretty(&out)?);
			} else {
				println!("{}", serde_json::to_string(&out)?);
			}
		},

		Mode::Inspect { input } => {
			let entity = registry.decode_value(&read(input.as_ref())?)?;
			inspect(&entity, 0);
		},
	}

	Ok(())
}

fn read(path: Option<&PathBuf>) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
	let raw = match path {
		Some(path) => std::fs::read_to_string(path)?,
		None => std::io::read_to_string(std::io::stdin())?,
	};
	tracing::debug!("read {} bytes of input", raw.len());
	Ok(serde_json::from_str(&raw)?)
}

fn inspect(entity: &Entity, indent: usize) {
	let pad = "  ".repeat(indent);
	match entity.id() {
		Some(id) => println!("{pad}{} <{id}>", entity.type_name()),
		None => println!("{pad}{}", entity.type_name()),
	}
	for property in entity.schema().all_properties() {
		for (i, value) in entity.values(property).iter().enumerate() {
			match (value.kind(), value.as_entity()) {
				(_, Some(nested)) => {
					println!("{pad}  {}[{i}]: {}", property.name, value.kind().map(|k| k.to_string()).unwrap_or_default());
					inspect(nested, indent + 2);
				},
				(Some(kind), None) => println!("{pad}  {}[{i}]: {kind}", property.name),
				(None, None) => println!("{pad}  {}[{i}]: unknown", property.name),
			}
		}
		if let Some(map) = entity.language_map(property) {
			println!("{pad}  {}Map: {} languages", property.name, map.len());
		}
	}
	for key in entity.unknown().keys() {
		println!("{pad}  {key}: not in vocabulary");
	}
}
