#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct Config {
	#[serde(default)]
	pub decode: DecodeConfig,

	#[serde(default)]
	pub output: OutputConfig,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct DecodeConfig {
	#[serde_inline_default(crate::registry::DEFAULT_MAX_DEPTH)]
	/// how many embedded entities may nest inside each other before decoding gives up
	pub max_depth: usize,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct OutputConfig {
	#[serde_inline_default(true)]
	/// add the activitystreams @context to documents written out
	pub context: bool,

	#[serde(default)]
	/// indent json output
	pub pretty: bool,
}

impl Config {
	pub fn load(path: Option<&std::path::PathBuf>) -> Self {
		let Some(cfg_path) = path else { return Config::default() };
		match std::fs::read_to_string(cfg_path) {
			Ok(x) => match toml::from_str(&x) {
				Ok(cfg) => return cfg,
				Err(e) => tracing::error!("failed parsing config file: {e}"),
			},
			Err(e) => tracing::error!("failed reading config file: {e}"),
		}
		Config::default()
	}
}
