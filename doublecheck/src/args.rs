use clap::Parser;
use doublecheck_telemetry::LogFormat;

/// DoubleCheck MCP server
#[derive(Debug, Parser)]
#[command(
    name = "doublecheck",
    version,
    about = "Second-opinion plan and code reviews from hosted models, served over MCP stdio"
)]
pub struct Args {
    /// Log filter directives, e.g. `info` or `doublecheck_llm=debug`
    #[arg(long, default_value = "info", env = "DOUBLECHECK_LOG")]
    pub log_filter: String,

    /// Log line format written to stderr
    #[arg(long, default_value_t = LogFormat::Text, env = "DOUBLECHECK_LOG_FORMAT")]
    pub log_format: LogFormat,
}
