// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::{Read, Write};
use std::path::Path;

use fanyi::app_config::{Config, LogLevel};
use fanyi::PromptRequest;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a prompt translating Chinese text into English
    Zh2en {
        /// Text to translate, or '-' to read stdin
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Build a prompt translating English text into Chinese
    En2zh {
        /// Text to translate, or '-' to read stdin
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Build a prompt polishing Chinese or English text
    Polish {
        /// Text to polish, or '-' to read stdin
        #[arg(value_name = "TEXT")]
        text: String,

        /// Language of the text ('zh' or 'en'); defaults to the configured language
        #[arg(short = 'L', long)]
        lang: Option<String>,
    },

    /// Generate shell completions for fanyi
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// fanyi - prompt builder for AI translation and polishing
///
/// Prints the instruction to send to an AI text-generation service. The
/// service itself is not contacted.
#[derive(Parser, Debug)]
#[command(name = "fanyi")]
#[command(version)]
#[command(about = "Build prompts for AI translation and text polishing")]
#[command(long_about = "fanyi prints ready-to-send prompts for Chinese/English translation and text polishing.

EXAMPLES:
    fanyi zh2en 你好                           # Chinese to English prompt
    fanyi en2zh serendipity                    # English to Chinese prompt
    fanyi polish --lang en \"This are a test.\"  # Polish English text
    cat draft.txt | fanyi polish -             # Polish text read from stdin
    fanyi completions bash > fanyi.bash        # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Coloured stderr logger
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour and label for a level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (colour, label) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                colour, now, label, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // The logger accepts everything; the effective level is set through
    // log::set_max_level once the config is known.
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "fanyi", &mut std::io::stdout());
        return Ok(());
    }

    // If log level is set via command line, apply it before touching the config
    if let Some(cmd_log_level) = cli.log_level {
        log::set_max_level(LogLevel::from(cmd_log_level).to_level_filter());
    }

    let config = Config::load_or_create(Path::new(&cli.config_path))?;
    config.validate().context("Configuration validation failed")?;

    if cli.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let request = build_request(cli.command, &config)?;
    debug!("Building {} prompt", request.kind());

    let prompt = request.build();
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", prompt).context("Failed to write prompt to stdout")?;

    Ok(())
}

fn build_request(command: Commands, config: &Config) -> Result<PromptRequest> {
    let request = match command {
        Commands::Zh2en { text } => PromptRequest::ChineseToEnglish {
            text: read_text(text)?,
        },
        Commands::En2zh { text } => PromptRequest::EnglishToChinese {
            text: read_text(text)?,
        },
        Commands::Polish { text, lang } => PromptRequest::Polish {
            language: config.resolve_polish_language(lang.as_deref())?,
            text: read_text(text)?,
        },
        Commands::Completions { .. } => {
            return Err(anyhow!("The completions command does not build a prompt"));
        }
    };

    Ok(request)
}

// '-' means the text comes from stdin; one trailing line break is dropped
fn read_text(arg: String) -> Result<String> {
    if arg != "-" {
        return Ok(arg);
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read text from stdin")?;

    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }

    Ok(text)
}
