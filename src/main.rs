//! Textforge - text toolbox
//!
//! Command-line front end for the tool catalog, converters, generators and
//! AI helpers.

use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use textforge::{
    ai::{self, ChatSession, HttpCompletion},
    document, qr,
    search::search,
    transformers::{
        self, CharClasses, Color, ListSpec, PercentMode, RegexFlags, Rgb, ReverseMode, ScrambleMode, SizeUnit,
        SortOrder,
    },
    is_sentinel, ClipboardManager, Config, Tool, ToolOptions,
};

#[derive(Parser)]
#[command(name = "textforge")]
#[command(author = "Textforge Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Text transforms, converters and generators for the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log each step to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Copy the result to the clipboard
    #[arg(long, global = true)]
    copy: bool,

    /// Also write the result to this file
    #[arg(short, long, global = true, value_name = "PATH")]
    output: Option<PathBuf>,
}

/// Where a command's text comes from. Stdin is read when nothing else is given.
#[derive(Args)]
struct InputArgs {
    /// Input text
    text: Option<String>,

    /// Read input from a file
    #[arg(short, long, value_name = "PATH", conflicts_with_all = ["text", "paste"])]
    file: Option<PathBuf>,

    /// Read input from the clipboard
    #[arg(long, conflicts_with = "text")]
    paste: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the text tools accepted by `apply`
    List,

    /// Find tools by name or description
    Search {
        query: Vec<String>,
    },

    /// Run a text tool
    Apply {
        /// Tool name, e.g. "title-case" or "extract-emails"
        tool: String,

        #[command(flatten)]
        input: InputArgs,

        /// Treat differently-cased duplicates as distinct
        #[arg(long, conflicts_with = "ignore_case")]
        case_sensitive: bool,

        /// Treat differently-cased duplicates as the same
        #[arg(long)]
        ignore_case: bool,

        /// Line order for sort-lines
        #[arg(long, value_enum)]
        order: Option<OrderArg>,

        /// Unit for reverse-text and scramble
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Leave emails out of entity-extractor output
        #[arg(long)]
        no_emails: bool,

        /// Leave URLs out of entity-extractor output
        #[arg(long)]
        no_urls: bool,

        /// Leave phone numbers out of entity-extractor output
        #[arg(long)]
        no_phones: bool,
    },

    /// Test a regular expression against some text
    Regex {
        pattern: String,

        #[command(flatten)]
        input: InputArgs,

        /// Only the first match, followed by its capture groups
        #[arg(long)]
        first: bool,

        #[arg(short = 'i', long)]
        ignore_case: bool,

        /// `^` and `$` match at line boundaries
        #[arg(short, long)]
        multiline: bool,
    },

    /// Show a file size in every unit from B to PB
    #[command(allow_negative_numbers = true)]
    FileSize {
        value: f64,

        /// B, KB, MB, GB, TB or PB
        #[arg(default_value = "B")]
        unit: SizeUnit,
    },

    /// Generate a numbered list
    #[command(allow_negative_numbers = true)]
    Sequence {
        #[arg(long, default_value_t = 1.0)]
        start: f64,

        #[arg(long, default_value_t = 10.0)]
        end: f64,

        #[arg(long, default_value_t = 1.0)]
        step: f64,

        #[arg(long, default_value = "")]
        prefix: String,

        #[arg(long, default_value = "")]
        suffix: String,
    },

    /// Convert between Unix timestamps and dates
    Timestamp {
        #[command(subcommand)]
        command: TimestampCommand,
    },

    /// Convert a color between HEX, RGB and HSL
    Color {
        /// Hex color, e.g. "#FF5733"
        #[arg(required_unless_present = "rgb")]
        hex: Option<String>,

        #[arg(long, num_args = 3, value_names = ["R", "G", "B"], conflicts_with = "hex")]
        rgb: Option<Vec<u8>>,
    },

    /// Generate a random string
    Random {
        #[arg(short, long)]
        length: Option<usize>,

        #[command(flatten)]
        classes: ClassArgs,
    },

    /// Render text as a QR code PNG
    Qr {
        #[command(flatten)]
        input: InputArgs,

        /// Edge length in pixels
        #[arg(long)]
        size: Option<u32>,

        /// Print the image as a data URL
        #[arg(long)]
        data_url: bool,
    },

    /// Exact age from a birth date (YYYY-MM-DD)
    Age {
        birth_date: String,
    },

    /// Percentage calculations
    #[command(allow_negative_numbers = true)]
    Percent {
        #[arg(value_enum)]
        mode: PercentArg,

        percent: f64,

        value: f64,
    },

    /// AI writing tools
    Ai {
        #[command(subcommand)]
        command: AiCommand,
    },

    /// Chat with the AI assistant
    Chat,

    /// Show or change settings
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum TimestampCommand {
    /// Seconds or milliseconds since the epoch to a date
    ToDate { timestamp: String },

    /// Local date (YYYY-MM-DDTHH:MM) to seconds since the epoch
    FromDate { date: String },

    /// Current time in seconds since the epoch
    Now,
}

#[derive(Subcommand)]
enum AiCommand {
    /// Summarize text or a PDF/TXT document
    Summarize {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Rewrite text to be clearer
    Rewrite {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Replace simple words with richer synonyms
    Synonyms {
        #[command(flatten)]
        input: InputArgs,
    },

    /// List words that are not English
    Foreign {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the current settings
    Show,

    /// Print the settings file location
    Path,

    /// Change one setting, e.g. `config set ai.model openai/gpt-4o`
    Set { key: String, value: String },
}

#[derive(Args)]
struct ClassArgs {
    #[arg(long, overrides_with = "no_uppercase")]
    uppercase: bool,
    #[arg(long)]
    no_uppercase: bool,
    #[arg(long, overrides_with = "no_lowercase")]
    lowercase: bool,
    #[arg(long)]
    no_lowercase: bool,
    #[arg(long, overrides_with = "no_digits")]
    digits: bool,
    #[arg(long)]
    no_digits: bool,
    #[arg(long, overrides_with = "no_symbols")]
    symbols: bool,
    #[arg(long)]
    no_symbols: bool,
}

impl ClassArgs {
    fn resolve(&self, defaults: CharClasses) -> CharClasses {
        fn toggle(on: bool, off: bool, default: bool) -> bool {
            if on {
                true
            } else if off {
                false
            } else {
                default
            }
        }
        CharClasses {
            uppercase: toggle(self.uppercase, self.no_uppercase, defaults.uppercase),
            lowercase: toggle(self.lowercase, self.no_lowercase, defaults.lowercase),
            digits: toggle(self.digits, self.no_digits, defaults.digits),
            symbols: toggle(self.symbols, self.no_symbols, defaults.symbols),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderArg {
    Asc,
    Desc,
    Random,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    #[value(alias = "chars")]
    Characters,
    Words,
    Lines,
    Letters,
}

#[derive(Clone, Copy, ValueEnum)]
enum PercentArg {
    Of,
    Increase,
    Decrease,
}

/// Where results go besides stdout
struct Sink {
    copy: bool,
    path: Option<PathBuf>,
}

impl Sink {
    fn emit(&self, result: &str) -> Result<()> {
        println!("{}", result);
        if let Some(ref path) = self.path {
            document::write_output(path, result.as_bytes())?;
        }
        self.copy_text(result)
    }

    fn copy_text(&self, result: &str) -> Result<()> {
        if !self.copy {
            return Ok(());
        }
        if is_sentinel(result) || result.is_empty() {
            info!("Nothing to copy");
            return Ok(());
        }
        ClipboardManager::set_text(result)?;
        eprintln!("Copied to clipboard.");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default();
    let sink = Sink { copy: cli.copy || config.copy_results, path: cli.output.clone() };

    match cli.command {
        Commands::List => list_tools(),
        Commands::Search { query } => search_tools(&query.join(" ")),
        Commands::Apply {
            tool,
            input,
            case_sensitive,
            ignore_case,
            order,
            mode,
            no_emails,
            no_urls,
            no_phones,
        } => {
            let mut options = ToolOptions {
                case_sensitive: match (case_sensitive, ignore_case) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                },
                ..ToolOptions::default()
            };
            if let Some(order) = order {
                options.sort_order = match order {
                    OrderArg::Asc => SortOrder::Ascending,
                    OrderArg::Desc => SortOrder::Descending,
                    OrderArg::Random => SortOrder::Random,
                };
            }
            if let Some(mode) = mode {
                options.reverse_mode = match mode {
                    ModeArg::Characters | ModeArg::Letters => ReverseMode::Characters,
                    ModeArg::Words => ReverseMode::Words,
                    ModeArg::Lines => ReverseMode::Lines,
                };
                options.scramble_mode = match mode {
                    ModeArg::Characters | ModeArg::Letters => ScrambleMode::Letters,
                    ModeArg::Words | ModeArg::Lines => ScrambleMode::Words,
                };
            }
            options.entities.emails = !no_emails;
            options.entities.urls = !no_urls;
            options.entities.phones = !no_phones;

            apply_tool(&tool, &input, &options, &sink)?;
        }
        Commands::Regex { pattern, input, first, ignore_case, multiline } => {
            let text = read_input(&input)?;
            let flags = RegexFlags { global: !first, ignore_case, multiline };
            let matches = transformers::test_regex(&pattern, flags, &text)?;
            if matches.is_empty() {
                eprintln!("No matches.");
            } else {
                eprintln!("{} match(es)", matches.len());
                sink.emit(&matches.join("\n"))?;
            }
        }
        Commands::FileSize { value, unit } => {
            let sizes = transformers::convert_file_size(value, unit);
            sink.emit(&transformers::format_file_sizes(&sizes))?;
        }
        Commands::Sequence { start, end, step, prefix, suffix } => {
            let list = transformers::generate_list(&ListSpec { start, end, step, prefix, suffix })?;
            if list.truncated {
                eprintln!("List truncated to {} items.", transformers::MAX_LIST_ITEMS);
            }
            sink.emit(&list.to_text())?;
        }
        Commands::Timestamp { command } => match command {
            TimestampCommand::ToDate { timestamp } => {
                let report = transformers::timestamp_to_date(&timestamp, &Local)?;
                sink.emit(&report.to_string())?;
            }
            TimestampCommand::FromDate { date } => {
                let seconds = transformers::date_to_timestamp(&date, &Local)?;
                sink.emit(&seconds.to_string())?;
            }
            TimestampCommand::Now => sink.emit(&Local::now().timestamp().to_string())?,
        },
        Commands::Color { hex, rgb } => {
            let color = match (hex, rgb) {
                (_, Some(channels)) => match channels[..] {
                    [r, g, b] => Color::from_rgb(Rgb { r, g, b }),
                    _ => bail!("--rgb expects exactly three values"),
                },
                (Some(hex), None) => Color::parse(&hex)?,
                (None, None) => bail!("Give a hex color or --rgb R G B"),
            };
            sink.emit(&color.to_string())?;
        }
        Commands::Random { length, classes } => {
            let length = length.unwrap_or(config.random_string.length);
            let classes = classes.resolve(config.random_string.classes);
            sink.emit(&transformers::random_string(length, classes)?)?;
        }
        Commands::Qr { input, size, data_url } => {
            let text = read_input(&input)?;
            let image = qr::generate_qr(&text, size.unwrap_or(config.qr_size))?;
            let path = cli.output.unwrap_or_else(|| PathBuf::from(qr::DEFAULT_FILE));
            document::write_output(&path, &image.png)?;
            eprintln!("Saved QR code to {}", path.display());

            let url = image.data_url();
            if data_url {
                println!("{}", url);
            }
            sink.copy_text(&url)?;
        }
        Commands::Age { birth_date } => {
            let age = transformers::age(&birth_date, Local::now().date_naive())?;
            sink.emit(&age.to_string())?;
        }
        Commands::Percent { mode, percent, value } => {
            let mode = match mode {
                PercentArg::Of => PercentMode::Of,
                PercentArg::Increase => PercentMode::Increase,
                PercentArg::Decrease => PercentMode::Decrease,
            };
            let result = transformers::percent(mode, percent, value);
            sink.emit(&transformers::format_unit_value(result))?;
        }
        Commands::Ai { command } => run_ai(command, &config, &sink).await?,
        Commands::Chat => run_chat(&config).await?,
        Commands::Config { command } => match command {
            ConfigCommand::Show => println!("{}", serde_json::to_string_pretty(&config)?),
            ConfigCommand::Path => println!("{}", Config::config_path()?.display()),
            ConfigCommand::Set { key, value } => {
                config.set(&key, &value)?;
                config.save()?;
                println!("{} = {}", key, value);
            }
        },
    }

    Ok(())
}

/// Log to stderr; `--verbose` raises our own output to debug, RUST_LOG overrides both
fn init_logging(verbose: bool) {
    let default = if verbose { "textforge=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Read text from the argument, a file, the clipboard or stdin
fn read_input(input: &InputArgs) -> Result<String> {
    if let Some(ref text) = input.text {
        return Ok(text.clone());
    }
    if let Some(ref path) = input.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    if input.paste {
        return ClipboardManager::get_text();
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Reading from stdin, end with Ctrl+D");
    }
    let mut text = String::new();
    stdin.read_to_string(&mut text).context("Failed to read stdin")?;
    // the newline `echo` and heredocs append is not part of the input
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    debug!("Read {} chars from stdin", text.len());
    Ok(text)
}

fn list_tools() {
    let tools = Tool::all(&ToolOptions::default());
    let mut category = "";
    for tool in &tools {
        if tool.category() != category {
            category = tool.category();
            println!("\n{}:", category);
        }
        println!("  {:<24} {}", tool.slug(), tool.display_name());
    }
}

fn search_tools(query: &str) {
    let results = search(query);
    if results.is_empty() {
        println!("No tools match '{}'.", query);
        return;
    }
    for info in results {
        println!("{}  ({})", info.title, info.href);
        println!("    {}", info.description);
    }
}

fn apply_tool(name: &str, input: &InputArgs, options: &ToolOptions, sink: &Sink) -> Result<()> {
    let tool = Tool::from_slug(name, options)
        .with_context(|| format!("Unknown tool: {} (see `textforge list`)", name))?;
    let text = read_input(input)?;
    let result = tool.apply(&text)?;
    if tool == Tool::DetectInvisible {
        eprintln!("{}", transformers::detect_invisible(&text).summary());
    }
    sink.emit(&result)
}

fn ai_input(input: &InputArgs, allow_documents: bool) -> Result<String> {
    match input.file {
        Some(ref path) if allow_documents => Ok(document::load_document(path)?),
        _ => read_input(input),
    }
}

async fn run_ai(command: AiCommand, config: &Config, sink: &Sink) -> Result<()> {
    let service = HttpCompletion::connect(&config.ai);
    let result = match command {
        AiCommand::Summarize { input } => {
            let text = ai_input(&input, true)?;
            ai::summarize(service.as_ref(), &text, config.ai.summary_char_limit).await?
        }
        AiCommand::Rewrite { input } => ai::rewrite(service.as_ref(), &ai_input(&input, false)?).await?,
        AiCommand::Synonyms { input } => ai::enhance_synonyms(service.as_ref(), &ai_input(&input, false)?).await?,
        AiCommand::Foreign { input } => {
            ai::detect_foreign_words(service.as_ref(), &ai_input(&input, false)?).await?
        }
    };
    sink.emit(&result)
}

async fn run_chat(config: &Config) -> Result<()> {
    let service = HttpCompletion::connect(&config.ai);
    let mut session = ChatSession::new();
    println!("{}", ai::CHAT_GREETING);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match line.trim() {
            "" => continue,
            "exit" | "quit" => break,
            _ => {}
        }

        match session.send(service.as_ref(), &line).await {
            Ok(reply) => println!("{}\n", reply),
            Err(e) => {
                println!("{}\n", ai::CHAT_APOLOGY);
                eprintln!("{}", e);
            }
        }
    }

    info!("Chat ended after {} messages", session.messages().len());
    Ok(())
}
