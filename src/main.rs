//! `fixture-gen`: writes numeric conformance fixtures for one dialect.
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use numeric_fixtures::{
    create_from_config, write_fixture, Dialect, Logger, Metadata, SignPolicy,
};
use std::path::PathBuf;
use tracing::Level;

/// number format test case generator for programming languages and data formats
#[derive(Parser, Debug)]
#[command(name = "fixture-gen", version)]
struct CommandLineInterface {
    /// do not echo fixtures to the console
    #[arg(short, long, global = true)]
    quiet: bool,

    /// diagnostic verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// create test cases from a config file
    Config(ConfigArgs),
    /// create test cases for a single language
    Language(LanguageArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// the path to the config file
    #[arg(short, long)]
    config: PathBuf,

    /// the directory to save the generated fixtures to
    #[arg(short = 'd', long, default_value = "data")]
    directory: PathBuf,
}

#[derive(Args, Debug)]
struct LanguageArgs {
    /// an optional path to write the fixture to
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// the cases are number literals rather than parsed strings
    #[arg(long)]
    literal: bool,

    /// a title to display for the results
    #[arg(short, long)]
    title: String,

    /// the programming language or data interchange format under test
    #[arg(short, long)]
    language: String,

    /// the description to display under the title
    #[arg(short, long)]
    description: Option<String>,

    /// the radix of the significant digits
    #[arg(short, long = "radix", alias = "mantissa-radix", default_value_t = 10)]
    radix: u32,

    /// the base the exponent is raised to (defaults to the radix)
    #[arg(long)]
    exponent_base: Option<u32>,

    /// the radix of the exponent digits (defaults to the radix)
    #[arg(long)]
    exponent_radix: Option<u32>,

    /// the delimiter between digits, such as `_`
    #[arg(long, default_value_t = '_')]
    digit_separator: char,

    /// the format has no digit separator
    #[arg(long, conflicts_with = "digit_separator")]
    no_digit_separator: bool,

    /// the character between the integer and fraction, such as `.` or `,`
    #[arg(long, default_value_t = '.')]
    decimal_point: char,

    /// the character between the mantissa and exponent, such as `e`
    #[arg(long, default_value_t = 'e')]
    exponent_char: char,

    /// a character marking the base at the start, such as `x` in `0x1`
    #[arg(long)]
    base_prefix: Option<char>,

    /// a character marking the base at the end, such as `h` in `1fd2h`
    #[arg(long)]
    base_suffix: Option<char>,

    /// mantissa sign policy: none, optional, no-positive or required
    #[arg(long, default_value_t = SignPolicy::Optional)]
    mantissa_sign: SignPolicy,

    /// exponent sign policy: none, optional, no-positive or required
    #[arg(long, default_value_t = SignPolicy::Optional)]
    exponent_sign: SignPolicy,

    /// the spelling of NaN, such as `NaN`
    #[arg(long, default_value = "NaN")]
    nan_string: String,

    /// an expression evaluating to NaN, such as `float("nan")`
    #[arg(long)]
    nan_expr: Option<String>,

    /// the spelling of short infinity, such as `inf`
    #[arg(long, default_value = "inf")]
    inf_string: String,

    /// an expression evaluating to short infinity
    #[arg(long)]
    inf_expr: Option<String>,

    /// the spelling of long infinity, such as `Infinity`
    #[arg(long, default_value = "Infinity")]
    infinity_string: String,

    /// an expression evaluating to long infinity
    #[arg(long)]
    infinity_expr: Option<String>,

    /// literal expectations are written without exponents
    #[arg(long)]
    no_exponent: bool,

    /// the format has no floating-point numbers
    #[arg(long)]
    no_floats: bool,

    /// the format has no signed integers
    #[arg(long)]
    no_ints: bool,

    /// the format has no unsigned integers
    #[arg(long)]
    no_uints: bool,
}

impl LanguageArgs {
    fn dialect(&self) -> numeric_fixtures::Result<Dialect> {
        let separator = (!self.no_digit_separator).then_some(self.digit_separator);
        Dialect::builder()
            .with_mantissa_radix(self.radix)
            .with_exponent_base(self.exponent_base)
            .with_exponent_radix(self.exponent_radix)
            .with_digit_separator(separator)
            .with_decimal_point(self.decimal_point)
            .with_exponent_char(self.exponent_char)
            .with_base_prefix(self.base_prefix)
            .with_base_suffix(self.base_suffix)
            .with_mantissa_sign(self.mantissa_sign)
            .with_exponent_sign(self.exponent_sign)
            .with_nan_string(self.nan_string.as_str())
            .with_nan_expr(self.nan_expr.as_deref())
            .with_inf_string(self.inf_string.as_str())
            .with_inf_expr(self.inf_expr.as_deref())
            .with_infinity_string(self.infinity_string.as_str())
            .with_infinity_expr(self.infinity_expr.as_deref())
            .with_no_exponent(self.no_exponent)
            .with_no_floats(self.no_floats)
            .with_no_ints(self.no_ints)
            .with_no_uints(self.no_uints)
            .build()
    }

    fn metadata(&self) -> Metadata {
        Metadata::new(self.title.as_str(), self.language.as_str())
            .with_literal(self.literal)
            .with_description(self.description.as_deref())
    }
}

impl CommandLineInterface {
    fn run(self) -> anyhow::Result<()> {
        match self.cmd {
            Command::Config(args) => create_from_config(&args.config, &args.directory)
                .context("failed to generate fixtures from config"),
            Command::Language(args) => {
                let dialect = args.dialect().context("invalid dialect")?;
                let mut logger = Logger::new(args.output.clone(), self.quiet);
                logger
                    .clear()
                    .context("failed to remove the previous fixture")?;
                write_fixture(&dialect, &args.metadata(), &mut logger)
                    .with_context(|| format!("failed to generate the {} fixture", args.language))
            }
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLineInterface::parse();
    init_tracing(cli.verbose);
    cli.run()
}
