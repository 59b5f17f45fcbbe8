use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use latex::ast::tree;
use latex::types::StrictMode;
use latex::{Settings, default_context, parse};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Development tasks for the latex parser",
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the syntax tree of an expression.
    Ast(AstArgs),
    /// Print the canonical re-render of an expression.
    Render(ParseArgs),
}

#[derive(Args)]
struct ParseArgs {
    /// Expression to parse.
    expr: String,
    /// How to treat input LaTeX itself would reject.
    #[arg(long, value_enum, default_value_t = Strict::Warn)]
    strict: Strict,
    /// Maximum nesting depth of math spans, groups, scripts and arguments.
    #[arg(long)]
    max_nesting: Option<usize>,
}

#[derive(Args)]
struct AstArgs {
    #[command(flatten)]
    parse: ParseArgs,
    /// Emit JSON instead of the indented dump.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Strict {
    Ignore,
    Warn,
    Error,
}

impl From<Strict> for StrictMode {
    fn from(value: Strict) -> Self {
        match value {
            Strict::Ignore => Self::Ignore,
            Strict::Warn => Self::Warn,
            Strict::Error => Self::Error,
        }
    }
}

impl ParseArgs {
    fn parse(&self) -> Result<latex::ast::Node> {
        let settings = Settings::builder()
            .strict(self.strict.into())
            .maybe_max_nesting(self.max_nesting)
            .build();
        parse(default_context(), &self.expr, &settings)
            .with_context(|| format!("failed to parse `{}`", self.expr))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Ast(args) => {
            let node = args.parse.parse()?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&node)?);
            } else {
                print!("{}", tree::dump(&node));
            }
        }
        Command::Render(args) => println!("{}", args.parse()?),
    }
    Ok(())
}
