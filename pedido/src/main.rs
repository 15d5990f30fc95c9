use clap::{Parser, Subcommand, ValueEnum};
use pedidolib::{
    aggregate::{product_totals, Aggregator},
    config::Config,
    error::{PedidoError, Result},
    formats::{csv::Csv, json::Json},
    parser::CommandParser,
    similarity::{levenshtein, normalize},
    traits::{ReadFormat, WriteFormat},
};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "pedido", version, about = "Разбор голосовых заказов и группировка по клиентам")]
struct Cli {
    /// Файл настроек TOML
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,

    /// Подробный вывод в stderr (-v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Разобрать фразу в заказ
    Parse {
        /// Текст фразы
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Сгруппировать заказы по клиентам
    Aggregate {
        /// Входной файл с заказами (по умолчанию stdin)
        #[arg(short = 'i', long = "input")]
        input: Option<String>,

        /// Выходной файл (по умолчанию stdout)
        #[arg(short = 'o', long = "output")]
        output: Option<String>,

        /// Формат входа
        #[arg(long = "in-format", value_enum, default_value = "csv")]
        in_format: Fmt,

        /// Формат выхода
        #[arg(long = "out-format", value_enum, default_value = "json")]
        out_format: Fmt,

        /// Только заказы, готовые к доставке
        #[arg(long = "ready")]
        ready: bool,
    },
    /// Итоги по продуктам
    Totals {
        /// Входной файл с заказами (по умолчанию stdin)
        #[arg(short = 'i', long = "input")]
        input: Option<String>,

        /// Формат входа
        #[arg(long = "in-format", value_enum, default_value = "csv")]
        in_format: Fmt,
    },
    /// Проверить, считаются ли два имени одним клиентом
    Similar { a: String, b: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let mut out = io::stdout();
    match cli.command {
        Command::Parse { text } => {
            let parser = CommandParser::new()?;
            let parsed = parser.parse(&text.join(" "));
            serde_json::to_writer_pretty(&mut out, &parsed)?;
            writeln!(out)?;
        }
        Command::Aggregate { input, output, in_format, out_format, ready } => {
            let orders = read_orders(input, in_format)?;
            let orders = pedidolib::aggregate::recent(&orders, config.history.limit);
            let aggregator = Aggregator::new(config.similarity);
            let bundles = if ready {
                aggregator.ready_for_delivery(&orders)
            } else {
                aggregator.aggregate(&orders)
            };
            tracing::info!(orders = orders.len(), bundles = bundles.len(), "aggregated");

            let mut writer: Box<dyn Write> = match output {
                Some(path) => Box::new(File::create(path)?),
                None => Box::new(out),
            };
            match out_format {
                Fmt::Csv => Csv::write(&mut writer, &bundles),
                Fmt::Json => Json::write(&mut writer, &bundles),
            }?;
            return writer.flush().map_err(PedidoError::from);
        }
        Command::Totals { input, in_format } => {
            let orders = read_orders(input, in_format)?;
            let orders = pedidolib::aggregate::recent(&orders, config.history.limit);
            serde_json::to_writer_pretty(&mut out, &product_totals(&orders))?;
            writeln!(out)?;
        }
        Command::Similar { a, b } => {
            let similar = config.similarity.similar(&a, &b);
            let distance = levenshtein(&normalize(&a), &normalize(&b));
            writeln!(out, "{similar} (distance {distance})")?;
        }
    }

    out.flush().map_err(PedidoError::from)
}

fn read_orders(input: Option<String>, fmt: Fmt) -> Result<Vec<pedidolib::model::Order>> {
    let reader: Box<dyn io::Read> = match input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let br = BufReader::new(reader);

    match fmt {
        Fmt::Csv => Csv::read(br),
        Fmt::Json => Json::read(br),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}
