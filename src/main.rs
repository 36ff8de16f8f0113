use std::{env, fs::read_to_string, process::ExitCode, time::Instant};

use frontend::{
    ast::printer::AstPrinter,
    config::{CliOptions, Emit, ParserConfig},
    display_error,
    lexer::lexer::tokenize,
    parser::parser::parse_with_config,
};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let options = match CliOptions::from_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{}\n{}", err, CliOptions::USAGE);
            return ExitCode::from(2);
        }
    };

    let config = ParserConfig::detect();
    info!(
        max_depth = config.max_depth(),
        resolution = %config.source(),
        "parser configured"
    );

    let file_name = options
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| options.path.to_string_lossy().into_owned());

    let source = match read_to_string(&options.path) {
        Ok(source) => source,
        Err(err) => {
            error!(path = %options.path.display(), error = %err, "failed to read source file");
            eprintln!("Failed to read {}: {}", options.path.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(err) => {
            display_error(&err, &source, &file_name);
            return ExitCode::FAILURE;
        }
    };

    debug!(elapsed = ?start.elapsed(), "tokenized");

    if options.emit == Emit::Tokens {
        for token in &tokens {
            println!("{}", token.debug());
        }
        return ExitCode::SUCCESS;
    }

    let parse_start = Instant::now();
    let program = match parse_with_config(tokens, config) {
        Ok(program) => program,
        Err(err) => {
            display_error(&err, &source, &file_name);
            return ExitCode::FAILURE;
        }
    };

    debug!(elapsed = ?parse_start.elapsed(), "parsed");

    let mut printer = AstPrinter::new();
    for stmt in &program {
        println!("{}", printer.print_stmt(stmt));
    }

    ExitCode::SUCCESS
}
