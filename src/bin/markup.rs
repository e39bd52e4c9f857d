//! Command-line demo for markup-tree
//! Builds the sample document, fires its lifecycle hooks and prints the result.
//!
//! Usage:
//!   markup demo [--format `<format>`] [--config `<path>`] [--escape]  - Run the sample document
//!   markup formats                                                 - List available output formats
//!
//! Settings come from the built-in defaults, then `./markup.toml` if present, then `--config`,
//! then command-line flags.

use clap::{Arg, ArgAction, ArgMatches, Command};
use markup_config::{Loader, MarkupConfig};
use markup_tree::markup::ast::{traverse, Container, Element, ElementResult, Image, Text};
use markup_tree::{Format, RenderOptions, Visibility};

fn main() {
    let matches = Command::new("markup")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build, render and walk a small HTML element tree")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("demo")
                .about("Run the sample document through every operation")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format for the final tree (html, json, treeviz)"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults and ./markup.toml"),
                )
                .arg(
                    Arg::new("escape")
                        .long("escape")
                        .help("Escape special characters in text content and sources")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("demo", demo_matches)) => handle_demo_command(demo_matches),
        Some(("formats", _)) => handle_formats_command(),
        _ => unreachable!(),
    }
}

fn load_config(matches: &ArgMatches) -> Result<MarkupConfig, Box<dyn std::error::Error>> {
    let mut loader = Loader::new().with_local_file(".");
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("escape") {
        loader = loader.set_override("render.escape_special_chars", true)?;
    }
    Ok(loader.build()?)
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Handle the demo command
fn handle_demo_command(matches: &ArgMatches) {
    let config = match load_config(matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    init_logging(&config.logging.level);

    let format = match matches.get_one::<String>("format") {
        Some(name) => Format::from_name(name),
        None => Ok(Format::from(config.render.format)),
    };
    let options = RenderOptions::from(&config.render);

    if let Err(e) = format.and_then(|format| run_demo(format, &options)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_demo(format: Format, options: &RenderOptions) -> ElementResult<()> {
    let text = Element::from(Text::new("p", "Hello, World!")?);
    text.on_created();
    println!("{}", text.render());

    let image = Element::from(Image::new("example.jpg"));
    image.on_created();
    println!("{}", image.render());

    let mut root = Element::from(Container::new("div")?);
    root.add_child(text)?;
    root.add_child(image)?;
    root.on_created();
    println!("{}", root.render());

    if let Some(mut text) = root.child_mut(0) {
        text.set_state(Visibility::Hidden);
        text.element().on_removed();
        println!("{}", text.state().handle());
    }

    println!("\nIterating through HTML document:");
    for element in traverse(&root) {
        println!("{}", element.render());
    }

    println!("\nDocument as {}:", format.name());
    print!("{}", format.serialize(&root, options)?);
    if format != Format::Treeviz {
        println!();
    }
    Ok(())
}

/// Handle the formats command
fn handle_formats_command() {
    println!("Available formats:");
    for format in Format::ALL {
        println!("  {:<8} {}", format.name(), format.description());
    }
}
