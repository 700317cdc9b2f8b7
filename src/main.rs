use clap::{crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, Command};
use colored::Colorize;

// The CLI layer only sets up logging and forwards to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new().filter_level(level).init();

    let summary = panel_scaffold::api::create_app_directory_structure(".")?;

    println!(
        "{}",
        "App directory structure created successfully!".green().bold()
    );
    println!("{}", summary);

    Ok(())
}
