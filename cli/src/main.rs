use clap::{Arg, command};

mod commands;

fn format_version_message() -> &'static str {
    const VERSION_MESSAGE: &str = concat!(" v", env!("CARGO_PKG_VERSION"));
    VERSION_MESSAGE
}

#[tokio::main]
async fn main() {
    let version_message = format_version_message();
    let matches = command!()
        .name("eolcheck")
        .version(version_message)
        .about("Check if a distro release is going to be EOL soon")
        .long_about(
            "Queries the public API of https://endoflife.date and reports through the exit \
             code whether the release's end-of-life date is within 30 days: 0 = not \
             impending, 1 = impending (date printed to stdout), 2 = no data for the \
             distro/release, 3 = failure.",
        )
        .arg(
            Arg::new("distro")
                .help("Distro identifier as known to endoflife.date (e.g. \"ubuntu\")")
                .value_parser(clap::value_parser!(String))
                .required(true),
        )
        .arg(
            Arg::new("release")
                .help("Release identifier (e.g. \"22.04\")")
                .value_parser(clap::value_parser!(String))
                .required(true),
        )
        .arg(
            Arg::new("lts")
                .help("Pass \"1\" to report the extendedSupport date instead of the eol date")
                .value_parser(clap::value_parser!(String))
                .required(true),
        )
        .get_matches();

    let distro = matches.get_one::<String>("distro").unwrap().to_string();
    let release = matches.get_one::<String>("release").unwrap().to_string();
    let lts = matches.get_one::<String>("lts").unwrap() == "1";

    let code = commands::check::handle_check(distro, release, lts).await;
    std::process::exit(code);
}
