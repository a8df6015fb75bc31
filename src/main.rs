//! mergemsg - merge commit messages from pull request pages

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use url::Url;

use mergemsg::dom::{self, HtmlOptions};
use mergemsg::text::html_to_text_with;
use mergemsg::{CommitMessageField, PageSelectors, PullRequest};

#[derive(Parser)]
#[command(name = "mergemsg")]
#[command(version, about = "Merge commit messages from pull request pages", long_about = None)]
#[command(after_help = "EXAMPLES:
    mergemsg pr.html                 Print the merge message for a saved PR page
    mergemsg --fragment desc.html    Render a description fragment as text
    mergemsg --json pr.json          Compose from the page's pull request payload")]
struct Cli {
    /// Input file: HTML page, HTML fragment or JSON payload ("-" for stdin)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Treat INPUT as a description fragment and print its text
    #[arg(long, conflicts_with = "json")]
    fragment: bool,

    /// Treat INPUT as the pull request JSON payload
    #[arg(long)]
    json: bool,

    /// Resolve relative link and image URLs against this page URL
    #[arg(long, value_name = "URL")]
    base_url: Option<Url>,

    /// Write the result to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Log what is being scraped
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e} [{}]", e.code());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> mergemsg::Result<()> {
    let input = read_input(&cli.input)?;
    let options = HtmlOptions {
        base_url: cli.base_url.clone(),
    };

    let text = if cli.fragment {
        html_to_text_with(&input, &options)
    } else if cli.json {
        PullRequest::from_json(&input)?.merge_message()
    } else {
        let selectors = PageSelectors::default();
        let page = dom::parse_html(&input);
        let pr = PullRequest::from_page(&page, &selectors, &options)?;
        let mut field = CommitMessageField::from_page(&page, &selectors).unwrap_or_default();
        pr.apply_to(Some(&mut field))?
    };

    match &cli.output {
        Some(path) => fs::write(path, text)?,
        None => println!("{text}"),
    }
    Ok(())
}

fn read_input(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
    }
}
