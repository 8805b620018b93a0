//! Codeveda - a terminal front end for the codeveda coding-education portal.
//!
//! Each command renders one page of the site from its cached content
//! document. Documents are cached locally for 24 hours; when the site is
//! unreachable the last downloaded copy is shown instead.

mod app;
mod pages;

use std::io;

use anyhow::{bail, Result};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use app::App;

const USAGE: &str = "\
Usage: codeveda <command> [args]

Commands:
  home                              Landing page
  dsa [--search Q] [--difficulty D] DSA sheet with your progress
  dsa-toggle <id> completed|starred Flip a flag on a DSA question
  dsa-random                        Pick an unsolved DSA question
  blogs [query] [--category C]      Blog listing
  blog <id>                         Read one blog post
  resources [query] [--type T]      Resource catalog
  projects [query] [--difficulty D] [--category C]
                                    Project showcase
  roadmaps                          Career roadmaps and beginner guides
  guide <id>                        Read a beginner guide
  contact                           Contact page
  contact-send <name> <email> <subject> <message>
                                    Send the contact form (simulated)
  fetch <key>                       Print a raw content document
  warm                              Download every content document
  config                            Print the effective settings
  cache-ages                        Show how old each cached document is
  clear-cache                       Delete cached documents (keeps progress)";

/// Initialize the tracing subscriber for logging.
/// The returned guard flushes buffered log lines when dropped.
fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let (writer, guard) = tracing_appender::non_blocking(io::stderr());

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer))
        .with(filter)
        .init();
    guard
}

/// Value following `--flag`, if present.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

/// First argument that is neither a flag nor a flag's value.
fn positional(args: &[String]) -> Option<&str> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg.starts_with("--") {
            iter.next();
        } else {
            return Some(arg);
        }
    }
    None
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let _log_guard = init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first().map(String::as_str) else {
        println!("{}", USAGE);
        return Ok(());
    };
    let rest = &args[1..];

    let app = App::new()?;
    info!(command = %command, "codeveda starting");

    match command {
        "home" => app.home().await,
        "dsa" => {
            app.dsa(
                flag_value(rest, "--search").unwrap_or(""),
                flag_value(rest, "--difficulty").unwrap_or("All"),
            )
            .await
        }
        "dsa-toggle" => {
            let (Some(id), Some(flag)) = (rest.first(), rest.get(1)) else {
                bail!("usage: codeveda dsa-toggle <id> completed|starred");
            };
            let id: u64 = id.parse()?;
            app.dsa_toggle(id, flag).await
        }
        "dsa-random" => app.dsa_random(&mut rand::thread_rng()).await,
        "blogs" => {
            app.blogs(
                positional(rest).unwrap_or(""),
                flag_value(rest, "--category").unwrap_or("All"),
            )
            .await
        }
        "blog" => match rest.first() {
            Some(id) => app.blog(id).await,
            None => bail!("usage: codeveda blog <id>"),
        },
        "resources" => {
            app.resources(
                positional(rest).unwrap_or(""),
                flag_value(rest, "--type").unwrap_or("all"),
            )
            .await
        }
        "projects" => {
            app.projects(
                positional(rest).unwrap_or(""),
                flag_value(rest, "--difficulty").unwrap_or("all"),
                flag_value(rest, "--category").unwrap_or("All"),
            )
            .await
        }
        "roadmaps" => app.roadmaps().await,
        "guide" => match rest.first() {
            Some(id) => app.guide(id).await,
            None => bail!("usage: codeveda guide <id>"),
        },
        "contact" => app.contact().await,
        "contact-send" => {
            let [name, email, subject, message] = rest else {
                bail!("usage: codeveda contact-send <name> <email> <subject> <message>");
            };
            app.contact_send(name, email, subject, message)
        }
        "fetch" => match rest.first() {
            Some(key) => app.fetch_raw(key).await,
            None => bail!("usage: codeveda fetch <key>"),
        },
        "warm" => app.warm().await,
        "config" => app.show_config(),
        "cache-ages" => {
            app.cache_ages();
            Ok(())
        }
        "clear-cache" => {
            app.clear_cache();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            println!("{}", USAGE);
            Ok(())
        }
        other => bail!("unknown command {:?}\n\n{}", other, USAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_flag_value() {
        let a = args(&["rust", "--category", "Web"]);
        assert_eq!(flag_value(&a, "--category"), Some("Web"));
        assert_eq!(flag_value(&a, "--type"), None);
        assert_eq!(flag_value(&args(&["--category"]), "--category"), None);
    }

    #[test]
    fn test_positional_skips_flags() {
        assert_eq!(positional(&args(&["--category", "Web", "rust"])), Some("rust"));
        assert_eq!(positional(&args(&["--type", "ebook"])), None);
    }
}
