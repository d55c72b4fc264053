//! Flag parsing for actions
//!
//! Actions accept Go-style single-dash long flags (`-domain example.com`,
//! `-ttl=60`) as well as the usual `--domain example.com`. Single-dash
//! flags are rewritten to the double-dash form before clap sees them.

use addrctl_core::{Error, Result};
use clap::{CommandFactory, Parser};

/// Rewrite single-dash long flags to double-dash ones
///
/// Every addrctl flag takes a value, so the token following a flag without
/// `=` is passed through untouched even if it starts with a dash.
/// Everything after a bare `--` is left alone.
pub fn normalize_flags(args: &[String]) -> Vec<String> {
    let mut normalized = Vec::with_capacity(args.len());
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "--" {
            normalized.push(arg.clone());
            normalized.extend(iter.cloned());
            break;
        }

        let Some(flag) = flag_token(arg) else {
            normalized.push(arg.clone());
            continue;
        };

        let takes_next = !flag.contains('=');
        normalized.push(flag);

        if takes_next {
            if let Some(value) = iter.next() {
                normalized.push(value.clone());
            }
        }
    }

    normalized
}

/// Returns the double-dash form if `arg` is a flag
fn flag_token(arg: &str) -> Option<String> {
    if let Some(rest) = arg.strip_prefix("--") {
        return starts_with_letter(rest).then(|| arg.to_string());
    }

    let rest = arg.strip_prefix('-')?;
    starts_with_letter(rest).then(|| format!("--{}", rest))
}

fn starts_with_letter(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

/// Parse an action's flags
///
/// # Errors
///
/// `InvalidInput` carrying clap's message for unknown flags, missing values
/// or malformed numbers.
pub fn parse_flags<T: Parser>(action: &str, args: &[String]) -> Result<T> {
    let argv = std::iter::once(action.to_string()).chain(normalize_flags(args));

    T::try_parse_from(argv)
        .map_err(|e| Error::invalid_input(e.render().to_string().trim_end().to_string()))
}

/// Help text listing an action's flags
pub fn flag_help<T: CommandFactory>(action: &'static str) -> String {
    T::command()
        .name(action)
        .render_help()
        .to_string()
        .trim_end()
        .to_string()
}

/// A flag value, or `None` if it is absent or blank
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
