use std::collections::VecDeque;

use indexmap::IndexSet;
use log::debug;

use crate::error::Error::{
    DuplicateOption, InvalidOptionType, MissingOptionValue, UnexpectedOptionValue, UnknownOption,
};
use crate::error::Result;
use crate::flags::types::{FlagDefinition, FlagKind, FlagValue, ParseOptions, ParsedFlags};
use crate::flags::validation::validate_flags;

/// Parses command line arguments against a set of flag definitions.
///
/// Supports `--name`, `--name=value`, `-n value`, clustered short flags
/// (`-abc`) and `--`, after which every argument is kept in
/// [`ParsedFlags::literal`]. Anything that isn't a flag or a flag value ends
/// up in [`ParsedFlags::unknown`].
///
/// # Errors
///
/// Returns an error for unknown flags, missing or malformed values, repeated
/// flags and broken `depends`/`conflicts`/`required` rules.
pub fn parse_flags<S: AsRef<str>>(args: &[S], options: &ParseOptions) -> Result<ParsedFlags> {
    let mut tokens: VecDeque<String> = args.iter().map(|arg| arg.as_ref().to_string()).collect();
    let mut parsed = ParsedFlags::default();
    let mut given = IndexSet::new();

    while let Some(arg) = tokens.pop_front() {
        if arg == "--" {
            parsed.literal.extend(tokens.drain(..));
            break;
        }

        if !is_flag(&arg) {
            parsed.unknown.push(arg);
            if options.stop_early {
                parsed.unknown.extend(tokens.drain(..));
                break;
            }
            continue;
        }

        if let Some(long) = arg.strip_prefix("--") {
            let (name, inline) = split_inline(long);
            let flag = options
                .find(name)
                .ok_or_else(|| UnknownOption(format!("--{name}")))?;
            apply(flag, inline, &mut tokens, &mut parsed, &mut given, true)?;
        } else {
            parse_short(&arg[1..], options, &mut tokens, &mut parsed, &mut given)?;
        }
    }

    validate_flags(options, &given)?;

    debug!(
        "Parsed {} flags, {} unknown and {} literal arguments",
        parsed.flags.len(),
        parsed.unknown.len(),
        parsed.literal.len()
    );
    Ok(parsed)
}

/// A token is a flag if it starts with a dash and isn't a negative number.
fn is_flag(arg: &str) -> bool {
    arg.len() > 1 && arg.starts_with('-') && arg.parse::<f64>().is_err()
}

fn split_inline(body: &str) -> (&str, Option<String>) {
    match body.split_once('=') {
        Some((name, value)) => (name, Some(value.to_string())),
        None => (body, None),
    }
}

/// Handles `-f`, `-f=value`, `-abc` and `-fvalue`.
fn parse_short(
    body: &str,
    options: &ParseOptions,
    tokens: &mut VecDeque<String>,
    parsed: &mut ParsedFlags,
    given: &mut IndexSet<String>,
) -> Result<()> {
    if let (name, Some(value)) = split_inline(body) {
        let flag = options
            .find(name)
            .ok_or_else(|| UnknownOption(format!("-{name}")))?;
        return apply(flag, Some(value), tokens, parsed, given, true);
    }

    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        let flag = options
            .find(c.encode_utf8(&mut [0; 4]))
            .ok_or_else(|| UnknownOption(format!("-{c}")))?;

        let rest = chars.as_str();
        if flag.takes_value() && !rest.is_empty() {
            return apply(flag, Some(rest.to_string()), tokens, parsed, given, true);
        }
        // Only the last flag of a cluster may read the next argument
        apply(flag, None, tokens, parsed, given, rest.is_empty())?;
    }
    Ok(())
}

fn apply(
    flag: &FlagDefinition,
    inline: Option<String>,
    tokens: &mut VecDeque<String>,
    parsed: &mut ParsedFlags,
    given: &mut IndexSet<String>,
    lookahead: bool,
) -> Result<()> {
    if !given.insert(flag.name.clone()) {
        return Err(DuplicateOption(flag.name.clone()));
    }

    let value = match (flag.kind, inline) {
        (FlagKind::Boolean, Some(text)) => parse_bool(&text)
            .ok_or_else(|| UnexpectedOptionValue(flag.name.clone(), text))?,
        (FlagKind::Boolean, None) if !lookahead => FlagValue::Bool(true),
        (FlagKind::Boolean, None) => match tokens.front().map(String::as_str) {
            Some(text @ ("true" | "false")) => {
                let value = text == "true";
                tokens.pop_front();
                FlagValue::Bool(value)
            }
            _ => FlagValue::Bool(true),
        },
        (_, Some(text)) => parse_value(flag, text)?,
        (_, None) if flag.optional_value => match tokens.front() {
            Some(next) if !is_flag(next) => {
                let next = tokens.pop_front().unwrap_or_default();
                parse_value(flag, next)?
            }
            _ => FlagValue::Bool(true),
        },
        (_, None) => {
            let next = tokens
                .pop_front()
                .ok_or_else(|| MissingOptionValue(flag.name.clone()))?;
            parse_value(flag, next)?
        }
    };

    parsed.flags.insert(flag.key(), value);
    Ok(())
}

fn parse_bool(text: &str) -> Option<FlagValue> {
    match text {
        "true" | "1" => Some(FlagValue::Bool(true)),
        "false" | "0" => Some(FlagValue::Bool(false)),
        _ => None,
    }
}

fn parse_value(flag: &FlagDefinition, text: String) -> Result<FlagValue> {
    match flag.kind {
        FlagKind::String => Ok(FlagValue::String(text)),
        FlagKind::Number => text
            .parse::<f64>()
            .ok()
            .filter(|number| number.is_finite())
            .map(FlagValue::Number)
            .ok_or_else(|| InvalidOptionType {
                option: flag.name.clone(),
                expected: flag.kind.to_string(),
                value: text,
            }),
        FlagKind::Boolean => {
            parse_bool(&text).ok_or_else(|| UnexpectedOptionValue(flag.name.clone(), text))
        }
    }
}
