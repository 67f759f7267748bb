//! Option validation.
//!
//! A command declares its option sets and an ordered list of validators.
//! [`validate`] checks the option sets first and then runs the validators in
//! order, stopping at the first message. Nothing here touches the network.

use regex::Regex;
use std::sync::OnceLock;

/// A validator returns `Err` with the message shown to the user.
pub type Validator<O> = fn(&O) -> Result<(), String>;

/// Lets declarative checks ask whether an option was supplied.
pub trait CommandOptions {
    fn is_present(&self, option: &str) -> bool;
}

/// A group of alternative options, exactly one of which must be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSet {
    pub options: &'static [&'static str],
}

impl OptionSet {
    pub const fn new(options: &'static [&'static str]) -> Self {
        OptionSet { options }
    }

    pub fn check<O: CommandOptions>(&self, options: &O) -> Result<(), String> {
        let supplied = self
            .options
            .iter()
            .filter(|name| options.is_present(name))
            .count();

        match supplied {
            1 => Ok(()),
            0 => Err(format!("Specify either {}", self.options.join(", "))),
            _ => Err(format!(
                "Specify either {} but not multiple",
                self.options.join(", ")
            )),
        }
    }
}

/// Runs option sets, then validators; the first failure wins.
pub fn validate<O: CommandOptions>(
    options: &O,
    option_sets: &[OptionSet],
    validators: &[Validator<O>],
) -> Result<(), String> {
    for option_set in option_sets {
        option_set.check(options)?;
    }
    for validator in validators {
        validator(options)?;
    }
    Ok(())
}

fn guid_regex() -> &'static Regex {
    static GUID: OnceLock<Regex> = OnceLock::new();
    GUID.get_or_init(|| {
        Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
            .expect("GUID pattern")
    })
}

fn upn_regex() -> &'static Regex {
    static UPN: OnceLock<Regex> = OnceLock::new();
    UPN.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)+$",
        )
        .expect("UPN pattern")
    })
}

pub fn is_valid_guid(value: &str) -> bool {
    guid_regex().is_match(value)
}

pub fn is_valid_user_principal_name(value: &str) -> bool {
    upn_regex().is_match(value)
}

/// `"<value> is not a valid GUID."` unless the value is a GUID.
pub fn require_guid(value: &str) -> Result<(), String> {
    if is_valid_guid(value) {
        Ok(())
    } else {
        Err(format!("{} is not a valid GUID.", value))
    }
}

/// Rejects values outside the allow-list, listing the allowed values.
pub fn require_one_of(value: &str, option: &str, allowed: &[&str]) -> Result<(), String> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(format!(
            "{} is not a valid {}. Valid values are: {}",
            value,
            option,
            allowed.join(", ")
        ))
    }
}
