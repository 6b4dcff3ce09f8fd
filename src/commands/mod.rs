//! Subcommand handlers

pub mod config;
pub mod play;
pub mod trace;

use anyhow::{bail, Result};

use qss::cli::InputArgs;
use qss::config::MAX_ARRAY_SIZE;
use qss::sample::InputSampler;
use qss::trace::Locale;
use qss::Config;

/// Input array, sampler for later reshuffles, and narration locale,
/// with CLI flags taking precedence over config.
pub struct ResolvedInput {
    pub values: Vec<i64>,
    pub sampler: InputSampler,
    pub locale: Locale,
}

pub fn resolve_input(args: &InputArgs, config: &Config) -> Result<ResolvedInput> {
    let mut input_config = config.input.clone();
    if let Some(size) = args.size {
        if size == 0 || size > MAX_ARRAY_SIZE {
            bail!("--size must be between 1 and {}, got {}", MAX_ARRAY_SIZE, size);
        }
        input_config.array_size = size;
    }

    if args.values.len() > MAX_ARRAY_SIZE {
        bail!(
            "at most {} values can be sorted, got {}",
            MAX_ARRAY_SIZE,
            args.values.len()
        );
    }

    let mut sampler = InputSampler::new(&input_config, args.seed);
    let values = if args.values.is_empty() {
        sampler.sample()
    } else {
        args.values.clone()
    };

    Ok(ResolvedInput {
        values,
        sampler,
        locale: args.locale.unwrap_or(config.display.locale),
    })
}
