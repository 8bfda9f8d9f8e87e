//! profiles command - List profiles and their rules

use anyhow::{Context as _, Result};

use crate::core::profile::{ProfileKind, ProfileOptions};
use crate::engine::Context;
use crate::ui::output::{self, Verbosity};

/// Print every built-in profile with its rules.
pub fn profiles(ctx: &Context) -> Result<u8> {
    let verbosity = Verbosity::from_flags(false, ctx.debug);
    for kind in ProfileKind::all() {
        let profile = kind
            .build(&ProfileOptions::default())
            .with_context(|| format!("failed to build {} profile", kind))?;
        output::print(format!("{}: {}", kind, kind.description()), verbosity);
        output::print(output::format_list(&profile.rules(), "  "), verbosity);
        if !profile.vocabulary().is_empty() {
            output::print(
                format!("  footers: {}", profile.vocabulary().supported_list()),
                verbosity,
            );
        }
    }
    Ok(0)
}
