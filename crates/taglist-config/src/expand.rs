//! `${VAR}` references in URL settings.
//!
//! Each `${...}` reference is expanded on its own:
//! - `${VAR}` is the value of VAR; an unset VAR is an error
//! - `${VAR:-fallback}` is the value of VAR, or `fallback` when unset
//!
//! Everything outside a reference is kept byte for byte, so `$` in a path or
//! query string survives, as does an unclosed `${`.

use std::borrow::Cow;

use crate::ConfigError;

/// Expand the `${...}` references of the `field` setting `value`.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let end = start + len + 1;
        expanded.push_str(&rest[..start]);
        expanded.push_str(&expand_reference(&rest[start..end], field)?);
        rest = &rest[end..];
    }
    expanded.push_str(rest);
    Ok(expanded)
}

/// Expand a single `${...}` reference.
fn expand_reference(reference: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(reference, |name| {
        std::env::var(name)
            .map(Some)
            .map_err(|_| UnsetVar(name.to_owned()))
    })
    .map(Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Name of a referenced variable that is not set.
struct UnsetVar(String);
