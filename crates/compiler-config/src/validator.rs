use crate::{error::ConfigError, settings::CompilerSettings};
use filter_syntax::ast::kind::FilterKind;
use model::core::date_format::DateFormat;
use std::collections::HashSet;
use tracing::{info, warn};

/// Checks settings for values the compiler cannot honor.
pub fn validate(settings: &CompilerSettings) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_date_format(settings, &mut errors);
    validate_capabilities(settings, &mut errors);
    validate_view_param_keys(settings, &mut errors);
    validate_sql(settings, &mut errors);

    if !errors.is_empty() {
        return Err(ConfigError::Invalid(errors));
    }

    info!("Compiler settings validation completed successfully");
    Ok(())
}

fn validate_date_format(settings: &CompilerSettings, errors: &mut Vec<String>) {
    if let Err(err) = settings.date.default_format.parse::<DateFormat>() {
        errors.push(format!("date.default_format: {err}"));
    }
}

fn validate_capabilities(settings: &CompilerSettings, errors: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for name in &settings.capabilities.exclude {
        match name.parse::<FilterKind>() {
            Ok(kind) => {
                if !seen.insert(kind) {
                    warn!("Capability {kind} is excluded more than once");
                }
            }
            Err(err) => errors.push(format!("capabilities.exclude: {err}")),
        }
    }
}

fn validate_view_param_keys(settings: &CompilerSettings, errors: &mut Vec<String>) {
    let keys = &settings.view_params;
    let named = [
        ("filter", &keys.filter),
        ("query", &keys.query),
        ("native_only", &keys.native_only),
        ("aggregations", &keys.aggregations),
    ];

    let mut seen = HashSet::new();
    for (setting, key) in named {
        let normalized = key.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            errors.push(format!("view_params.{setting} must not be empty"));
        } else if !seen.insert(normalized) {
            errors.push(format!("view_params.{setting} duplicates another key: {key}"));
        }
    }
}

fn validate_sql(settings: &CompilerSettings, errors: &mut Vec<String>) {
    if settings.sql.id_column.trim().is_empty() {
        errors.push("sql.id_column must not be empty".to_string());
    }
    if settings.sql.srid < 0 {
        errors.push(format!("sql.srid must be non-negative: {}", settings.sql.srid));
    }
}
