//! Naming resolution.
//!
//! Pure functions that derive log keys, generated logger names and aggregate
//! field names. Nothing here consults the graph.

use epi_ir::{Naming, TypeDecl};

/// Suffix of every generated logger.
pub const LOGGER_SUFFIX: &str = "Logger";

/// A derived identifier came out empty.
///
/// Callers fall back to the unmodified identifier and report a warning.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NamingError {
    /// A member's name override is blank after trimming.
    #[error("log key override on `{member}` is blank")]
    BlankOverride { member: String },

    /// Converting the member identifier left no characters.
    #[error("`{member}` produces an empty log key")]
    EmptyKey { member: String },

    /// A type's display name contains no identifier characters.
    #[error("display name `{name}` contains no identifier characters")]
    EmptyDisplayName { name: String },
}

/// Log key of a member.
///
/// An explicit override wins (trimmed). Otherwise the identifier is converted
/// per the enclosing type's naming convention.
pub fn log_key_name(
    name_override: Option<&str>,
    ident: &str,
    naming: Naming,
) -> Result<String, NamingError> {
    if let Some(name) = name_override {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(NamingError::BlankOverride {
                member: ident.to_string(),
            });
        }
        return Ok(trimmed.to_string());
    }

    let key = match naming {
        Naming::CodeName => ident.to_string(),
        Naming::HumanName => to_human_name(ident),
    };
    if key.is_empty() {
        return Err(NamingError::EmptyKey {
            member: ident.to_string(),
        });
    }
    Ok(key)
}

/// Convert a camel-case or snake-case identifier into capitalized words.
///
/// A leading `m_` field prefix is dropped and acronym runs stay together:
/// `getPIDValue` becomes `Get PID Value`.
pub fn to_human_name(ident: &str) -> String {
    let ident = ident
        .strip_prefix("m_")
        .filter(|rest| !rest.is_empty())
        .unwrap_or(ident);
    let chars: Vec<char> = ident.chars().collect();

    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '$' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keep the identifier characters of each word and capitalize the words.
///
/// `"front left module"` becomes `FrontLeftModule`. A leading digit gets an
/// underscore so the result is a valid identifier.
pub fn sanitize_display_name(name: &str) -> String {
    let mut out = String::new();
    for word in name.split_whitespace() {
        let cleaned: String = word
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '$')
            .collect();
        out.push_str(&capitalize(&cleaned));
    }
    if out.starts_with(|c: char| c.is_numeric()) {
        out.insert(0, '_');
    }
    out
}

/// Logger name derived from the type's own name: `Outer.Inner` becomes
/// `Outer$InnerLogger`.
pub fn default_unit_name(decl: &TypeDecl) -> String {
    format!("{}{LOGGER_SUFFIX}", decl.name.replace('.', "$"))
}

/// Simple name of the logger generated for a type.
///
/// A display name on the type's `Logged` attribute replaces the default, so
/// two types with the same simple name can be told apart.
pub fn generated_unit_name(decl: &TypeDecl) -> Result<String, NamingError> {
    let display = decl.logged.as_ref().and_then(|logged| logged.name.as_deref());
    let Some(display) = display else {
        return Ok(default_unit_name(decl));
    };

    let sanitized = sanitize_display_name(display);
    if sanitized.is_empty() {
        return Err(NamingError::EmptyDisplayName {
            name: display.to_string(),
        });
    }
    Ok(format!("{sanitized}{LOGGER_SUFFIX}"))
}

/// Aggregate field name for a logger or recorder: `ArmLogger` becomes
/// `armLogger`.
pub fn recorder_field_name(simple: &str) -> String {
    let mut chars = simple.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
