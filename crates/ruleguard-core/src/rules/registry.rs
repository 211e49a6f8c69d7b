//! Name lookup for the built-in predicates.
//!
//! Both tables are built once on first use. The first maps each predicate's
//! registered name to the predicate; the second maps the short spellings
//! of the `is*` predicates (`email`, `Email`, `sameCi`, ...) to their
//! registered names.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{
    In, IsArray, IsBool, IsDate, IsDatetime, IsEmail, IsEqual, IsInt, IsIp, IsJson, IsMatch,
    IsNumeric, IsSame, IsSameCi, IsString, IsUrl, Length, NotIn, Predicate, Range, Required,
};

static BUILTINS: [&dyn Predicate; 20] = [
    &Required,
    &IsEmail,
    &IsDate,
    &IsDatetime,
    &IsUrl,
    &IsMatch,
    &Length,
    &Range,
    &IsBool,
    &IsString,
    &IsInt,
    &IsNumeric,
    &IsArray,
    &IsEqual,
    &IsSame,
    &IsSameCi,
    &IsIp,
    &IsJson,
    &In,
    &NotIn,
];

static PREDICATES: Lazy<HashMap<&'static str, &'static dyn Predicate>> =
    Lazy::new(|| BUILTINS.iter().map(|p| (p.name(), *p)).collect());

static ALIASES: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    let mut aliases = HashMap::new();
    for predicate in BUILTINS.iter() {
        let name = predicate.name();
        let Some(short) = name.strip_prefix("is") else {
            continue;
        };
        let mut chars = short.chars();
        if let Some(first) = chars.next() {
            let lowered: String = first.to_lowercase().chain(chars).collect();
            aliases.insert(short.to_string(), name);
            aliases.insert(lowered, name);
        }
    }
    aliases
});

/// Looks a rule name up, exact registered name first, then the alias table.
pub fn resolve(name: &str) -> Option<&'static dyn Predicate> {
    PREDICATES.get(name).copied().or_else(|| {
        ALIASES
            .get(name)
            .and_then(|registered| PREDICATES.get(registered).copied())
    })
}

/// Registered predicate names, in declaration order.
pub fn predicate_names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|p| p.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact_names() {
        for name in predicate_names() {
            let predicate = resolve(name).expect("registered name resolves");
            assert_eq!(predicate.name(), name);
        }
    }

    #[test]
    fn test_resolve_aliases() {
        assert_eq!(resolve("email").map(|p| p.name()), Some("isEmail"));
        assert_eq!(resolve("Email").map(|p| p.name()), Some("isEmail"));
        assert_eq!(resolve("sameCi").map(|p| p.name()), Some("isSameCi"));
        assert_eq!(resolve("SameCi").map(|p| p.name()), Some("isSameCi"));
        assert_eq!(resolve("datetime").map(|p| p.name()), Some("isDatetime"));
        assert_eq!(resolve("match").map(|p| p.name()), Some("isMatch"));
    }

    #[test]
    fn test_resolve_unknown_names() {
        assert!(resolve("bogus_rule_name").is_none());
        assert!(resolve("Required").is_none());
        assert!(resolve("sameci").is_none());
        assert!(resolve("EMAIL").is_none());
        assert!(resolve("").is_none());
        assert!(resolve("validate").is_none());
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = predicate_names().collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 20);
    }
}
