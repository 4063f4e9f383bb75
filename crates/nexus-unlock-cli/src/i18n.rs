// crates/nexus-unlock-cli/src/i18n.rs
// ============================================================================
// Module: CLI Internationalization Helpers
// Description: Provides message catalog and translation utilities for the CLI.
// Purpose: Centralize user-facing strings for future localization support.
// Dependencies: Standard library collections and formatting utilities.
// ============================================================================

//! ## Overview
//! The nexus-unlock CLI stores user-facing strings in a small translation
//! catalog to enforce consistent messaging and to prepare for future locales.
//! All runtime output should be routed through the [`t!`](crate::t) macro.
//!
//! ## Invariants
//! - The catalog is initialized once and read-only thereafter.
//! - Missing keys fall back to English and then to the key itself.
//! - Placeholder substitutions preserve deterministic order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Supported CLI locales.
///
/// # Invariants
/// - Variants are stable for CLI parsing and catalog lookup.
/// - [`Locale::En`] is the default fallback locale.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Locale {
    /// English (default).
    En,
    /// Catalan.
    Ca,
}

impl Locale {
    /// Returns the canonical locale label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ca => "ca",
        }
    }

    /// Attempts to parse a locale value (case-insensitive, tolerant of region tags).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let normalized = value.to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "ca" => Some(Self::Ca),
            _ => None,
        }
    }
}

/// Ordered list of supported CLI locales.
///
/// # Invariants
/// - Ordering is stable for deterministic presentation.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Ca];

/// A formatted message argument captured by the [`macro@crate::t`] macro.
///
/// # Invariants
/// - `key` matches a placeholder name without braces (for example, `path`).
/// - `value` is preformatted and should be safe for display.
#[derive(Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g., `"path"`).
    pub key: &'static str,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Locale Selection
// ============================================================================

/// Global locale selection for CLI output.
static CURRENT_LOCALE: OnceLock<Locale> = OnceLock::new();

/// Sets the CLI locale. Only the first call wins.
pub fn set_locale(locale: Locale) {
    let _ = CURRENT_LOCALE.set(locale);
}

/// Returns the current CLI locale (defaults to English).
#[must_use]
pub fn current_locale() -> Locale {
    CURRENT_LOCALE.get().copied().unwrap_or(Locale::En)
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Static English catalog entries loaded into the localized message bundle.
const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "nexus-unlock {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("validate.init", "Initializing NEXUS Unlock Validation..."),
    ("validate.banner", "🧠 NEXUS Final Unlock Test Validation"),
    ("validate.config.load_failed", "Failed to load config: {error}"),
    ("validate.client.init_failed", "Failed to initialize endpoint client: {error}"),
    ("validate.join_failed", "Validation task failed: {error}"),
    ("validate.interrupted", "⚠️  Validation interrupted by user"),
    ("validate.failed", "❌ Validation failed with error: {error}"),
    ("transcript.section", "=== Testing {title} ==="),
    ("transcript.result", "{status}: {name}"),
    ("transcript.detail", "    {details}"),
    ("report.header", "🎯 FINAL UNLOCK VALIDATION REPORT"),
    ("report.results", "📊 Test Results: {passed}/{total} passed ({rate}%)"),
    ("report.duration", "⏱️  Duration: {seconds} seconds"),
    ("report.fingerprint", "🔒 Fingerprint Lock: {fingerprint}"),
    ("report.unlocked.headline", "✅ SYSTEM FULLY UNLOCKED - All modules operational"),
    ("report.unlocked.next", "🚀 Ready for production deployment"),
    ("report.partial.headline", "⚠️  PARTIAL UNLOCK - Some modules need attention"),
    ("report.partial.next", "🔧 Review failed tests and address issues"),
    ("report.module_status", "📋 Module Status:"),
    ("report.module.operational", "   {name}: ✅ OPERATIONAL"),
    ("report.module.needs_attention", "   {name}: ❌ NEEDS ATTENTION"),
    ("report.saved", "📄 Full report saved to: {path}"),
    ("report.write_failed", "Failed to save report: {error}"),
    ("i18n.lang.invalid_env", "Invalid value for {env}: {value}. Expected 'en' or 'ca'."),
    (
        "i18n.disclaimer.machine_translated",
        "Note: non-English output is machine translated and may be inaccurate.",
    ),
];

/// Static Catalan catalog entries loaded into the localized message bundle.
const CATALOG_CA: &[(&str, &str)] = &[
    ("main.version", "nexus-unlock {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "sortida"),
    ("output.write_failed", "No s'ha pogut escriure a {stream}: {error}"),
    ("validate.init", "S'està inicialitzant la validació de desbloqueig NEXUS..."),
    ("validate.banner", "🧠 Validació final de desbloqueig NEXUS"),
    ("validate.config.load_failed", "No s'ha pogut carregar la configuració: {error}"),
    (
        "validate.client.init_failed",
        "No s'ha pogut inicialitzar el client d'endpoints: {error}",
    ),
    ("validate.join_failed", "La tasca de validació ha fallat: {error}"),
    ("validate.interrupted", "⚠️  Validació interrompuda per l'usuari"),
    ("validate.failed", "❌ La validació ha fallat amb un error: {error}"),
    ("transcript.section", "=== Provant {title} ==="),
    ("transcript.result", "{status}: {name}"),
    ("transcript.detail", "    {details}"),
    ("report.header", "🎯 INFORME FINAL DE VALIDACIÓ DE DESBLOQUEIG"),
    ("report.results", "📊 Resultats: {passed}/{total} aprovats ({rate}%)"),
    ("report.duration", "⏱️  Durada: {seconds} segons"),
    ("report.fingerprint", "🔒 Bloqueig d'empremta: {fingerprint}"),
    (
        "report.unlocked.headline",
        "✅ SISTEMA TOTALMENT DESBLOQUEJAT - Tots els mòduls operatius",
    ),
    ("report.unlocked.next", "🚀 A punt per al desplegament en producció"),
    (
        "report.partial.headline",
        "⚠️  DESBLOQUEIG PARCIAL - Alguns mòduls necessiten atenció",
    ),
    ("report.partial.next", "🔧 Reviseu les proves fallides i corregiu els problemes"),
    ("report.module_status", "📋 Estat dels mòduls:"),
    ("report.module.operational", "   {name}: ✅ OPERATIU"),
    ("report.module.needs_attention", "   {name}: ❌ NECESSITA ATENCIÓ"),
    ("report.saved", "📄 Informe complet desat a: {path}"),
    ("report.write_failed", "No s'ha pogut desar l'informe: {error}"),
    (
        "i18n.lang.invalid_env",
        "Valor no vàlid per a {env}: {value}. S'esperava 'en' o 'ca'.",
    ),
    (
        "i18n.disclaimer.machine_translated",
        "Nota: la sortida que no és en anglès està traduïda automàticament i pot ser inexacta.",
    ),
];

/// Returns the message catalog for the requested locale.
pub(crate) fn catalog_for(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static CATALOG_CA_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    match locale {
        Locale::En => CATALOG_EN_MAP.get_or_init(|| CATALOG_EN.iter().copied().collect()),
        Locale::Ca => CATALOG_CA_MAP.get_or_init(|| CATALOG_CA.iter().copied().collect()),
    }
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` using the selected locale while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    let locale = current_locale();
    let template = catalog_for(locale)
        .get(key)
        .copied()
        .or_else(|| catalog_for(Locale::En).get(key).copied())
        .unwrap_or(key);
    if args.is_empty() {
        return template.to_string();
    }

    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a localized message from a key and named arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
///
/// # Returns
///
/// A localized [`String`] with placeholders substituted.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::use_debug,
        clippy::dbg_macro,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        reason = "Test-only output and panic-based assertions are permitted."
    )]

    use super::CATALOG_CA;
    use super::CATALOG_EN;
    use super::Locale;
    use super::MessageArg;
    use super::SUPPORTED_LOCALES;
    use super::catalog_for;
    use super::translate;

    #[test]
    fn catalogs_cover_the_same_keys() {
        let english: Vec<&str> = CATALOG_EN.iter().map(|(key, _)| *key).collect();
        let catalan: Vec<&str> = CATALOG_CA.iter().map(|(key, _)| *key).collect();
        for key in &english {
            assert!(catalan.contains(key), "Catalan catalog missing {key}");
        }
        for key in &catalan {
            assert!(english.contains(key), "English catalog missing {key}");
        }
    }

    #[test]
    fn catalog_keys_are_unique() {
        for locale in SUPPORTED_LOCALES {
            let raw = match locale {
                Locale::En => CATALOG_EN,
                Locale::Ca => CATALOG_CA,
            };
            assert_eq!(raw.len(), catalog_for(*locale).len());
        }
    }

    #[test]
    fn translate_substitutes_named_placeholders() {
        let message =
            translate("report.saved", vec![MessageArg::new("path", "report.json")]);
        assert_eq!(message, "📄 Full report saved to: report.json");
    }

    #[test]
    fn translate_falls_back_to_the_key() {
        assert_eq!(translate("no.such.key", Vec::new()), "no.such.key");
    }

    #[test]
    fn locale_parse_tolerates_region_tags() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("EN-us"), Some(Locale::En));
        assert_eq!(Locale::parse("ca_ES"), Some(Locale::Ca));
        assert_eq!(Locale::parse(""), None);
        assert_eq!(Locale::parse("fr"), None);
    }
}
