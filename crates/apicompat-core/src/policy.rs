//! Compatibility policy
//!
//! Which field-map changes count as breaking, per comparison category. The
//! default table is the conservative policy every comparison uses unless a
//! caller layers overrides on top (for example from a TOML file).
//!
//! ```
//! use apicompat_core::policy::CompatibilityPolicy;
//!
//! let policy = CompatibilityPolicy::default();
//! assert!(policy.params.add_required_is_breaking);
//! assert!(!policy.response.add_required_is_breaking);
//! assert!(!policy.response.allow_type_widening);
//! ```

use serde::{Deserialize, Serialize};

/// Rules for one comparison category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldRules {
    /// Adding a required field breaks existing callers
    pub add_required_is_breaking: bool,
    /// Removing a field breaks existing callers
    pub remove_is_breaking: bool,
    /// `integer -> number` is a non-breaking widening
    pub allow_type_widening: bool,
}

impl FieldRules {
    /// Rules for what callers send (parameters, request bodies)
    pub const INPUT: FieldRules = FieldRules {
        add_required_is_breaking: true,
        remove_is_breaking: true,
        allow_type_widening: true,
    };

    /// Rules for what callers receive (response bodies)
    pub const OUTPUT: FieldRules = FieldRules {
        add_required_is_breaking: false,
        remove_is_breaking: true,
        allow_type_widening: false,
    };

    fn apply(self, overrides: &RuleOverrides) -> Self {
        Self {
            add_required_is_breaking: overrides
                .add_required_is_breaking
                .unwrap_or(self.add_required_is_breaking),
            remove_is_breaking: overrides.remove_is_breaking.unwrap_or(self.remove_is_breaking),
            allow_type_widening: overrides
                .allow_type_widening
                .unwrap_or(self.allow_type_widening),
        }
    }
}

/// Per-category rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompatibilityPolicy {
    pub params: FieldRules,
    pub request: FieldRules,
    pub response: FieldRules,
}

impl Default for CompatibilityPolicy {
    fn default() -> Self {
        Self {
            params: FieldRules::INPUT,
            request: FieldRules::INPUT,
            response: FieldRules::OUTPUT,
        }
    }
}

impl CompatibilityPolicy {
    /// Layer overrides on top of this policy; absent keys keep their value
    pub fn with_overrides(self, overrides: &PolicyOverrides) -> Self {
        Self {
            params: self.params.apply(&overrides.params),
            request: self.request.apply(&overrides.request),
            response: self.response.apply(&overrides.response),
        }
    }
}

/// Partial policy as written in a policy file
///
/// ```toml
/// [response]
/// remove_is_breaking = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyOverrides {
    pub params: RuleOverrides,
    pub request: RuleOverrides,
    pub response: RuleOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleOverrides {
    pub add_required_is_breaking: Option<bool>,
    pub remove_is_breaking: Option<bool>,
    pub allow_type_widening: Option<bool>,
}
