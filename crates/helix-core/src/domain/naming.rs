//! Naming variants derived from a single raw identifier.
//!
//! Every generated artifact refers to the entity by one of a handful of
//! casings. They are all computed here, in one place, from the raw
//! kebab-case name the user typed, so that two files produced in the same
//! run can never disagree about what the entity is called.
//!
//! | Variant        | `order-item` | Rule                                      |
//! |----------------|--------------|-------------------------------------------|
//! | `pascal`       | `OrderItem`  | split on `-`, capitalise each word        |
//! | `camel`        | `orderItem`  | pascal with the first char lower-cased    |
//! | `flat_lower`   | `orderitem`  | hyphens removed, lower-cased              |
//! | `plural_lower` | `orderitems` | `flat_lower` + `"s"`                      |
//! | `file_safe`    | `order_item` | hyphens replaced by `_`, case preserved   |
//!
//! # Known limitation
//!
//! The plural rule is a literal `"s"` suffix. `address` becomes `addresss`
//! and `category` becomes `categorys`. Generated route and table names
//! already depend on this exact convention, so it must not be "fixed" here.

use std::fmt;

use serde::Serialize;

/// All naming variants of one identifier.
///
/// Immutable once derived. [`NamingVariants::derive`] is a pure function:
/// the same input always yields byte-identical output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NamingVariants {
    raw: String,
    pascal: String,
    camel: String,
    flat_lower: String,
    plural_lower: String,
    file_safe: String,
}

impl NamingVariants {
    /// Derive every variant from `identifier`.
    ///
    /// Never fails. An empty identifier yields empty strings everywhere.
    pub fn derive(identifier: &str) -> Self {
        let flat_lower = flat_lower(identifier);
        Self {
            raw: identifier.to_owned(),
            pascal: pascal_case(identifier),
            camel: camel_case(identifier),
            plural_lower: plural_lower(&flat_lower),
            flat_lower,
            file_safe: file_safe(identifier),
        }
    }

    /// The identifier exactly as supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn pascal(&self) -> &str {
        &self.pascal
    }

    pub fn camel(&self) -> &str {
        &self.camel
    }

    pub fn flat_lower(&self) -> &str {
        &self.flat_lower
    }

    pub fn plural_lower(&self) -> &str {
        &self.plural_lower
    }

    pub fn file_safe(&self) -> &str {
        &self.file_safe
    }
}

impl fmt::Display for NamingVariants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pascal)
    }
}

/// `order-item` → `OrderItem`.
///
/// Empty segments (leading, trailing or doubled hyphens) contribute nothing.
/// Only the first character of each segment is touched; the remainder is
/// kept as written, so `http-API` becomes `HttpAPI`.
pub fn pascal_case(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());
    for segment in identifier.split('-').filter(|s| !s.is_empty()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// `order-item` → `orderItem`.
pub fn camel_case(identifier: &str) -> String {
    let pascal = pascal_case(identifier);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `Order-Item` → `orderitem`.
pub fn flat_lower(identifier: &str) -> String {
    identifier.replace('-', "").to_lowercase()
}

/// Append a literal `s`. No linguistic rules are applied.
pub fn plural_lower(flat_lower: &str) -> String {
    format!("{flat_lower}s")
}

/// `order-item` → `order_item`; case is preserved.
pub fn file_safe(identifier: &str) -> String {
    identifier.replace('-', "_")
}
