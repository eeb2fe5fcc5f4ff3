//! Attribute parsing helpers for the Parameter derive macro.

use syn::{Attribute, LitStr};

/// Get the override from `#[parameter(value = "xxx")]`.
///
/// Returns an error for unknown keys so typos don't silently fall back
/// to the lowercase member name.
pub fn get_wire_value(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut value = None;
    for attr in attrs {
        if !attr.path().is_ident("parameter") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("value") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(meta.error("parameter value cannot be empty"));
                }
                value = Some(lit);
                Ok(())
            } else {
                Err(meta.error("unsupported parameter attribute, expected `value`"))
            }
        })?;
    }
    Ok(value)
}
