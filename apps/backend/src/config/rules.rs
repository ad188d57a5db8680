//! House-rule selection for new rooms.

use crate::domain::{HouseRule, RuleSet};
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Parse rule names; `none` (alone) selects the empty set.
pub fn parse_rule_list<I, S>(names: I) -> Result<RuleSet, AppError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names: Vec<S> = names.into_iter().collect();
    if let [only] = names.as_slice() {
        if only.as_ref().trim().eq_ignore_ascii_case("none") {
            return Ok(RuleSet::empty());
        }
    }
    names
        .iter()
        .map(|name| {
            HouseRule::parse_name(name.as_ref()).ok_or_else(|| {
                AppError::bad_request(
                    ErrorCode::InvalidRule,
                    format!("Unknown house rule {:?}", name.as_ref()),
                )
            })
        })
        .collect()
}

/// `DAIFUGO_DEFAULT_RULES`: comma-separated rule names, all four when unset.
pub fn default_rules_from_env() -> Result<RuleSet, AppError> {
    rules_from_value(std::env::var("DAIFUGO_DEFAULT_RULES").ok().as_deref())
}

pub fn rules_from_value(raw: Option<&str>) -> Result<RuleSet, AppError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(RuleSet::all());
    };
    let names = raw.split(',').map(str::trim).filter(|s| !s.is_empty());
    parse_rule_list(names).map_err(|e| AppError::config(format!("DAIFUGO_DEFAULT_RULES: {e}")))
}
