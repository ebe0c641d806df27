//! State Selection
//!
//! Brazilian state (UF) codes and the rule deciding what a state change
//! does to the city list.

/// Dropdown value meaning "nothing selected" (state and city)
pub const UNSET: &str = "0";

/// Selected state abbreviation, e.g. `SP`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateCode(String);

impl StateCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn unset() -> Self {
        Self(UNSET.to_string())
    }

    pub fn is_unset(&self) -> bool {
        self.0.is_empty() || self.0 == UNSET
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StateCode {
    fn default() -> Self {
        Self::unset()
    }
}

impl std::fmt::Display for StateCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a state change asks of the city lookup
#[derive(Debug, Clone, PartialEq)]
pub enum CityLookup {
    /// No state selected: drop the city list, request nothing
    Clear,
    /// Request `{uf}/municipios` and replace the list with the answer
    Fetch(StateCode),
}

/// Decide the city request for a newly selected state.
pub fn city_lookup(code: &StateCode) -> CityLookup {
    if code.is_unset() {
        CityLookup::Clear
    } else {
        CityLookup::Fetch(code.clone())
    }
}

/// Sort state abbreviations for display and drop duplicates
pub fn sorted_codes(mut codes: Vec<String>) -> Vec<String> {
    codes.sort();
    codes.dedup();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_clears_without_fetch() {
        assert_eq!(city_lookup(&StateCode::unset()), CityLookup::Clear);
        assert_eq!(city_lookup(&StateCode::new("")), CityLookup::Clear);
    }

    #[test]
    fn test_selected_state_fetches() {
        let sp = StateCode::new("SP");
        assert_eq!(city_lookup(&sp), CityLookup::Fetch(sp.clone()));
    }

    #[test]
    fn test_sorted_codes() {
        let codes = vec!["SP".to_string(), "AC".to_string(), "RJ".to_string(), "AC".to_string()];
        assert_eq!(sorted_codes(codes), vec!["AC", "RJ", "SP"]);
    }
}
