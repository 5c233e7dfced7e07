use crate::domain::Property;

/// Criteria for listing properties. Every criterion that is set must hold.
///
/// String criteria that are empty or whitespace-only are treated as unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    /// Exact, case-sensitive match on the listing type.
    pub kind: Option<String>,
    /// Inclusive lower bound on the area.
    pub min_area: Option<i32>,
    /// Inclusive upper bound on the area.
    pub max_area: Option<i32>,
    /// Case-insensitive match on the name.
    pub name: Option<String>,
    /// Case-insensitive match on the address.
    pub address: Option<String>,
}

impl PropertyFilter {
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(kind) = active(&self.kind) {
            if property.kind != kind {
                return false;
            }
        }
        if self.min_area.is_some_and(|min| property.area < min) {
            return false;
        }
        if self.max_area.is_some_and(|max| property.area > max) {
            return false;
        }
        if let Some(name) = active(&self.name) {
            if !eq_ignore_case(&property.name, name) {
                return false;
            }
        }
        if let Some(address) = active(&self.address) {
            if !eq_ignore_case(&property.address, address) {
                return false;
            }
        }
        true
    }
}

fn active(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|value| !value.trim().is_empty())
}

fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}
