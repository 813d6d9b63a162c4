use strsim::levenshtein;
use tracing::warn;

use crate::errors::{BudgetError, Result};
use crate::ledger::CategoryList;

const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Validated operations on the session's expense category list.
pub struct CategoryService;

impl CategoryService {
    /// Adds a new category, rejecting blank names and case-insensitive duplicates.
    pub fn add(categories: &mut CategoryList, name: &str) -> Result<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            warn!("rejected blank category name");
            return Err(BudgetError::InvalidArgument(
                "category name must not be empty".into(),
            ));
        }
        if let Some(existing) = categories.resolve(trimmed) {
            warn!(category = trimmed, "rejected duplicate category");
            return Err(BudgetError::InvalidArgument(format!(
                "Category `{}` already exists",
                existing
            )));
        }
        categories.push(trimmed.to_string());
        Ok(trimmed.to_string())
    }

    /// Resolves `name` to a listed category.
    pub fn resolve<'a>(categories: &'a CategoryList, name: &str) -> Result<&'a str> {
        categories
            .resolve(name)
            .ok_or_else(|| BudgetError::CategoryNotFound(name.trim().to_string()))
    }

    /// Closest listed category by edit distance, if any is reasonably close.
    pub fn suggest<'a>(categories: &'a CategoryList, name: &str) -> Option<&'a str> {
        let needle = name.trim().to_ascii_lowercase();
        categories
            .names()
            .iter()
            .map(|candidate| {
                (
                    levenshtein(&candidate.to_ascii_lowercase(), &needle),
                    candidate,
                )
            })
            .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, candidate)| candidate.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_trimmed_name() {
        let mut categories = CategoryList::default();
        let added = CategoryService::add(&mut categories, "  Pets ").unwrap();
        assert_eq!(added, "Pets");
        assert_eq!(categories.names().last().map(String::as_str), Some("Pets"));
    }

    #[test]
    fn add_rejects_duplicates_regardless_of_case() {
        let mut categories = CategoryList::default();
        let err = CategoryService::add(&mut categories, "utilities").unwrap_err();
        assert!(
            matches!(err, BudgetError::InvalidArgument(ref message) if message.contains("Utilities")),
            "unexpected error: {err:?}"
        );
        assert_eq!(categories.len(), 6);
    }

    #[test]
    fn add_rejects_blank_names() {
        let mut categories = CategoryList::default();
        assert!(CategoryService::add(&mut categories, "   ").is_err());
    }

    #[test]
    fn resolve_reports_unknown_category() {
        let categories = CategoryList::default();
        let err = CategoryService::resolve(&categories, "Travel").unwrap_err();
        assert!(matches!(err, BudgetError::CategoryNotFound(ref name) if name == "Travel"));
    }

    #[test]
    fn suggest_finds_near_misses_only() {
        let categories = CategoryList::default();
        assert_eq!(
            CategoryService::suggest(&categories, "grocerys"),
            Some("Groceries")
        );
        assert_eq!(CategoryService::suggest(&categories, "Vacation"), None);
    }
}
