//! Static service catalog shown in the interactive menu.

use crate::error::{AppError, Result};
use crate::models::whatsapp::{Row, Section};
use std::collections::HashMap;
use std::sync::Arc;

// ======================================================================
// LIMITES DE LA PLATAFORMA (interactive list messages)
// ======================================================================

pub const MAX_ROWS: usize = 10;
pub const MAX_ROW_TITLE_CHARS: usize = 24;
pub const MAX_ROW_DESCRIPTION_CHARS: usize = 72;

#[derive(Debug, Clone, PartialEq)]
pub struct Brochure {
    /// Share link as published; normalized right before sending.
    pub url: String,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub detail: String,
    pub brochure: Option<Brochure>,
}

impl CatalogEntry {
    pub fn to_row(&self) -> Row {
        Row {
            id: self.id.clone(),
            title: self.title.clone(),
            description: Some(self.description.clone()),
        }
    }
}

/// Ordered entries plus an id index. Cloning shares the underlying data.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    entries: Arc<Vec<CatalogEntry>>,
    index: Arc<HashMap<String, usize>>,
}

impl ServiceCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(AppError::catalog("catalog must contain at least one entry"));
        }
        if entries.len() > MAX_ROWS {
            return Err(AppError::catalog(format!(
                "catalog has {} entries, interactive lists allow at most {}",
                entries.len(),
                MAX_ROWS
            )));
        }

        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if entry.title.chars().count() > MAX_ROW_TITLE_CHARS {
                return Err(AppError::catalog(format!(
                    "title of '{}' exceeds {} characters",
                    entry.id, MAX_ROW_TITLE_CHARS
                )));
            }
            if entry.description.chars().count() > MAX_ROW_DESCRIPTION_CHARS {
                return Err(AppError::catalog(format!(
                    "description of '{}' exceeds {} characters",
                    entry.id, MAX_ROW_DESCRIPTION_CHARS
                )));
            }
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(AppError::catalog(format!("duplicate catalog id '{}'", entry.id)));
            }
        }

        Ok(Self {
            entries: Arc::new(entries),
            index: Arc::new(index),
        })
    }

    /// The seven services offered out of the box, each with a Drive brochure.
    pub fn builtin() -> Result<Self> {
        let entries = (1..=7)
            .map(|n| CatalogEntry {
                id: format!("service{}", n),
                title: format!("Service {}", n),
                description: format!("Description for Service {}", n),
                detail: format!("✅ Details for Service {}.", n),
                brochure: Some(Brochure {
                    url: format!(
                        "https://drive.google.com/file/d/service{}-brochure/view?usp=share_link",
                        n
                    ),
                    filename: format!("Service_{}_Brochure.pdf", n),
                }),
            })
            .collect();

        Self::new(entries)
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_section(&self, title: &str) -> Section {
        Section {
            title: title.to_string(),
            rows: self.entries.iter().map(CatalogEntry::to_row).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            title: format!("Title {}", id),
            description: "desc".to_string(),
            detail: format!("detail {}", id),
            brochure: None,
        }
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = ServiceCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.entries()[0].id, "service1");
        assert_eq!(catalog.entries()[6].id, "service7");

        let entry = catalog.get("service4").unwrap();
        assert_eq!(entry.detail, "✅ Details for Service 4.");
        assert_eq!(
            entry.brochure.as_ref().map(|b| b.filename.as_str()),
            Some("Service_4_Brochure.pdf")
        );
        assert!(catalog.get("service99").is_none());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let err = ServiceCatalog::new(vec![entry("a"), entry("b"), entry("a")]).unwrap_err();
        assert!(err.to_string().contains("duplicate catalog id 'a'"));
    }

    #[test]
    fn test_row_limits_are_enforced() {
        let too_many = (0..11).map(|i| entry(&i.to_string())).collect();
        assert!(ServiceCatalog::new(too_many).is_err());

        let mut long_title = entry("x");
        long_title.title = "A title that is far too long for a row".to_string();
        assert!(ServiceCatalog::new(vec![long_title]).is_err());

        assert!(ServiceCatalog::new(Vec::new()).is_err());
    }

    #[test]
    fn test_section_keeps_catalog_order() {
        let catalog = ServiceCatalog::new(vec![entry("b"), entry("a"), entry("c")]).unwrap();
        let section = catalog.to_section("Our Services");
        let ids: Vec<&str> = section.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(section.title, "Our Services");
    }
}
