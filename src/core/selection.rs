use std::collections::BTreeSet;

/*-------------------------------------------------------------------------------------------------
  SelectionBuilder
-------------------------------------------------------------------------------------------------*/

/// Builder used to construct a [Selection] with the desired include and exclude sets.
///
/// ```
/// let selection = azureedl::SelectionBuilder::new()
///     .include(["AzureCloud", "Storage"])
///     .exclude(["Storage"])
///     .build();
///
/// assert!(selection.includes("AzureCloud"));
/// assert!(!selection.includes("Storage"));
/// ```
#[derive(Debug, Default)]
pub struct SelectionBuilder {
    include: Option<BTreeSet<String>>,
    exclude: Option<BTreeSet<String>>,
}

impl SelectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Only select service tags with these names.
    pub fn include<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.include = Some(
            names
                .into_iter()
                .map(|name| name.as_ref().to_string())
                .collect(),
        );
        self
    }

    /// Never select service tags with these names, even when also included.
    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude = Some(
            names
                .into_iter()
                .map(|name| name.as_ref().to_string())
                .collect(),
        );
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(self) -> Selection {
        Selection {
            include: self.include,
            exclude: self.exclude,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Selection
-------------------------------------------------------------------------------------------------*/

/// Service tag selection criteria: an optional include set and an optional exclude set of tag
/// names. A name present in both sets is excluded (exclude wins); an empty or absent include
/// set selects every non-excluded name.
#[derive(Debug, Default, Clone)]
pub struct Selection {
    include: Option<BTreeSet<String>>,
    exclude: Option<BTreeSet<String>>,
}

/*--------------------------------------------------------------------------------------
  Selection Implementation
--------------------------------------------------------------------------------------*/

impl Selection {
    /// Check whether a service tag name passes the selection criteria.
    pub fn includes(&self, name: &str) -> bool {
        if let Some(exclude) = &self.exclude {
            if exclude.contains(name) {
                return false;
            }
        }

        match &self.include {
            Some(include) if !include.is_empty() => include.contains(name),
            _ => true,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_includes_everything() {
        let selection = Selection::default();
        assert!(selection.includes("AzureCloud"));
        assert!(selection.includes("Storage"));
    }

    #[test]
    fn test_include_set() {
        let selection = SelectionBuilder::new().include(["AzureCloud"]).build();
        assert!(selection.includes("AzureCloud"));
        assert!(!selection.includes("Storage"));
    }

    #[test]
    fn test_exclude_set() {
        let selection = SelectionBuilder::new().exclude(["Storage"]).build();
        assert!(selection.includes("AzureCloud")); // Everything except the excluded name
        assert!(!selection.includes("Storage"));
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let selection = SelectionBuilder::new()
            .include(["AzureCloud"])
            .exclude(["AzureCloud"])
            .build();
        assert!(!selection.includes("AzureCloud"));
    }

    #[test]
    fn test_empty_include_set_behaves_like_no_include_set() {
        let selection = SelectionBuilder::new()
            .include(Vec::<String>::new())
            .exclude(["Storage"])
            .build();
        assert!(selection.includes("AzureCloud"));
        assert!(!selection.includes("Storage"));
    }
}
