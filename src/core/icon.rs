use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

/// Where an icon's markup came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Provenance {
    /// Compiled component shipped in the shared icon package.
    SharedPackage,
    /// Source component living inside one application.
    CustomComponent { app: String },
    /// Legacy icon-font class, rendered by a stylesheet rather than markup.
    CssClass,
}

impl Provenance {
    pub fn custom(app: impl Into<String>) -> Self {
        Provenance::CustomComponent { app: app.into() }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Provenance::CustomComponent { .. })
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::SharedPackage => f.write_str("shared-package"),
            Provenance::CustomComponent { app } => write!(f, "custom-component:{}", app),
            Provenance::CssClass => f.write_str("css-class"),
        }
    }
}

/// A catalog entry: a named, self-contained SVG fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    name: String,
    markup: String,
    provenance: Provenance,
    used_by: BTreeSet<String>,
}

impl Icon {
    pub fn new(name: impl Into<String>, markup: impl Into<String>, provenance: Provenance) -> Self {
        Self {
            name: name.into(),
            markup: markup.into(),
            provenance,
            used_by: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    /// Applications whose sources mention this icon by name.
    pub fn used_by(&self) -> &BTreeSet<String> {
        &self.used_by
    }

    pub fn is_used_by(&self, app: &str) -> bool {
        self.used_by.contains(app)
    }
}

/// Name-keyed icon catalog. Iteration is in byte order of names.
///
/// Entries are write-once: the first icon inserted under a name stays, later
/// ones are dropped. Markup cannot change after insertion.
#[derive(Debug, Default, Clone)]
pub struct IconCatalog {
    icons: BTreeMap<String, Icon>,
}

impl IconCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `icon` unless its name is already taken. Returns whether it was inserted.
    pub fn insert_if_absent(&mut self, icon: Icon) -> bool {
        if self.icons.contains_key(&icon.name) {
            return false;
        }
        self.icons.insert(icon.name.clone(), icon);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Icon> {
        self.icons.get(name)
    }

    /// Record that `app` references the icon. Unknown names are ignored.
    pub fn mark_used(&mut self, name: &str, app: &str) {
        if let Some(icon) = self.icons.get_mut(name) {
            icon.used_by.insert(app.to_string());
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Icon> {
        self.icons.values()
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Number of icons referenced by `app`.
    pub fn used_count(&self, app: &str) -> usize {
        self.iter().filter(|icon| icon.is_used_by(app)).count()
    }
}

/// Legacy icon-font classes found per application (`app -> {"pi-check", ...}`).
///
/// Kept apart from [`IconCatalog`]: these have no markup.
pub type LegacyClassUsage = BTreeMap<String, BTreeSet<String>>;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_first_insert_wins() {
        let mut catalog = IconCatalog::new();
        assert!(catalog.insert_if_absent(Icon::new("IconAdd", "<svg>a</svg>", Provenance::SharedPackage)));
        assert!(!catalog.insert_if_absent(Icon::new(
            "IconAdd",
            "<svg>b</svg>",
            Provenance::custom("web")
        )));

        let icon = catalog.get("IconAdd").unwrap();
        assert_eq!(icon.markup(), "<svg>a</svg>");
        assert_eq!(icon.provenance(), &Provenance::SharedPackage);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_mark_used_is_idempotent() {
        let mut catalog = IconCatalog::new();
        catalog.insert_if_absent(Icon::new("IconAdd", "<svg/>", Provenance::SharedPackage));

        catalog.mark_used("IconAdd", "web");
        catalog.mark_used("IconAdd", "web");
        catalog.mark_used("IconAdd", "admin");
        catalog.mark_used("Missing", "web");

        let used: Vec<&str> = catalog
            .get("IconAdd")
            .unwrap()
            .used_by()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(used, vec!["admin", "web"]);
        assert_eq!(catalog.used_count("web"), 1);
        assert!(!catalog.contains("Missing"));
    }

    #[test]
    fn test_provenance_display() {
        assert_eq!(Provenance::SharedPackage.to_string(), "shared-package");
        assert_eq!(Provenance::custom("web").to_string(), "custom-component:web");
        assert_eq!(Provenance::CssClass.to_string(), "css-class");
    }
}
