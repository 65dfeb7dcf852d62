use crate::error::{FluidError, FluidResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Identifiers checked by default, in reporting order.
pub const STANDARD_REFRIGERANT_IDS: [&str; 17] = [
    "R134a", "R404A", "R407C", "R410A", "R717", "R744", "R12", "R22", "R1234yf", "R1234ze",
    "R32", "R417A", "R507", "R290", "R600a", "R718", "R1270",
];

/// Ordered, immutable list of refrigerant identifiers to test a reading against.
///
/// Order is reporting order only; it carries no ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct RefrigerantCatalog {
    ids: Vec<String>,
}

impl RefrigerantCatalog {
    /// Build a catalog, rejecting blank and duplicate identifiers.
    pub fn new<I, S>(ids: I) -> FluidResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(|s| s.into().trim().to_string()).collect();

        let mut seen = HashSet::new();
        for id in &ids {
            if id.is_empty() {
                return Err(FluidError::InvalidArg {
                    what: "catalog identifiers must not be empty",
                });
            }
            if !seen.insert(id.as_str()) {
                return Err(FluidError::InvalidArg {
                    what: "catalog identifiers must be unique",
                });
            }
        }

        Ok(Self { ids })
    }

    /// The 17 refrigerants checked by default.
    pub fn standard() -> Self {
        Self {
            ids: STANDARD_REFRIGERANT_IDS
                .iter()
                .map(|id| id.to_string())
                .collect(),
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|known| known == id)
    }
}

impl Default for RefrigerantCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<String>> for RefrigerantCatalog {
    type Error = FluidError;

    fn try_from(ids: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(ids)
    }
}

impl From<RefrigerantCatalog> for Vec<String> {
    fn from(catalog: RefrigerantCatalog) -> Self {
        catalog.ids
    }
}

/// Broad chemical family, for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RefrigerantFamily {
    Cfc,
    Hcfc,
    Hfc,
    Hfo,
    Hydrocarbon,
    Natural,
    /// Zeotropic or azeotropic blend, evaluated on its dew line.
    Blend,
}

impl RefrigerantFamily {
    pub fn label(&self) -> &'static str {
        match self {
            RefrigerantFamily::Cfc => "CFC",
            RefrigerantFamily::Hcfc => "HCFC",
            RefrigerantFamily::Hfc => "HFC",
            RefrigerantFamily::Hfo => "HFO",
            RefrigerantFamily::Hydrocarbon => "HC",
            RefrigerantFamily::Natural => "natural",
            RefrigerantFamily::Blend => "blend",
        }
    }
}

impl fmt::Display for RefrigerantFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefrigerantInfo {
    pub id: &'static str,
    pub display_name: &'static str,
    pub family: RefrigerantFamily,
    pub aliases: &'static [&'static str],
}

impl RefrigerantInfo {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.id.to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }
}

const STANDARD_REFRIGERANTS: [RefrigerantInfo; 17] = [
    RefrigerantInfo {
        id: "R134a",
        display_name: "1,1,1,2-Tetrafluoroethane",
        family: RefrigerantFamily::Hfc,
        aliases: &["hfc-134a"],
    },
    RefrigerantInfo {
        id: "R404A",
        display_name: "R125/R143a/R134a blend",
        family: RefrigerantFamily::Blend,
        aliases: &[],
    },
    RefrigerantInfo {
        id: "R407C",
        display_name: "R32/R125/R134a blend",
        family: RefrigerantFamily::Blend,
        aliases: &[],
    },
    RefrigerantInfo {
        id: "R410A",
        display_name: "R32/R125 blend",
        family: RefrigerantFamily::Blend,
        aliases: &["puron"],
    },
    RefrigerantInfo {
        id: "R717",
        display_name: "Ammonia",
        family: RefrigerantFamily::Natural,
        aliases: &["nh3"],
    },
    RefrigerantInfo {
        id: "R744",
        display_name: "Carbon Dioxide",
        family: RefrigerantFamily::Natural,
        aliases: &["co2"],
    },
    RefrigerantInfo {
        id: "R12",
        display_name: "Dichlorodifluoromethane",
        family: RefrigerantFamily::Cfc,
        aliases: &["freon-12", "cfc-12"],
    },
    RefrigerantInfo {
        id: "R22",
        display_name: "Chlorodifluoromethane",
        family: RefrigerantFamily::Hcfc,
        aliases: &["hcfc-22"],
    },
    RefrigerantInfo {
        id: "R1234yf",
        display_name: "2,3,3,3-Tetrafluoropropene",
        family: RefrigerantFamily::Hfo,
        aliases: &["hfo-1234yf"],
    },
    RefrigerantInfo {
        id: "R1234ze",
        display_name: "trans-1,3,3,3-Tetrafluoropropene",
        family: RefrigerantFamily::Hfo,
        aliases: &["hfo-1234ze"],
    },
    RefrigerantInfo {
        id: "R32",
        display_name: "Difluoromethane",
        family: RefrigerantFamily::Hfc,
        aliases: &["hfc-32"],
    },
    RefrigerantInfo {
        id: "R417A",
        display_name: "R125/R134a/R600 blend",
        family: RefrigerantFamily::Blend,
        aliases: &[],
    },
    RefrigerantInfo {
        id: "R507",
        display_name: "R125/R143a blend",
        family: RefrigerantFamily::Blend,
        aliases: &["r507a"],
    },
    RefrigerantInfo {
        id: "R290",
        display_name: "Propane",
        family: RefrigerantFamily::Hydrocarbon,
        aliases: &["c3h8"],
    },
    RefrigerantInfo {
        id: "R600a",
        display_name: "Isobutane",
        family: RefrigerantFamily::Hydrocarbon,
        aliases: &["i-butane"],
    },
    RefrigerantInfo {
        id: "R718",
        display_name: "Water",
        family: RefrigerantFamily::Natural,
        aliases: &["h2o"],
    },
    RefrigerantInfo {
        id: "R1270",
        display_name: "Propylene",
        family: RefrigerantFamily::Hydrocarbon,
        aliases: &["propene", "c3h6"],
    },
];

pub fn standard_refrigerants() -> &'static [RefrigerantInfo] {
    &STANDARD_REFRIGERANTS
}

pub fn refrigerant_info(id: &str) -> Option<&'static RefrigerantInfo> {
    standard_refrigerants().iter().find(|info| info.id == id)
}

pub fn filter_refrigerants(query: &str) -> Vec<RefrigerantInfo> {
    standard_refrigerants()
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_is_verbatim() {
        let catalog = RefrigerantCatalog::standard();
        assert_eq!(catalog.len(), 17);
        assert_eq!(catalog.iter().next(), Some("R134a"));
        assert_eq!(catalog.iter().last(), Some("R1270"));
        assert_eq!(catalog.ids(), STANDARD_REFRIGERANT_IDS);
    }

    #[test]
    fn metadata_follows_catalog_order() {
        let ids: Vec<&str> = standard_refrigerants().iter().map(|info| info.id).collect();
        assert_eq!(ids, STANDARD_REFRIGERANT_IDS);
    }

    #[test]
    fn rejects_duplicates_and_blanks() {
        assert!(RefrigerantCatalog::new(["R134a", "R134a"]).is_err());
        assert!(RefrigerantCatalog::new(["R134a", " "]).is_err());
        assert!(RefrigerantCatalog::new(Vec::<String>::new()).unwrap().is_empty());
    }

    #[test]
    fn identifiers_are_trimmed() {
        let catalog = RefrigerantCatalog::new([" R32 ", "R22"]).unwrap();
        assert!(catalog.contains("R32"));
    }

    #[test]
    fn search_finds_ammonia() {
        let results = filter_refrigerants("ammonia");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "R717");

        assert_eq!(filter_refrigerants("CO2")[0].id, "R744");
        assert_eq!(filter_refrigerants("").len(), 17);
    }

    #[test]
    fn info_lookup() {
        assert_eq!(
            refrigerant_info("R290").map(|info| info.family),
            Some(RefrigerantFamily::Hydrocarbon)
        );
        assert!(refrigerant_info("R999").is_none());
    }

    #[test]
    fn catalog_yaml_roundtrip_validates() {
        let catalog: RefrigerantCatalog = serde_yaml::from_str("[R32, R410A]").unwrap();
        assert_eq!(catalog.ids(), ["R32", "R410A"]);
        assert!(serde_yaml::from_str::<RefrigerantCatalog>("[R32, R32]").is_err());
    }
}
