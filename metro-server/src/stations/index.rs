//! Station name search.

use unicode_normalization::UnicodeNormalization;

use crate::domain::{Network, Station, StationId};

/// Fold `s` into a search key.
///
/// Applies compatibility decomposition (NFKD), drops combining marks,
/// whitespace, periods, dashes and apostrophes, then lowercases. So
/// `"Côte-des-Neiges"` and `"cote des neiges"` compare equal.
pub fn normalize(s: &str) -> String {
    s.nfkd()
        .filter(|&c| !is_ignored(c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn is_ignored(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{0300}'..='\u{036F}' | '.' | '-' | '\'')
}

#[derive(Debug, Clone)]
struct Entry {
    key: String,
    id: StationId,
}

/// Search index over station names and ids.
///
/// Built once from the network. Entries are kept sorted by station name,
/// so results come back in display order.
#[derive(Debug, Clone)]
pub struct StationIndex {
    entries: Vec<Entry>,
}

impl StationIndex {
    /// Index every station of `network`.
    pub fn new(network: &Network) -> Self {
        let mut stations: Vec<&Station> = network.stations().iter().collect();
        stations.sort_by(|a, b| {
            normalize(&a.name)
                .cmp(&normalize(&b.name))
                .then_with(|| a.name.cmp(&b.name))
        });

        let entries = stations
            .into_iter()
            .map(|s| Entry {
                key: normalize(&format!("{} {}", s.name, s.id)),
                id: s.id.clone(),
            })
            .collect();

        Self { entries }
    }

    /// Stations whose name or id contains `query`, at most `limit` of them.
    ///
    /// Matching ignores case, accents and punctuation. An empty query
    /// matches every station.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&StationId> {
        let needle = normalize(query);
        self.entries
            .iter()
            .filter(|e| e.key.contains(&needle))
            .map(|e| &e.id)
            .take(limit)
            .collect()
    }

    /// Number of indexed stations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no stations are indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, LineId};

    fn sid(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn network() -> Network {
        let green = LineId::parse("green").unwrap();
        let ids = ["snowdon", "cdn", "place-des-arts", "lionel-groulx", "st-michel"];
        let lines = vec![Line::new(green.clone(), "1", "Green", ids.map(sid).to_vec())];
        let stations = vec![
            Station::new(sid("snowdon"), "Snowdon", vec![green.clone()]),
            Station::new(sid("cdn"), "Côte-des-Neiges", vec![green.clone()]),
            Station::new(sid("place-des-arts"), "Place-des-Arts", vec![green.clone()]),
            Station::new(sid("lionel-groulx"), "Lionel-Groulx", vec![green.clone()]),
            Station::new(sid("st-michel"), "Saint-Michel", vec![green]),
        ];
        Network::new(lines, stations).unwrap()
    }

    fn names<'a>(ids: &[&'a StationId]) -> Vec<&'a str> {
        ids.iter().map(|id| id.as_str()).collect()
    }

    #[test]
    fn normalize_folds_accents_and_punctuation() {
        assert_eq!(normalize("Côte-des-Neiges"), "cotedesneiges");
        assert_eq!(normalize("cote des neiges"), "cotedesneiges");
        assert_eq!(normalize("L'Assomption"), "lassomption");
        assert_eq!(normalize("St. Laurent"), "stlaurent");
        assert_eq!(normalize("ÉMILE"), "emile");
        assert_eq!(normalize("e\u{0301}cole"), "ecole");
        assert_eq!(normalize("ﬁn"), "fin");
        assert_eq!(normalize("Ｂｅｒｒｉ"), "berri");
        assert_eq!(normalize("Kőbánya"), "kobanya");
        assert_eq!(normalize("Ūno²"), "uno2");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn search_ignores_accents() {
        let network = network();
        let index = StationIndex::new(&network);
        assert_eq!(names(&index.search("cote", 10)), vec!["cdn"]);
        assert_eq!(names(&index.search("CÔTE DES", 10)), vec!["cdn"]);
    }

    #[test]
    fn search_matches_id() {
        let network = network();
        let index = StationIndex::new(&network);
        assert_eq!(names(&index.search("st-mi", 10)), vec!["st-michel"]);
    }

    #[test]
    fn results_sorted_by_name() {
        let network = network();
        let index = StationIndex::new(&network);
        // "des" appears in Côte-des-Neiges and Place-des-Arts.
        assert_eq!(names(&index.search("des", 10)), vec!["cdn", "place-des-arts"]);
    }

    #[test]
    fn empty_query_returns_everything_up_to_limit() {
        let network = network();
        let index = StationIndex::new(&network);
        assert_eq!(index.len(), 5);
        assert_eq!(
            names(&index.search("", 10)),
            vec!["cdn", "lionel-groulx", "place-des-arts", "st-michel", "snowdon"]
        );
        assert_eq!(index.search("", 2).len(), 2);
    }

    #[test]
    fn no_match() {
        let network = network();
        let index = StationIndex::new(&network);
        assert!(index.search("berri", 10).is_empty());
        assert!(index.search("snow", 0).is_empty());
    }
}
