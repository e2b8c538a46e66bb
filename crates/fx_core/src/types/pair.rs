//! Currency pair catalog.
//!
//! The desk quotes a fixed set of pairs, split between the offshore and
//! onshore markets. The same currency pair may appear once per market under
//! different ids (`USDINR-OFF`, `USDINR-ON`, `NDF-USDINR`).
//!
//! # Examples
//!
//! ```
//! use fx_core::types::{Currency, Market, PairCatalog};
//!
//! let catalog = PairCatalog::standard();
//! let pair = catalog.get("EURUSD-OFF").unwrap();
//! assert_eq!(pair.base(), Currency::EUR);
//! assert_eq!(pair.quote(), Currency::USD);
//! assert_eq!(pair.market(), Market::Offshore);
//!
//! assert!(catalog.get("NOT-A-PAIR").is_none());
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::sync::OnceLock;

use super::currency::Currency;
use super::error::CurrencyError;

/// Identifier of a tradable pair, e.g. `EURUSD-OFF`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairId(String);

impl PairId {
    /// Creates a pair id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PairId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PairId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for PairId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PairId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Market in which a pair is quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Market {
    /// Offshore (international) market
    Offshore,
    /// Onshore (domestic) market
    Onshore,
}

impl Market {
    /// Lowercase market label.
    pub fn label(&self) -> &'static str {
        match self {
            Market::Offshore => "offshore",
            Market::Onshore => "onshore",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Static description of one tradable pair.
///
/// Defined once when the catalog is built and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyPair {
    id: PairId,
    base: Currency,
    quote: Currency,
    display_name: String,
    market: Market,
}

impl CurrencyPair {
    /// Creates a pair definition.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::SameCurrency` if base and quote are the same.
    ///
    /// # Examples
    ///
    /// ```
    /// use fx_core::types::{Currency, CurrencyPair, Market};
    ///
    /// let pair = CurrencyPair::new("USDSGD-ON", Currency::USD, Currency::SGD, "USDSGD", Market::Onshore).unwrap();
    /// assert_eq!(pair.code(), "USD/SGD");
    ///
    /// assert!(CurrencyPair::new("X", Currency::USD, Currency::USD, "X", Market::Onshore).is_err());
    /// ```
    pub fn new(
        id: impl Into<PairId>,
        base: Currency,
        quote: Currency,
        display_name: impl Into<String>,
        market: Market,
    ) -> Result<Self, CurrencyError> {
        if base == quote {
            return Err(CurrencyError::SameCurrency(base.code().to_string()));
        }
        Ok(Self::define(id, base, quote, display_name, market))
    }

    fn define(
        id: impl Into<PairId>,
        base: Currency,
        quote: Currency,
        display_name: impl Into<String>,
        market: Market,
    ) -> Self {
        Self {
            id: id.into(),
            base,
            quote,
            display_name: display_name.into(),
            market,
        }
    }

    /// Returns the pair id.
    #[inline]
    pub fn id(&self) -> &PairId {
        &self.id
    }

    /// Returns the base currency.
    #[inline]
    pub fn base(&self) -> Currency {
        self.base
    }

    /// Returns the quote currency.
    #[inline]
    pub fn quote(&self) -> Currency {
        self.quote
    }

    /// Returns the display name shown in rate tables.
    #[inline]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the market classification.
    #[inline]
    pub fn market(&self) -> Market {
        self.market
    }

    /// Flag glyph of the base currency.
    pub fn flag(&self) -> &'static str {
        self.base.flag()
    }

    /// Pair code in `BASE/QUOTE` form.
    pub fn code(&self) -> String {
        format!("{}/{}", self.base.code(), self.quote.code())
    }

    /// Returns true if either leg is the given currency.
    pub fn involves(&self, currency: Currency) -> bool {
        self.base == currency || self.quote == currency
    }

    /// Returns true if either leg is quoted in yen.
    pub fn has_jpy_leg(&self) -> bool {
        self.involves(Currency::JPY)
    }

    fn matches_search(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.display_name.to_lowercase().contains(&q)
            || self.base.code().to_lowercase().contains(&q)
            || self.quote.code().to_lowercase().contains(&q)
            || self.market.label().contains(&q)
    }
}

/// Named groups used by the rate table filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairGroup {
    /// Pairs with an INR leg
    InrPairs,
    /// Pairs whose both legs are G10 currencies
    G10,
    /// Pairs with an emerging-market leg
    Em,
}

impl PairGroup {
    /// All groups in display order.
    pub const ALL: [PairGroup; 3] = [PairGroup::InrPairs, PairGroup::G10, PairGroup::Em];

    /// Display label of the group.
    pub fn label(&self) -> &'static str {
        match self {
            PairGroup::InrPairs => "INR Pairs",
            PairGroup::G10 => "G10",
            PairGroup::Em => "EM",
        }
    }

    /// Returns true if the pair belongs to this group.
    pub fn contains(&self, pair: &CurrencyPair) -> bool {
        match self {
            PairGroup::InrPairs => pair.involves(Currency::INR),
            PairGroup::G10 => pair.base.is_g10() && pair.quote.is_g10(),
            PairGroup::Em => pair.base.is_emerging() || pair.quote.is_emerging(),
        }
    }
}

impl std::str::FromStr for PairGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inr" | "inr pairs" | "inr-pairs" => Ok(PairGroup::InrPairs),
            "g10" => Ok(PairGroup::G10),
            "em" => Ok(PairGroup::Em),
            other => Err(format!("unknown pair group '{}'", other)),
        }
    }
}

/// Filter criteria for the rate table.
#[derive(Debug, Clone, Default)]
pub struct PairFilter {
    /// Restrict to one market
    pub market: Option<Market>,
    /// Restrict to one group
    pub group: Option<PairGroup>,
    /// Case-insensitive search over name, legs and market
    pub search: String,
}

impl PairFilter {
    /// Set the market restriction.
    pub fn with_market(mut self, market: Market) -> Self {
        self.market = Some(market);
        self
    }

    /// Set the group restriction.
    pub fn with_group(mut self, group: PairGroup) -> Self {
        self.group = Some(group);
        self
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    fn accepts(&self, pair: &CurrencyPair) -> bool {
        self.market.map_or(true, |m| pair.market == m)
            && self.group.map_or(true, |g| g.contains(pair))
            && pair.matches_search(&self.search)
    }
}

/// Registry of tradable pairs.
#[derive(Debug, Clone, Default)]
pub struct PairCatalog {
    pairs: Vec<CurrencyPair>,
}

impl PairCatalog {
    /// Builds a catalog from explicit pair definitions.
    pub fn from_pairs(pairs: Vec<CurrencyPair>) -> Self {
        Self { pairs }
    }

    /// The standard desk catalog: 14 offshore and 10 onshore pairs.
    pub fn standard() -> &'static PairCatalog {
        static CATALOG: OnceLock<PairCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            use Currency::*;
            use Market::*;

            let pairs = vec![
                CurrencyPair::define("USDINR-OFF", USD, INR, "USDINR", Offshore),
                CurrencyPair::define("NDF-USDINR", USD, INR, "NDF USDINR", Offshore),
                CurrencyPair::define("USDJPY-OFF", USD, JPY, "USDJPY", Offshore),
                CurrencyPair::define("USDCNY-OFF", USD, CNY, "USDCNY", Offshore),
                CurrencyPair::define("CNYINR-OFF", CNY, INR, "CNYINR", Offshore),
                CurrencyPair::define("CHFINR-OFF", CHF, INR, "CHFINR", Offshore),
                CurrencyPair::define("GBPSEK-OFF", GBP, SEK, "GBPSEK", Offshore),
                CurrencyPair::define("NZDUSD-OFF", NZD, USD, "NZDUSD", Offshore),
                CurrencyPair::define("AUDUSD-OFF", AUD, USD, "AUDUSD", Offshore),
                CurrencyPair::define("EURINR-OFF", EUR, INR, "EURINR", Offshore),
                CurrencyPair::define("JPYINR-OFF", JPY, INR, "JPYINR", Offshore),
                CurrencyPair::define("GBPINR-OFF", GBP, INR, "GBPINR", Offshore),
                CurrencyPair::define("EURUSD-OFF", EUR, USD, "EURUSD", Offshore),
                CurrencyPair::define("EURGBP-OFF", EUR, GBP, "EURGBP", Offshore),
                CurrencyPair::define("USDINR-ON", USD, INR, "USDINR", Onshore),
                CurrencyPair::define("EURINR-ON", EUR, INR, "EURINR", Onshore),
                CurrencyPair::define("GBPINR-ON", GBP, INR, "GBPINR", Onshore),
                CurrencyPair::define("JPYINR-ON", JPY, INR, "JPYINR", Onshore),
                CurrencyPair::define("USDJPY-ON", USD, JPY, "USDJPY", Onshore),
                CurrencyPair::define("EURUSD-ON", EUR, USD, "EURUSD", Onshore),
                CurrencyPair::define("GBPUSD-ON", GBP, USD, "GBPUSD", Onshore),
                CurrencyPair::define("AUDUSD-ON", AUD, USD, "AUDUSD", Onshore),
                CurrencyPair::define("USDCNY-ON", USD, CNY, "USDCNY", Onshore),
                CurrencyPair::define("USDSGD-ON", USD, SGD, "USDSGD", Onshore),
            ];
            PairCatalog { pairs }
        })
    }

    /// Looks up a pair by id.
    pub fn get(&self, id: &str) -> Option<&CurrencyPair> {
        self.pairs.iter().find(|p| p.id.as_str() == id)
    }

    /// Returns true if the id is in the catalog.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Iterates pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CurrencyPair> {
        self.pairs.iter()
    }

    /// All pair ids in catalog order.
    pub fn ids(&self) -> Vec<PairId> {
        self.pairs.iter().map(|p| p.id.clone()).collect()
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs belonging to a group, in catalog order.
    pub fn group(&self, group: PairGroup) -> Vec<&CurrencyPair> {
        self.pairs.iter().filter(|p| group.contains(p)).collect()
    }

    /// Pairs accepted by a filter, in catalog order.
    pub fn filter(&self, filter: &PairFilter) -> Vec<&CurrencyPair> {
        self.pairs.iter().filter(|p| filter.accepts(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_size() {
        let catalog = PairCatalog::standard();
        assert_eq!(catalog.len(), 24);
        let offshore = catalog
            .filter(&PairFilter::default().with_market(Market::Offshore))
            .len();
        assert_eq!(offshore, 14);
    }

    #[test]
    fn test_ids_are_unique() {
        let ids = PairCatalog::standard().ids();
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), ids.len());
    }

    #[test]
    fn test_flag_follows_base() {
        let catalog = PairCatalog::standard();
        let pair = catalog.get("CNYINR-OFF").unwrap();
        assert_eq!(pair.flag(), Currency::CNY.flag());
    }

    #[test]
    fn test_group_membership() {
        let catalog = PairCatalog::standard();
        let g10: Vec<&str> = catalog
            .group(PairGroup::G10)
            .iter()
            .map(|p| p.id().as_str())
            .collect();
        assert!(g10.contains(&"GBPSEK-OFF"));
        assert!(g10.contains(&"EURGBP-OFF"));
        assert!(!g10.contains(&"USDINR-OFF"));

        let em = catalog.group(PairGroup::Em);
        assert!(em.iter().all(|p| p.base().is_emerging() || p.quote().is_emerging()));
        assert!(em.iter().any(|p| p.id().as_str() == "USDSGD-ON"));
    }

    #[test]
    fn test_search_matches_legs_and_market() {
        let catalog = PairCatalog::standard();
        let sek = catalog.filter(&PairFilter::default().with_search("sek"));
        assert_eq!(sek.len(), 1);

        let onshore_inr = catalog.filter(
            &PairFilter::default()
                .with_search("ONSHORE")
                .with_group(PairGroup::InrPairs),
        );
        assert_eq!(onshore_inr.len(), 4);
    }

    #[test]
    fn test_blank_search_accepts_all() {
        let catalog = PairCatalog::standard();
        assert_eq!(catalog.filter(&PairFilter::default().with_search("  ")).len(), 24);
    }

    #[test]
    fn test_pair_id_borrow_lookup() {
        use std::collections::BTreeMap;
        let mut map = BTreeMap::new();
        map.insert(PairId::from("EURUSD-OFF"), 1);
        assert_eq!(map.get("EURUSD-OFF"), Some(&1));
    }

    #[test]
    fn test_group_parse() {
        assert_eq!("g10".parse::<PairGroup>().unwrap(), PairGroup::G10);
        assert!("majors".parse::<PairGroup>().is_err());
    }
}
