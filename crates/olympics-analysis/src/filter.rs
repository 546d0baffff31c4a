//! Composable record predicates.
//!
//! Each dimension is an independent optional constraint; "Overall" leaves a
//! dimension unconstrained. Queries build one [`RecordFilter`] instead of
//! branching over every combination of selections.

use olympics_model::{AthleteRecord, Selection};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter<'a> {
    year: Selection<i32>,
    region: Selection<&'a str>,
    sport: Selection<&'a str>,
    medalists_only: bool,
}

impl<'a> RecordFilter<'a> {
    /// A filter that accepts every record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn year(mut self, year: Selection<i32>) -> Self {
        self.year = year;
        self
    }

    /// Restrict to one region. Records without a region never match a
    /// concrete region.
    pub fn region(mut self, region: Selection<&'a str>) -> Self {
        self.region = region;
        self
    }

    pub fn sport(mut self, sport: Selection<&'a str>) -> Self {
        self.sport = sport;
        self
    }

    /// Only records that carry a medal.
    pub fn medalists_only(mut self) -> Self {
        self.medalists_only = true;
        self
    }

    pub fn matches(&self, record: &AthleteRecord) -> bool {
        if self.medalists_only && !record.has_medal() {
            return false;
        }
        if let Selection::Only(year) = self.year
            && record.year != year
        {
            return false;
        }
        if let Selection::Only(region) = self.region
            && record.region() != Some(region)
        {
            return false;
        }
        if let Selection::Only(sport) = self.sport
            && record.sport != sport
        {
            return false;
        }
        true
    }

    /// Records of `records` accepted by this filter, in input order.
    pub fn select<'r, I>(&self, records: I) -> Vec<&'r AthleteRecord>
    where
        I: IntoIterator<Item = &'r AthleteRecord>,
    {
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use olympics_model::{Medal, MedalCounts, Season, Sex};

    use super::*;

    fn record(region: Option<&str>, year: i32, sport: &str, medal: Option<Medal>) -> AthleteRecord {
        AthleteRecord {
            id: None,
            name: "Someone".to_string(),
            sex: Sex::Female,
            age: None,
            height: None,
            weight: None,
            team: "Team".to_string(),
            noc: "XXX".to_string(),
            region: region.map(str::to_string),
            games: format!("{year} Summer"),
            year,
            season: Season::Summer,
            city: "City".to_string(),
            sport: sport.to_string(),
            event: format!("{sport} event"),
            medal,
            medals: MedalCounts::indicator(medal),
        }
    }

    #[test]
    fn empty_filter_accepts_everything() {
        let filter = RecordFilter::new();
        assert!(filter.matches(&record(None, 1900, "Golf", None)));
        assert!(filter.matches(&record(Some("USA"), 2016, "Judo", Some(Medal::Gold))));
    }

    #[test]
    fn constraints_compose() {
        let filter = RecordFilter::new()
            .year(Selection::Only(2000))
            .region(Selection::Only("France"))
            .medalists_only();

        assert!(filter.matches(&record(Some("France"), 2000, "Judo", Some(Medal::Bronze))));
        assert!(!filter.matches(&record(Some("France"), 2000, "Judo", None)));
        assert!(!filter.matches(&record(Some("France"), 2004, "Judo", Some(Medal::Gold))));
        assert!(!filter.matches(&record(Some("Italy"), 2000, "Judo", Some(Medal::Gold))));
    }

    #[test]
    fn concrete_region_rejects_unmapped_records() {
        let filter = RecordFilter::new().region(Selection::Only("France"));
        assert!(!filter.matches(&record(None, 2000, "Judo", None)));
    }

    #[test]
    fn sport_constraint() {
        let filter = RecordFilter::new().sport(Selection::Only("Judo"));
        let records = [record(None, 2000, "Judo", None), record(None, 2000, "Golf", None)];
        let selected = filter.select(&records);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].sport, "Judo");
    }
}
