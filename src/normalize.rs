use crate::errors::DataError;
use crate::models::{HealthCount, HealthRow, ShareRow, SpeciesRow, StewardGroup, StewardRow};
use std::collections::HashMap;

/// A tree with no recorded steward activity counts as natural regrowth.
pub fn steward_group(steward: Option<&str>) -> StewardGroup {
    match steward {
        None | Some("None") => StewardGroup::Natural,
        Some(_) => StewardGroup::Steward,
    }
}

pub fn species_names(rows: &[SpeciesRow]) -> Vec<String> {
    rows.iter()
        .filter(|row| row.count_tree_id.is_some())
        .filter_map(|row| row.spc_common.clone())
        .collect()
}

/// Count one borough's raw rows per health category, tagged with the borough.
/// Categories the borough has no trees in are simply absent, never zero-filled.
pub fn tally_health(borough: &str, rows: &[HealthRow]) -> Vec<HealthCount> {
    let mut counts: Vec<HealthCount> = Vec::new();
    for row in rows {
        let Some(health) = row.health.as_deref() else {
            continue;
        };
        match counts.iter_mut().find(|entry| entry.health == health) {
            Some(entry) => entry.count += 1,
            None => counts.push(HealthCount {
                borough: borough.to_string(),
                health: health.to_string(),
                count: 1,
            }),
        }
    }
    counts
}

pub fn health_by_borough(tallies: Vec<Vec<HealthCount>>) -> Vec<HealthCount> {
    tallies.into_iter().flatten().collect()
}

/// Sum grouped counts by (steward group, health), then express each sum as a
/// percentage of its group's total. Empty input yields an empty table.
pub fn steward_shares(rows: &[StewardRow]) -> Result<Vec<ShareRow>, DataError> {
    let mut summed: Vec<(StewardGroup, String, u64)> = Vec::new();
    for row in rows {
        let (Some(steward), Some(health)) = (row.steward.as_deref(), row.health.as_deref()) else {
            continue;
        };
        let count = parse_count(row.count_tree_id.as_deref())?;
        let group = steward_group(Some(steward));
        match summed
            .iter_mut()
            .find(|(existing, tallied, _)| *existing == group && tallied == health)
        {
            Some((_, _, sum)) => *sum += count,
            None => summed.push((group, health.to_string(), count)),
        }
    }

    let mut totals: HashMap<StewardGroup, u64> = HashMap::new();
    for (group, _, sum) in &summed {
        *totals.entry(*group).or_default() += sum;
    }

    Ok(summed
        .into_iter()
        .map(|(group, health, num_trees)| {
            let total = totals[&group];
            ShareRow {
                group,
                health,
                num_trees,
                total,
                share: num_trees as f64 / total as f64 * 100.0,
            }
        })
        .collect())
}

fn parse_count(value: Option<&str>) -> Result<u64, DataError> {
    value
        .ok_or_else(|| DataError::schema("count_tree_id"))?
        .parse()
        .map_err(|_| DataError::schema("count_tree_id"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steward_row(steward: Option<&str>, health: Option<&str>, count: Option<&str>) -> StewardRow {
        StewardRow {
            steward: steward.map(str::to_string),
            health: health.map(str::to_string),
            count_tree_id: count.map(str::to_string),
        }
    }

    fn health_row(health: Option<&str>) -> HealthRow {
        HealthRow {
            spc_common: Some("American beech".to_string()),
            health: health.map(str::to_string),
        }
    }

    #[test]
    fn steward_group_classifies_none_as_natural() {
        assert_eq!(steward_group(None), StewardGroup::Natural);
        assert_eq!(steward_group(Some("None")), StewardGroup::Natural);
        assert_eq!(steward_group(Some("1or2")), StewardGroup::Steward);
        assert_eq!(steward_group(Some("3or4")), StewardGroup::Steward);
    }

    #[test]
    fn species_names_drop_incomplete_rows() {
        let rows = vec![
            SpeciesRow {
                spc_common: Some("American beech".to_string()),
                count_tree_id: Some("584".to_string()),
            },
            SpeciesRow {
                spc_common: None,
                count_tree_id: Some("31619".to_string()),
            },
            SpeciesRow {
                spc_common: Some("red maple".to_string()),
                count_tree_id: Some("17246".to_string()),
            },
        ];
        assert_eq!(species_names(&rows), vec!["American beech", "red maple"]);
    }

    #[test]
    fn tally_health_counts_per_category_and_tags_borough() {
        let rows = vec![
            health_row(Some("Good")),
            health_row(Some("Good")),
            health_row(Some("Fair")),
            health_row(None),
            health_row(Some("Good")),
        ];
        let counts = tally_health("Bronx", &rows);
        assert_eq!(
            counts,
            vec![
                HealthCount {
                    borough: "Bronx".to_string(),
                    health: "Good".to_string(),
                    count: 3,
                },
                HealthCount {
                    borough: "Bronx".to_string(),
                    health: "Fair".to_string(),
                    count: 1,
                },
            ]
        );
    }

    #[test]
    fn health_by_borough_concatenates_sparse_tallies() {
        let bronx = tally_health("Bronx", &[health_row(Some("Good"))]);
        let queens = tally_health("Queens", &[]);
        let table = health_by_borough(vec![bronx, queens]);
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].borough, "Bronx");
    }

    #[test]
    fn steward_shares_match_known_scenario() {
        let rows = vec![
            steward_row(Some("1or2"), Some("Good"), Some("10")),
            steward_row(Some("None"), Some("Good"), Some("5")),
            steward_row(Some("None"), Some("Poor"), Some("5")),
        ];
        let shares = steward_shares(&rows).unwrap();
        assert_eq!(shares.len(), 3);

        let find = |group: StewardGroup, health: &str| {
            shares
                .iter()
                .find(|row| row.group == group && row.health == health)
                .expect("missing share row")
        };

        assert_eq!(find(StewardGroup::Steward, "Good").share, 100.0);
        assert_eq!(find(StewardGroup::Natural, "Good").share, 50.0);
        assert_eq!(find(StewardGroup::Natural, "Poor").share, 50.0);
        assert_eq!(find(StewardGroup::Natural, "Good").total, 10);
    }

    #[test]
    fn steward_shares_sum_to_100_per_group() {
        let rows = vec![
            steward_row(Some("1or2"), Some("Good"), Some("7")),
            steward_row(Some("3or4"), Some("Good"), Some("4")),
            steward_row(Some("1or2"), Some("Fair"), Some("3")),
            steward_row(Some("None"), Some("Good"), Some("9")),
            steward_row(Some("None"), Some("Fair"), Some("2")),
            steward_row(Some("None"), Some("Poor"), Some("1")),
        ];
        let shares = steward_shares(&rows).unwrap();

        for group in [StewardGroup::Natural, StewardGroup::Steward] {
            let sum: f64 = shares
                .iter()
                .filter(|row| row.group == group)
                .map(|row| row.share)
                .sum();
            assert!((sum - 100.0).abs() < 1e-6, "{group:?} shares sum to {sum}");
        }
    }

    #[test]
    fn steward_shares_merge_rows_mapping_to_one_group() {
        let rows = vec![
            steward_row(Some("1or2"), Some("Good"), Some("7")),
            steward_row(Some("3or4"), Some("Good"), Some("4")),
        ];
        let shares = steward_shares(&rows).unwrap();
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].num_trees, 11);
        assert_eq!(shares[0].share, 100.0);
    }

    #[test]
    fn steward_shares_drop_rows_with_null_fields() {
        let rows = vec![
            steward_row(None, Some("Good"), Some("3")),
            steward_row(Some("None"), None, Some("4")),
            steward_row(Some("None"), Some("Good"), Some("5")),
        ];
        let shares = steward_shares(&rows).unwrap();
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].num_trees, 5);
    }

    #[test]
    fn empty_steward_response_yields_empty_table() {
        assert!(steward_shares(&[]).unwrap().is_empty());
    }

    #[test]
    fn missing_count_column_is_a_schema_error() {
        let rows = vec![steward_row(Some("None"), Some("Good"), None)];
        let err = steward_shares(&rows).unwrap_err();
        assert!(matches!(err, DataError::Schema { field } if field == "count_tree_id"));
    }
}
