use crate::models::{Bar, ChartSpec, HealthCount, Layout, Series, ShareRow};

/// Tree counts per borough, one grouped series per health category.
pub fn health_chart(counts: &[HealthCount]) -> ChartSpec {
    let mut series = Vec::new();
    for row in counts {
        push_bar(&mut series, &row.health, &row.borough, row.count as f64);
    }
    ChartSpec {
        x_label: "Borough".to_string(),
        y_label: "Number of Trees".to_string(),
        bar_mode: "group",
        series,
        layout: None,
    }
}

/// Health shares per steward group, fixed 900x500 layout.
pub fn steward_chart(shares: &[ShareRow]) -> ChartSpec {
    let mut series = Vec::new();
    for row in shares {
        push_bar(&mut series, &row.health, row.group.label(), row.share);
    }
    ChartSpec {
        x_label: "Whether steward intervened or nature".to_string(),
        y_label: "Proportion of trees (%)".to_string(),
        bar_mode: "group",
        series,
        layout: Some(Layout {
            width: 900,
            height: 500,
        }),
    }
}

fn push_bar(series: &mut Vec<Series>, name: &str, category: &str, value: f64) {
    let bar = Bar {
        category: category.to_string(),
        value,
    };
    match series.iter_mut().find(|entry| entry.name == name) {
        Some(entry) => entry.bars.push(bar),
        None => series.push(Series {
            name: name.to_string(),
            bars: vec![bar],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StewardGroup;

    fn count(borough: &str, health: &str, count: u64) -> HealthCount {
        HealthCount {
            borough: borough.to_string(),
            health: health.to_string(),
            count,
        }
    }

    #[test]
    fn health_chart_groups_bars_by_health_category() {
        let table = vec![
            count("Bronx", "Good", 12),
            count("Bronx", "Fair", 3),
            count("Brooklyn", "Good", 8),
        ];
        let spec = health_chart(&table);

        assert_eq!(spec.bar_mode, "group");
        assert_eq!(spec.x_label, "Borough");
        assert_eq!(spec.y_label, "Number of Trees");
        assert!(spec.layout.is_none());
        assert_eq!(spec.series.len(), 2);

        let good = &spec.series[0];
        assert_eq!(good.name, "Good");
        assert_eq!(good.bars.len(), 2);
        assert_eq!(good.bars[0].category, "Bronx");
        assert_eq!(good.bars[0].value, 12.0);
        assert_eq!(good.bars[1].category, "Brooklyn");

        let fair = &spec.series[1];
        assert_eq!(fair.name, "Fair");
        assert_eq!(fair.bars.len(), 1);
    }

    #[test]
    fn steward_chart_carries_fixed_layout_and_labels() {
        let shares = vec![ShareRow {
            group: StewardGroup::Natural,
            health: "Good".to_string(),
            num_trees: 5,
            total: 10,
            share: 50.0,
        }];
        let spec = steward_chart(&shares);

        assert_eq!(spec.x_label, "Whether steward intervened or nature");
        assert_eq!(spec.y_label, "Proportion of trees (%)");
        let layout = spec.layout.expect("steward chart has a fixed layout");
        assert_eq!((layout.width, layout.height), (900, 500));
        assert_eq!(spec.series[0].bars[0].category, "natural");
        assert_eq!(spec.series[0].bars[0].value, 50.0);
    }

    #[test]
    fn empty_table_yields_empty_series() {
        assert!(health_chart(&[]).series.is_empty());
        assert!(steward_chart(&[]).series.is_empty());
    }
}
