use super::model::{HighDimRecord, PValue, Schedule, ScheduleRecord};

// ---------------------------------------------------------------------------
// Schedule partitioning
// ---------------------------------------------------------------------------

/// Static and dynamic runs, each in file order.
#[derive(Debug, Clone, Default)]
pub struct ScheduleSeries {
    pub static_runs: Vec<ScheduleRecord>,
    pub dynamic_runs: Vec<ScheduleRecord>,
}

impl ScheduleSeries {
    /// Bar pairs matched by position: the i-th static run with the i-th
    /// dynamic run. Chunk sizes are not compared, so both kinds must already
    /// be listed in the same chunk order. Unpaired trailing runs are dropped.
    pub fn pairs(&self) -> impl Iterator<Item = (&ScheduleRecord, &ScheduleRecord)> {
        self.static_runs.iter().zip(self.dynamic_runs.iter())
    }

    /// Whether both kinds have the same number of runs.
    pub fn is_balanced(&self) -> bool {
        self.static_runs.len() == self.dynamic_runs.len()
    }
}

/// Split schedule rows by kind. Rows of any other kind are ignored.
pub fn split_schedules(rows: &[ScheduleRecord]) -> ScheduleSeries {
    let mut series = ScheduleSeries::default();
    for row in rows {
        match row.schedule {
            Schedule::Static => series.static_runs.push(row.clone()),
            Schedule::Dynamic => series.dynamic_runs.push(row.clone()),
            Schedule::Other => {
                log::debug!("ignoring {} schedule row", row.schedule);
            }
        }
    }
    series
}

// ---------------------------------------------------------------------------
// High-dimensional grouping
// ---------------------------------------------------------------------------

/// Rows sharing one `p` value.
#[derive(Debug, Clone)]
pub struct PGroup {
    pub p: PValue,
    pub rows: Vec<HighDimRecord>,
}

/// Group rows by their `p` value. Groups are ordered by the first
/// appearance of each `p` in the file; rows keep file order.
pub fn group_by_p(rows: &[HighDimRecord]) -> Vec<PGroup> {
    let mut groups: Vec<PGroup> = Vec::new();
    for row in rows {
        let p = PValue(row.p);
        match groups.iter_mut().find(|g| g.p == p) {
            Some(group) => group.rows.push(row.clone()),
            None => groups.push(PGroup {
                p,
                rows: vec![row.clone()],
            }),
        }
    }
    groups
}

/// Legend labels, one per group.
///
/// When any `p` in the file has a fractional part the column is treated as
/// floating point and whole values keep a trailing `.0` (`2.0`); otherwise
/// they print as integers (`2`).
pub fn p_labels(groups: &[PGroup]) -> Vec<String> {
    let float_column = groups.iter().any(|g| !g.p.is_whole());
    groups.iter().map(|g| g.p.label(float_column)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sched(schedule: Schedule, chunk_size: u32, runtime: f64) -> ScheduleRecord {
        ScheduleRecord {
            schedule,
            chunk_size,
            runtime,
        }
    }

    fn hd(n: u32, p: f64) -> HighDimRecord {
        HighDimRecord {
            n,
            p,
            exact_volume: 1.0,
            acceptance_ratio: 0.5,
        }
    }

    #[test]
    fn schedules_pair_by_position() {
        let rows = vec![
            sched(Schedule::Static, 0, 1.0),
            sched(Schedule::Dynamic, 0, 1.1),
            sched(Schedule::Static, 100, 0.9),
            sched(Schedule::Dynamic, 100, 0.8),
        ];
        let series = split_schedules(&rows);
        assert!(series.is_balanced());

        let labels: Vec<String> = series.pairs().map(|(s, _)| s.chunk_label()).collect();
        assert_eq!(labels, vec!["Default", "100"]);

        let runtimes: Vec<(f64, f64)> = series
            .pairs()
            .map(|(s, d)| (s.runtime, d.runtime))
            .collect();
        assert_eq!(runtimes, vec![(1.0, 1.1), (0.9, 0.8)]);
    }

    #[test]
    fn unbalanced_schedules_truncate_to_common_prefix() {
        let rows = vec![
            sched(Schedule::Static, 0, 1.0),
            sched(Schedule::Static, 10, 1.0),
            sched(Schedule::Dynamic, 0, 1.0),
            sched(Schedule::Other, 0, 1.0),
        ];
        let series = split_schedules(&rows);
        assert!(!series.is_balanced());
        assert_eq!(series.pairs().count(), 1);
    }

    #[test]
    fn groups_follow_first_appearance_and_keep_row_order() {
        let rows = vec![hd(2, 4.0), hd(2, 1.0), hd(3, 4.0), hd(3, 1.0), hd(5, 0.5)];
        let groups = group_by_p(&rows);
        let keys: Vec<f64> = groups.iter().map(|g| g.p.0).collect();
        assert_eq!(keys, vec![4.0, 1.0, 0.5]);

        let dims: Vec<u32> = groups[0].rows.iter().map(|r| r.n).collect();
        assert_eq!(dims, vec![2, 3]);
    }

    #[test]
    fn labels_follow_column_type() {
        let whole = group_by_p(&[hd(2, 1.0), hd(2, 2.0)]);
        assert_eq!(p_labels(&whole), vec!["1", "2"]);

        let mixed = group_by_p(&[hd(2, 2.0), hd(2, 0.5)]);
        assert_eq!(p_labels(&mixed), vec!["2.0", "0.5"]);
    }
}
