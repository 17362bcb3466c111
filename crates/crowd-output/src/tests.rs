//! Integration tests for crowd-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, tick: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            agent_id,
            tick,
            x: agent_id as f32,
            z: -(agent_id as f32),
            speed: 1.5,
            yaw: 0.0,
            waypoint_index: 2,
            path_progress: 0.5,
            reached_end: false,
            blocked: false,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            tick,
            elapsed_secs: tick as f32 * 0.5,
            agent_count: 3,
            blocked_count: 1,
            mean_speed: 2.25,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            [
                "agent_id",
                "tick",
                "x",
                "z",
                "speed",
                "yaw",
                "waypoint_index",
                "path_progress",
                "reached_end",
                "blocked"
            ]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            ["tick", "elapsed_secs", "agent_count", "blocked_count", "mean_speed"]
        );
    }

    #[test]
    fn csv_snapshot_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)];
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "0"); // agent_id
        assert_eq!(&read_rows[0][1], "5"); // tick
        assert_eq!(&read_rows[1][0], "1");
        assert_eq!(&read_rows[2][0], "2");
    }

    #[test]
    fn csv_tick_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(4)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "4"); // tick
        assert_eq!(&read_rows[0][1], "2"); // elapsed_secs
        assert_eq!(&read_rows[0][3], "1"); // blocked_count
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }

    #[test]
    fn integration_csv() {
        use crowd_core::{CrowdConfig, Vec3};
        use crowd_path::{PathAsset, PathSeed};
        use crowd_sim::{CrowdSimBuilder, SpawnRequest};

        use crate::observer::CrowdOutputObserver;

        let config = CrowdConfig {
            snapshot_interval_ticks: 2,
            seed: 1,
            ..CrowdConfig::default()
        };
        let path = PathAsset::new(vec![Vec3::ZERO, Vec3::new(20.0, 0.0, 0.0)]);
        let mut sim = CrowdSimBuilder::new(config)
            .spawn_all((0..3).map(|i| {
                SpawnRequest::at(Vec3::new(0.0, 0.0, i as f32 * 3.0))
                    .with_path(PathSeed::following(path.clone()))
            }))
            .build()
            .unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = CrowdOutputObserver::new(writer);
        sim.run_ticks(6, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        // Snapshots captured at ticks 0, 2, 4 → 3 agents × 3 captures.
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count(), 9);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let summaries: Vec<_> = rdr2.records().map(|r| r.unwrap()).collect();
        assert_eq!(summaries.len(), 3);
        assert_eq!(&summaries[0][2], "3"); // agent_count
    }
}
