#[cfg(test)]
mod tests {
    use crate::domain::document::{Document, DocumentName, MarkdownBody};
    use crate::domain::foundation::{DocDate, DocumentStatus};
    use crate::domain::lifecycle::{CapacityMonitor, CapacityWarning, LifecyclePolicy};

    const TODAY: &str = "2024-01-15";

    fn date(s: &str) -> DocDate {
        DocDate::parse(s).unwrap()
    }

    fn doc(stem: &str, status: DocumentStatus, last_modified: &str) -> Document {
        let name: DocumentName = stem.parse().unwrap();
        let created = name.date();
        Document::new(
            name,
            status,
            "kim",
            "Keep the snapshot honest",
            created,
            date(last_modified),
            MarkdownBody::default(),
        )
        .unwrap()
    }

    fn inbox_docs(count: usize) -> Vec<Document> {
        (0..count)
            .map(|i| {
                doc(
                    &format!("P2-2024-01-10-note-{}", i),
                    DocumentStatus::Inbox,
                    "2024-01-10",
                )
            })
            .collect()
    }

    fn active_doc(i: usize, last_modified: &str) -> Document {
        doc(
            &format!("P1-2024-01-05-task-{}", i),
            DocumentStatus::InProgress,
            last_modified,
        )
    }

    fn monitor() -> CapacityMonitor {
        CapacityMonitor::new(LifecyclePolicy::default())
    }

    #[test]
    fn test_quiet_snapshot_yields_no_warnings() {
        let mut snapshot = inbox_docs(3);
        snapshot.push(active_doc(0, "2024-01-14"));
        snapshot.push(active_doc(1, "2024-01-12"));

        let warnings = monitor().check_capacity(&snapshot, date(TODAY));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_empty_snapshot_yields_no_warnings() {
        let warnings = monitor().check_capacity(&[], date(TODAY));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_inbox_over_threshold_triggers_triage() {
        let snapshot = inbox_docs(6);
        let warnings = monitor().check_capacity(&snapshot, date(TODAY));
        assert_eq!(
            warnings,
            vec![CapacityWarning::InboxTriageNeeded { count: 6 }]
        );
    }

    #[test]
    fn test_inbox_at_threshold_stays_quiet() {
        let snapshot = inbox_docs(5);
        let warnings = monitor().check_capacity(&snapshot, date(TODAY));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_active_above_cap_triggers_warning() {
        let snapshot: Vec<Document> = (0..4).map(|i| active_doc(i, "2024-01-14")).collect();
        let warnings = monitor().check_capacity(&snapshot, date(TODAY));
        assert_eq!(warnings, vec![CapacityWarning::TooManyActive { count: 4 }]);
    }

    #[test]
    fn test_active_at_cap_stays_quiet() {
        let snapshot: Vec<Document> = (0..3).map(|i| active_doc(i, "2024-01-14")).collect();
        let warnings = monitor().check_capacity(&snapshot, date(TODAY));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_stale_after_eight_idle_days() {
        let snapshot = vec![active_doc(0, "2024-01-07")];
        let warnings = monitor().check_capacity(&snapshot, date(TODAY));
        assert_eq!(
            warnings,
            vec![CapacityWarning::Stale {
                name: "P1-2024-01-05-task-0".parse().unwrap(),
                days_idle: 8,
            }]
        );
    }

    #[test]
    fn test_not_stale_at_six_idle_days() {
        let snapshot = vec![active_doc(0, "2024-01-09")];
        let warnings = monitor().check_capacity(&snapshot, date(TODAY));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_not_stale_at_exactly_seven_idle_days() {
        // the rule is strictly greater than the threshold
        let snapshot = vec![active_doc(0, "2024-01-08")];
        let warnings = monitor().check_capacity(&snapshot, date(TODAY));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_terminal_documents_never_go_stale() {
        let completed = doc(
            "DONE-2024-01-06-old-report",
            DocumentStatus::Completed,
            "2024-01-06",
        );
        let shelved = doc("P3-2024-01-02-parked", DocumentStatus::Misc, "2024-01-02");

        let warnings = monitor().check_capacity(&[completed, shelved], date(TODAY));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_all_rules_fire_in_fixed_order() {
        let mut snapshot = inbox_docs(6);
        snapshot.push(active_doc(0, "2024-01-14"));
        snapshot.push(active_doc(1, "2024-01-14"));
        snapshot.push(active_doc(2, "2024-01-06"));
        snapshot.push(active_doc(3, "2024-01-07"));

        let warnings = monitor().check_capacity(&snapshot, date(TODAY));
        assert_eq!(
            warnings,
            vec![
                CapacityWarning::InboxTriageNeeded { count: 6 },
                CapacityWarning::TooManyActive { count: 4 },
                CapacityWarning::Stale {
                    name: "P1-2024-01-05-task-2".parse().unwrap(),
                    days_idle: 9,
                },
                CapacityWarning::Stale {
                    name: "P1-2024-01-05-task-3".parse().unwrap(),
                    days_idle: 8,
                },
            ]
        );
    }

    #[test]
    fn test_custom_policy_thresholds_respected() {
        let tight = CapacityMonitor::new(LifecyclePolicy::new(1, 1, 1));
        let snapshot = vec![
            active_doc(0, "2024-01-12"),
            active_doc(1, "2024-01-14"),
            doc("P2-2024-01-10-note-0", DocumentStatus::Inbox, "2024-01-10"),
            doc("P2-2024-01-10-note-1", DocumentStatus::Inbox, "2024-01-10"),
        ];

        let warnings = tight.check_capacity(&snapshot, date(TODAY));
        assert_eq!(
            warnings,
            vec![
                CapacityWarning::InboxTriageNeeded { count: 2 },
                CapacityWarning::TooManyActive { count: 2 },
                CapacityWarning::Stale {
                    name: "P1-2024-01-05-task-0".parse().unwrap(),
                    days_idle: 3,
                },
            ]
        );
    }
}
