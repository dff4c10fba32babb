// Test code is allowed to panic on failure
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic,
    clippy::string_slice
)]

//! Unit tests for custom-resource-status.
//!
//! These exercise the public API the way a controller would: read a status
//! list, update it, and check the list that would be written back.

mod condition_tests {
    use custom_resource_status::conditions::{
        self, Condition, ConditionStatus, ConditionType, find_status_condition,
        remove_status_condition, set_status_condition,
    };

    #[test]
    fn test_add_when_empty() {
        let mut conditions = Vec::new();
        set_status_condition(
            &mut conditions,
            Condition::new(ConditionType::Available, true, "Testing", "Basic message"),
        );

        assert_eq!(
            conditions,
            vec![Condition::new(
                ConditionType::Available,
                ConditionStatus::True,
                "Testing",
                "Basic message"
            )]
        );
    }

    #[test]
    fn test_add_appends_after_existing() {
        let mut conditions = vec![Condition::new(
            ConditionType::Degraded,
            false,
            "TestingDegradedFalse",
            "Degraded condition false",
        )];
        set_status_condition(
            &mut conditions,
            Condition::new(
                ConditionType::Available,
                true,
                "TestingAvailableTrue",
                "Available condition true",
            ),
        );

        assert_eq!(conditions.len(), 2);
        assert_eq!(conditions[0].r#type, ConditionType::Degraded);
        assert_eq!(conditions[1].r#type, ConditionType::Available);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut conditions = vec![
            Condition::new(ConditionType::Degraded, false, "Fine", ""),
            Condition::new(ConditionType::Available, true, "Ready", ""),
        ];
        set_status_condition(
            &mut conditions,
            Condition::new(ConditionType::Degraded, true, "PodFailed", "Crash loop"),
        );

        assert_eq!(conditions.len(), 2);
        assert_eq!(conditions[0].reason, "PodFailed");
        assert!(find_status_condition(&conditions, &ConditionType::Available).is_some());
    }

    #[test]
    fn test_optional_status_list() {
        let mut status_conditions: Option<Vec<Condition>> = None;

        // Reading or removing from an absent list sees an empty list.
        assert!(
            find_status_condition(
                status_conditions.as_deref().unwrap_or_default(),
                &ConditionType::Available
            )
            .is_none()
        );
        if let Some(list) = status_conditions.as_mut() {
            remove_status_condition(list, &ConditionType::Available);
        }
        assert!(status_conditions.is_none());

        set_status_condition(
            status_conditions.get_or_insert_with(Vec::new),
            Condition::new(ConditionType::Progressing, true, "Rollout", ""),
        );
        assert!(conditions::is_status_condition_true(
            status_conditions.as_deref().unwrap_or_default(),
            &ConditionType::Progressing
        ));
    }
}

mod v1_condition_tests {
    use custom_resource_status::conditions::ConditionStatus;
    use custom_resource_status::conditions::v1::{
        Condition, ConditionType, find_status_condition, set_status_condition,
        set_status_condition_v2,
    };
    use jiff::{SignedDuration, Timestamp};
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;

    fn observed_earlier(mut condition: Condition) -> Condition {
        let earlier = Time(Timestamp::now() - SignedDuration::from_secs(300));
        condition.last_heartbeat_time = Some(earlier.clone());
        condition.last_transition_time = Some(earlier);
        condition
    }

    #[test]
    fn test_heartbeat_advances_on_status_change() {
        let mut conditions = vec![observed_earlier(Condition::available(
            true,
            "Ready",
            "All replicas available",
        ))];

        set_status_condition_v2(
            &mut conditions,
            Condition::available(false, "ReplicasUnavailable", "0/3 replicas available"),
            false,
        );

        let condition = find_status_condition(&conditions, &ConditionType::Available).unwrap();
        assert_eq!(condition.status, ConditionStatus::False);
        let heartbeat = condition.last_heartbeat_time.as_ref().unwrap();
        assert!(heartbeat.0 <= Timestamp::now());
        assert!(heartbeat.0 > Timestamp::now() - SignedDuration::from_secs(60));
    }

    #[test]
    fn test_heartbeat_holds_on_unchanged_status() {
        let start = observed_earlier(Condition::available(true, "Ready", ""));
        let heartbeat = start.last_heartbeat_time.clone();
        let mut conditions = vec![start];

        for attempt in 0..3 {
            set_status_condition_v2(
                &mut conditions,
                Condition::available(true, "Ready", &format!("check {attempt}")),
                false,
            );
        }

        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].message, "check 2");
        assert_eq!(conditions[0].last_heartbeat_time, heartbeat);
    }

    #[test]
    fn test_every_set_is_an_observation() {
        let start = observed_earlier(Condition::available(true, "Ready", ""));
        let heartbeat = start.last_heartbeat_time.clone();
        let transition = start.last_transition_time.clone();
        let mut conditions = vec![start];

        set_status_condition(&mut conditions, Condition::available(true, "Ready", ""));

        assert_ne!(conditions[0].last_heartbeat_time, heartbeat);
        assert_eq!(conditions[0].last_transition_time, transition);
    }
}

mod object_reference_tests {
    use custom_resource_status::object_references::{
        find_object_reference, remove_object_reference, set_object_reference,
    };
    use k8s_openapi::api::core::v1::ObjectReference;

    fn reference(kind: &str, name: &str, uid: Option<&str>) -> ObjectReference {
        ObjectReference {
            kind: Some(kind.to_string()),
            namespace: Some("test-namespace".to_string()),
            name: Some(name.to_string()),
            api_version: Some("test.example.io".to_string()),
            uid: uid.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_uid_reference_coexists() {
        let mut objects = vec![
            reference("FooKind", "foo", None),
            reference("BarKind", "bar", None),
        ];
        set_object_reference(&mut objects, reference("FooKind", "foo", Some("fooid")));

        assert_eq!(
            objects,
            vec![
                reference("FooKind", "foo", None),
                reference("BarKind", "bar", None),
                reference("FooKind", "foo", Some("fooid")),
            ]
        );
    }

    #[test]
    fn test_remove_uid_reference_only() {
        let mut objects = vec![
            reference("FooKind", "foo", None),
            reference("FooKind", "foo", Some("fooid")),
        ];
        remove_object_reference(&mut objects, &reference("FooKind", "foo", Some("fooid")));

        assert_eq!(objects, vec![reference("FooKind", "foo", None)]);
        assert!(find_object_reference(&objects, &reference("FooKind", "foo", None)).is_some());
    }

    #[test]
    fn test_optional_reference_list() {
        let mut related: Option<Vec<ObjectReference>> = None;

        if let Some(list) = related.as_mut() {
            remove_object_reference(list, &reference("FooKind", "foo", None));
        }
        assert!(related.is_none());

        set_object_reference(
            related.get_or_insert_with(Vec::new),
            reference("FooKind", "foo", None),
        );
        assert_eq!(related.map(|list| list.len()), Some(1));
    }
}
