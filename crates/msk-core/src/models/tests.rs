#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;

    use crate::models::{
        CreateSuggestion, DashboardStats, Employee, EmployeeLookup, Priority, RiskLevel,
        SortDirection, SortField, Source, StatusUpdateResult, Suggestion, SuggestionFilters,
        SuggestionImport, SuggestionStatus, SuggestionType, SuggestionWithEmployee,
        UpdateSuggestion,
    };

    const DAY_MS: i64 = 86_400_000;

    fn ts(ms: i64) -> Timestamp {
        Timestamp::from_millisecond(ms).unwrap()
    }

    fn create_test_suggestion(status: SuggestionStatus) -> Suggestion {
        Suggestion {
            id: "sug-1".to_string(),
            employee_id: "emp-1".to_string(),
            suggestion_type: SuggestionType::Equipment,
            description: "Provide a height-adjustable desk".to_string(),
            status,
            priority: Priority::High,
            source: Source::Vida,
            created_by: "vida-system@company.com".to_string(),
            date_created: Timestamp::from_second(1_704_067_200).unwrap(), // 2024-01-01 00:00:00 UTC
            date_updated: Timestamp::from_second(1_704_153_600).unwrap(), // 2024-01-02 00:00:00 UTC
            date_completed: (status == SuggestionStatus::Completed)
                .then(|| Timestamp::from_second(1_704_153_600).unwrap()),
            notes: None,
            estimated_cost: Some("£450.00".to_string()),
        }
    }

    fn create_test_employee() -> Employee {
        Employee {
            id: "emp-1".to_string(),
            name: "Sarah Johnson".to_string(),
            department: "Finance".to_string(),
            job_title: "Senior Accountant".to_string(),
            workstation: "Desk 4B".to_string(),
            risk_level: RiskLevel::High,
            last_assessment: Timestamp::from_second(1_701_388_800).unwrap(),
        }
    }

    #[test]
    fn test_enum_wire_strings() {
        assert_eq!(SuggestionStatus::InProgress.as_str(), "in_progress");
        assert_eq!(SuggestionType::Behavioural.to_string(), "behavioural");
        assert_eq!(
            serde_json::to_string(&SuggestionStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(serde_json::to_string(&Source::Vida).unwrap(), "\"vida\"");
        assert_eq!(
            serde_json::to_string(&SortField::DateUpdated).unwrap(),
            "\"dateUpdated\""
        );

        for status in SuggestionStatus::ALL {
            assert_eq!(status.as_str().parse::<SuggestionStatus>().unwrap(), status);
        }
        for kind in SuggestionType::ALL {
            assert_eq!(kind.as_str().parse::<SuggestionType>().unwrap(), kind);
        }
        for priority in Priority::ALL {
            assert_eq!(priority.as_str().parse::<Priority>().unwrap(), priority);
        }
    }

    #[test]
    fn test_enum_parsing_is_lenient_about_case() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(
            "in-progress".parse::<SuggestionStatus>().unwrap(),
            SuggestionStatus::InProgress
        );
        assert_eq!("Asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert_eq!("updated".parse::<SortField>().unwrap(), SortField::DateUpdated);

        let err = "urgent".parse::<Priority>().unwrap_err();
        assert!(err.contains("urgent"));
        assert!("archived".parse::<SuggestionStatus>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(SuggestionStatus::default(), SuggestionStatus::Pending);
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(SortField::default(), SortField::DateUpdated);
        assert_eq!(SortDirection::default(), SortDirection::Desc);
    }

    #[test]
    fn test_ranks_order_as_displayed() {
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
        let ranks: Vec<u8> = SuggestionStatus::ALL.iter().map(|s| s.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_suggestion_json_shape() {
        let suggestion = create_test_suggestion(SuggestionStatus::Pending);
        let json = serde_json::to_value(&suggestion).unwrap();

        assert_eq!(json["type"], "equipment");
        assert_eq!(json["employeeId"], "emp-1");
        assert_eq!(json["estimatedCost"], "£450.00");
        assert!(json.get("dateCompleted").is_none());
        assert!(json.get("notes").is_none());

        let back: Suggestion = serde_json::from_value(json).unwrap();
        assert_eq!(back, suggestion);
    }

    #[test]
    fn test_missing_priority_deserializes_as_medium() {
        let json = serde_json::json!({
            "id": "legacy",
            "employeeId": "emp-1",
            "type": "exercise",
            "description": "Stretch hourly",
            "status": "pending",
            "source": "vida",
            "createdBy": "vida-system@company.com",
            "dateCreated": "2024-01-01T00:00:00Z",
            "dateUpdated": "2024-01-01T00:00:00Z"
        });
        let suggestion: Suggestion = serde_json::from_value(json).unwrap();
        assert_eq!(suggestion.priority, Priority::Medium);
    }

    #[test]
    fn test_completion_consistency() {
        assert!(create_test_suggestion(SuggestionStatus::Completed).has_consistent_completion());
        assert!(create_test_suggestion(SuggestionStatus::Pending).has_consistent_completion());

        let mut broken = create_test_suggestion(SuggestionStatus::Pending);
        broken.date_completed = Some(broken.date_created);
        assert!(!broken.has_consistent_completion());
    }

    #[test]
    fn test_joined_record_flattens_suggestion_fields() {
        let joined = SuggestionWithEmployee::new(
            create_test_suggestion(SuggestionStatus::Pending),
            &create_test_employee(),
        );
        let json = serde_json::to_value(&joined).unwrap();
        assert_eq!(json["id"], "sug-1");
        assert_eq!(json["employee"]["name"], "Sarah Johnson");
        assert_eq!(json["employee"]["riskLevel"], "high");
    }

    #[test]
    fn test_employee_lookup() {
        let employees = vec![create_test_employee()];
        assert_eq!(employees.employee_name("emp-1"), Some("Sarah Johnson"));
        assert_eq!(employees.employee_name("emp-2"), None);
    }

    #[test]
    fn test_create_validation() {
        let mut request = CreateSuggestion {
            employee_id: "emp-1".to_string(),
            suggestion_type: SuggestionType::Exercise,
            description: "Take micro-breaks".to_string(),
            priority: None,
            notes: Some(String::new()),
            estimated_cost: Some("£0.00".to_string()),
        };
        assert!(request.validate().is_ok());
        assert_eq!(request.priority_or_default(), Priority::Medium);
        assert_eq!(request.notes(), None);
        assert_eq!(request.estimated_cost(), Some("£0.00"));

        request.description = "   ".to_string();
        let err = request.validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("description"));

        request.description = "Take micro-breaks".to_string();
        request.employee_id = String::new();
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("employeeId"));
    }

    #[test]
    fn test_status_change_to_completed_stamps_completion() {
        let mut suggestion = create_test_suggestion(SuggestionStatus::Pending);
        let now = suggestion.date_created + jiff::SignedDuration::from_hours(48);

        UpdateSuggestion::status_change(SuggestionStatus::Completed, Some("Fitted".to_string()))
            .apply_to(&mut suggestion, now);

        assert_eq!(suggestion.status, SuggestionStatus::Completed);
        assert_eq!(suggestion.date_completed, Some(now));
        assert_eq!(suggestion.date_updated, now);
        assert_eq!(suggestion.notes.as_deref(), Some("Fitted"));
        assert!(suggestion.has_consistent_completion());
    }

    #[test]
    fn test_leaving_completed_clears_completion() {
        let mut suggestion = create_test_suggestion(SuggestionStatus::Completed);
        let now = ts(1_704_240_000_000);

        UpdateSuggestion::status_change(SuggestionStatus::InProgress, None)
            .apply_to(&mut suggestion, now);

        assert_eq!(suggestion.status, SuggestionStatus::InProgress);
        assert_eq!(suggestion.date_completed, None);
        assert!(suggestion.has_consistent_completion());
    }

    #[test]
    fn test_status_change_without_notes_keeps_existing_notes() {
        let mut suggestion = create_test_suggestion(SuggestionStatus::Pending);
        suggestion.notes = Some("Ordered".to_string());

        let update = UpdateSuggestion::status_change(SuggestionStatus::InProgress, Some(String::new()));
        assert_eq!(update.notes, None);
        update.apply_to(&mut suggestion, ts(1_704_240_000_000));

        assert_eq!(suggestion.notes.as_deref(), Some("Ordered"));
    }

    #[test]
    fn test_explicit_clear_of_optional_fields() {
        let mut suggestion = create_test_suggestion(SuggestionStatus::Pending);
        suggestion.notes = Some("Ordered".to_string());
        let update = UpdateSuggestion {
            notes: Some(None),
            estimated_cost: Some(None),
            ..Default::default()
        };
        assert!(!update.is_empty());
        update.apply_to(&mut suggestion, ts(1_704_240_000_000));

        assert_eq!(suggestion.notes, None);
        assert_eq!(suggestion.estimated_cost, None);
        assert_eq!(suggestion.status, SuggestionStatus::Pending);
    }

    #[test]
    fn test_update_never_moves_date_updated_before_creation() {
        let mut suggestion = create_test_suggestion(SuggestionStatus::Pending);
        let created = suggestion.date_created;
        UpdateSuggestion::default().apply_to(&mut suggestion, ts(0));
        assert_eq!(suggestion.date_updated, created);
    }

    #[test]
    fn test_with_estimated_cost_ignores_empty_input() {
        let update = UpdateSuggestion::status_change(SuggestionStatus::Completed, None)
            .with_estimated_cost(Some(String::new()));
        assert_eq!(update.estimated_cost, None);

        let update = update.with_estimated_cost(Some("£85.00".to_string()));
        assert_eq!(update.estimated_cost, Some(Some("£85.00".to_string())));
    }

    #[test]
    fn test_status_update_result() {
        assert!(StatusUpdateResult::ok().success);
        let failed = StatusUpdateResult::failed("offline");
        assert!(!failed.success);
        assert_eq!(failed.error.as_deref(), Some("offline"));
        assert_eq!(
            serde_json::to_value(StatusUpdateResult::ok()).unwrap(),
            serde_json::json!({ "success": true })
        );
    }

    #[test]
    fn test_import_created_by_fallback() {
        let json = serde_json::json!({
            "employeeId": "emp-1",
            "type": "lifestyle",
            "description": "Walk at lunch",
            "status": "completed",
            "priority": "low",
            "source": "vida",
            "dateCreated": "2024-01-01T00:00:00Z",
            "dateUpdated": "2024-01-05T00:00:00Z",
            "dateCompleted": "2024-01-05T00:00:00Z"
        });
        let import: SuggestionImport = serde_json::from_value(json).unwrap();
        assert_eq!(import.created_by(), "vida-system@company.com");
        assert!(import.date_completed.is_some());
    }

    #[test]
    fn test_filters_is_empty() {
        assert!(SuggestionFilters::default().is_empty());
        let blank = SuggestionFilters {
            employee: Some(String::new()),
            search: Some(String::new()),
            ..Default::default()
        };
        assert!(blank.is_empty());
        assert!(!SuggestionFilters::for_employee("emp-1").is_empty());
    }

    #[test]
    fn test_stats_tally() {
        let now = ts(100 * DAY_MS);
        let mut old_pending = create_test_suggestion(SuggestionStatus::Pending);
        old_pending.date_created = ts(50 * DAY_MS);
        let mut fresh_pending = create_test_suggestion(SuggestionStatus::Pending);
        fresh_pending.date_created = ts(90 * DAY_MS);
        fresh_pending.priority = Priority::Low;
        fresh_pending.source = Source::Admin;
        let mut old_done = create_test_suggestion(SuggestionStatus::Completed);
        old_done.date_created = ts(0);
        old_done.priority = Priority::Medium;

        let stats = DashboardStats::from_suggestions(&[old_pending, fresh_pending, old_done], now, 30);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_progress + stats.dismissed, 0);
        assert_eq!(
            (stats.high_priority, stats.medium_priority, stats.low_priority),
            (1, 1, 1)
        );
        assert_eq!((stats.vida, stats.admin), (2, 1));
        assert_eq!(stats.overdue, 1);
        assert_eq!(stats.completion_rate(), 33);
    }

    #[test]
    fn test_stats_of_empty_list() {
        let stats = DashboardStats::from_suggestions::<Suggestion>(&[], ts(0), 30);
        assert_eq!(stats, DashboardStats::default());
        assert_eq!(stats.completion_rate(), 0);
    }
}
