//! Unit tests for the portal crate

#[cfg(test)]
mod dto_tests {
    use crate::presentation::dto::*;

    #[test]
    fn test_apply_request_full_deserialization() {
        let json = r#"{
            "user_id": 1,
            "job_id": 2,
            "ho_ten": "Nguyễn Văn A",
            "gioi_tinh": "Nam",
            "hinh_thuc": "Toàn thời gian",
            "ngay_sinh": "2000-01-01",
            "cccd": "012345678901",
            "noi_cap": "Hà Nội",
            "ngay_cap": "2018-05-20",
            "so_dien_thoai": "0901234567",
            "que_quan": "Nam Định",
            "cong_ty": "Công ty TNHH ABC"
        }"#;

        let request: ApplyRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.user_id, Some(1));
        assert_eq!(request.job_id, Some(2));
        assert_eq!(request.applicant.ho_ten.as_deref(), Some("Nguyễn Văn A"));
        assert_eq!(
            request.applicant.so_dien_thoai.as_deref(),
            Some("0901234567")
        );
        assert_eq!(request.applicant.cong_ty.as_deref(), Some("Công ty TNHH ABC"));
    }

    #[test]
    fn test_apply_request_missing_ids() {
        let request: ApplyRequest =
            serde_json::from_str(r#"{"ho_ten":"Nguyễn Văn A"}"#).unwrap();
        assert!(request.user_id.is_none());
        assert!(request.job_id.is_none());
        assert_eq!(request.applicant.ho_ten.as_deref(), Some("Nguyễn Văn A"));
    }

    #[test]
    fn test_ack_serialization() {
        let json = serde_json::to_string(&PortalAck::ok("Ứng tuyển thành công!")).unwrap();
        assert!(json.contains(r#""success":true"#));
        assert!(json.contains("Ứng tuyển thành công!"));
    }

    #[test]
    fn test_success_response_serialization() {
        let json = serde_json::to_string(&SuccessResponse::ok()).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }

    #[test]
    fn test_create_company_response_serialization() {
        let response = CreateCompanyResponse {
            success: true,
            id: 12,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""success":true"#));
        assert!(json.contains(r#""id":12"#));
    }
}

#[cfg(test)]
mod models_tests {
    use crate::domain::entities::*;
    use chrono::Utc;

    #[test]
    fn test_company_serializes_type_key() {
        let company = Company {
            id: 3,
            company: Some("ABC".to_string()),
            image: None,
            job_type: Some("Lắp ráp".to_string()),
            address: Some("KCN Bắc Thăng Long".to_string()),
            age: Some("18-35".to_string()),
            salary: Some("7 triệu".to_string()),
            bonus: None,
            detail: None,
            interview: None,
            document: None,
            note: None,
            shift: Some("Ca ngày".to_string()),
        };

        let json = serde_json::to_string(&company).unwrap();
        assert!(json.contains(r#""type":"Lắp ráp""#));
        assert!(!json.contains("job_type"));
        assert!(json.contains(r#""id":3"#));
        // Absent attributes serialize as null, as the legacy rows did.
        assert!(json.contains(r#""image":null"#));
    }

    #[test]
    fn test_company_fields_accepts_partial_payload() {
        let fields: CompanyFields =
            serde_json::from_str(r#"{"company":"ABC","type":"Lắp ráp"}"#).unwrap();
        assert_eq!(fields.company.as_deref(), Some("ABC"));
        assert_eq!(fields.job_type.as_deref(), Some("Lắp ráp"));
        assert!(fields.salary.is_none());
        assert!(fields.shift.is_none());
    }

    #[test]
    fn test_applied_job_serialization() {
        let applied = AppliedJob {
            id: 9,
            company: Some("ABC".to_string()),
            image: None,
            job_type: Some("Lắp ráp".to_string()),
            address: None,
            salary: Some("7 triệu".to_string()),
            detail: None,
            applied_at: Utc::now(),
        };

        let json = serde_json::to_string(&applied).unwrap();
        assert!(json.contains(r#""type":"Lắp ráp""#));
        assert!(json.contains("applied_at"));
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(PortalError, StatusCode)> = vec![
            (PortalError::MissingApplicationIds, StatusCode::BAD_REQUEST),
            (PortalError::AlreadyApplied, StatusCode::BAD_REQUEST),
            (
                PortalError::Database(sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                PortalError::SubmitFailed(sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                PortalError::ApplicationListFailed(sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                PortalError::InsertFailed(sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                PortalError::UpdateFailed(sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                PortalError::DeleteFailed(sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_error_display() {
        assert!(
            PortalError::AlreadyApplied
                .to_string()
                .contains("ứng tuyển")
        );
        assert!(
            PortalError::MissingApplicationIds
                .to_string()
                .contains("user_id")
        );
    }
}
