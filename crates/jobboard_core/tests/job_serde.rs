use jobboard_core::{Job, JobPage};
use pretty_assertions::assert_eq;

const LISTED_JOB: &str = r#"{
    "workAssignmentId": "8a7f-01",
    "waReadableId": "WA-1234",
    "workAssignmentName": "Barista",
    "hourlyWage": { "amount": 27.5, "currencyId": 1 },
    "salary": { "amount": 0, "currencyId": 1 },
    "jobLocation": {
        "addressStreet": "Bahnhofstrasse 1",
        "extraAddress": "",
        "city": "Zürich",
        "zip": "8001",
        "countryId": 41
    },
    "periodFrom": 1717200000000,
    "datePublished": 1716800000000,
    "shiftCount": 3
}"#;

#[test]
fn decodes_service_record_and_ignores_unknown_fields() {
    let job: Job = serde_json::from_str(LISTED_JOB).unwrap();
    assert_eq!(job.id(), "8a7f-01");
    assert_eq!(job.work_assignment_name, "Barista");
    assert_eq!(job.hourly_wage.amount, 27.5);
    assert_eq!(job.job_location.city, "Zürich");
    assert_eq!(job.job_location.state, None);
    assert_eq!(job.period_from, 1_717_200_000_000);
    assert_eq!(job.branch_link, None);
}

#[test]
fn encoded_job_decodes_to_an_equal_record() {
    let job: Job = serde_json::from_str(LISTED_JOB).unwrap();
    let encoded = serde_json::to_string(&job).unwrap();
    assert!(encoded.contains("\"workAssignmentId\":\"8a7f-01\""));
    assert!(!encoded.contains("branchLink"));
    let decoded: Job = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, job);
}

#[test]
fn missing_identity_is_rejected() {
    let broken = LISTED_JOB.replace("\"workAssignmentId\": \"8a7f-01\",", "");
    assert!(serde_json::from_str::<Job>(&broken).is_err());
}

#[test]
fn identity_ignores_other_fields() {
    let job: Job = serde_json::from_str(LISTED_JOB).unwrap();
    let mut renamed = job.clone();
    renamed.work_assignment_name = "Head Barista".to_string();
    assert!(job.same_id(&renamed));
    assert!(job.has_id("8a7f-01"));

    let page: JobPage =
        serde_json::from_str(&format!(r#"{{ "items": [{LISTED_JOB}], "total": 1 }}"#)).unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 1);
}
