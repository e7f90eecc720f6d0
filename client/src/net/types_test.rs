use super::*;

#[test]
fn patient_summary_deserializes_server_row() {
    let json = r#"{"id":7,"name":"Lopez Camila","dob":"1987-09-12"}"#;
    let row: PatientSummary = serde_json::from_str(json).unwrap();
    assert_eq!(
        row,
        PatientSummary { id: 7, name: "Lopez Camila".to_owned(), dob: "1987-09-12".to_owned() }
    );
}

#[test]
fn patient_summary_ignores_extra_fields() {
    let json = r#"{"id":1,"name":"Doe John","dob":"1980-01-01","fhir":{}}"#;
    let row: PatientSummary = serde_json::from_str(json).unwrap();
    assert_eq!(row.id, 1);
}

#[test]
fn patient_summary_list_deserializes() {
    let json = r#"[{"id":1,"name":"Doe John","dob":"1980-01-01"},{"id":2,"name":"Doe Jane","dob":"1982-03-04"}]"#;
    let rows: Vec<PatientSummary> = serde_json::from_str(json).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].name, "Doe Jane");
}

#[test]
fn api_error_body_reads_detail() {
    let body: ApiErrorBody = serde_json::from_str(r#"{"detail":"No patients found"}"#).unwrap();
    assert_eq!(body.detail, "No patients found");
}
