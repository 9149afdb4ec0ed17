use parceltrack_core::{NewParcel, Parcel, ParcelStatus};

#[test]
fn status_string_forms_roundtrip() {
    for status in [
        ParcelStatus::Registered,
        ParcelStatus::Sent,
        ParcelStatus::Delivered,
    ] {
        assert_eq!(ParcelStatus::parse(status.as_str()), Some(status));
    }
}

#[test]
fn status_parse_rejects_unknown_value() {
    assert_eq!(ParcelStatus::parse("returned"), None);
    assert_eq!(ParcelStatus::parse("Registered"), None);
}

#[test]
fn registered_constructor_sets_initial_state() {
    let parcel = NewParcel::registered(1000, "test", "2024-01-01T00:00:00Z");
    assert_eq!(parcel.client, 1000);
    assert_eq!(parcel.status, "registered");
    assert_eq!(parcel.address, "test");
    assert_eq!(parcel.created_at, "2024-01-01T00:00:00Z");
}

#[test]
fn is_registered_tracks_status_string() {
    let mut parcel = Parcel {
        number: 1,
        client: 1000,
        status: ParcelStatus::Registered.as_str().to_string(),
        address: "test".to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
    };
    assert!(parcel.is_registered());

    parcel.status = ParcelStatus::Sent.as_str().to_string();
    assert!(!parcel.is_registered());
}

#[test]
fn parcel_serializes_with_snake_case_fields() {
    let parcel = Parcel {
        number: 42,
        client: 1000,
        status: "registered".to_string(),
        address: "test".to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
    };

    let json = serde_json::to_value(&parcel).unwrap();
    assert_eq!(json["number"], 42);
    assert_eq!(json["created_at"], "2024-01-01T00:00:00Z");

    let back: Parcel = serde_json::from_value(json).unwrap();
    assert_eq!(back, parcel);
}
