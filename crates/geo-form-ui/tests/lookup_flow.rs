//! Map click -> reverse geocode -> controller, against mock backends

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::*;
use geo_form_types::{AddressRecord, GeoPoint, UserField, ViewMode, NOT_ENTERED};
use geo_form_ui::panels::summary_rows;
use geo_form_ui::state::LookupStatus;
use geo_form_ui::resolver::LOOKUP_POLL_INTERVAL;
use geo_form_ui::{LookupFailure, LookupQueue, ViewController};
use pretty_assertions::assert_eq;
use tokio::sync::Notify;

fn info_value(controller: &ViewController, label: &str) -> String {
    summary_rows(controller.record())
        .into_iter()
        .find(|row| row.label == label)
        .map(|row| row.value)
        .unwrap()
}

#[tokio::test]
async fn marker_is_placed_before_lookup_resolves() {
    let resolver = resolver(Arc::new(StalledBackend));
    let mut controller = ViewController::new();
    let mut queue = LookupQueue::new();

    queue.push(resolver.on_point_selected(&mut controller, LAKESIDE));

    // Synchronous effects are visible before the task has even been polled
    assert_eq!(controller.marker(), Some(LAKESIDE));
    assert!(controller.lookup_status().is_pending());

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(queue.apply_completed(&mut controller), 0);
    assert_eq!(queue.len(), 1);
    // A stalled lookup keeps the UI polling at a fixed interval, not every frame
    assert_eq!(queue.repaint_after(), Some(LOOKUP_POLL_INTERVAL));
    assert_eq!(controller.marker(), Some(LAKESIDE));
    assert!(controller.record().address.is_empty());
}

#[tokio::test]
async fn click_fills_address() {
    let resolver = resolver(Arc::new(CannedBackend::new(POKHARA_BODY)));
    let mut controller = ViewController::new();
    let mut queue = LookupQueue::new();

    queue.push(resolver.on_point_selected(&mut controller, LAKESIDE));
    settle(&mut queue, &mut controller).await;

    let expected = AddressRecord {
        road: "Lakeside Road".to_string(),
        house_number: String::new(),
        neighbourhood: "Baidam".to_string(),
        city: "Pokhara".to_string(),
        state: "Gandaki Province".to_string(),
        country: "Nepal".to_string(),
        postcode: "33700".to_string(),
    };
    assert!(queue.is_empty());
    assert_eq!(queue.repaint_after(), None);
    assert_eq!(controller.record().address, expected);
    assert_eq!(controller.lookup_status(), &LookupStatus::Resolved);
    assert_eq!(
        controller.record().address.popup_label(),
        "Lakeside Road, Pokhara, Nepal"
    );
}

#[tokio::test]
async fn failure_clears_address_and_info_reads_not_entered() {
    let resolver = resolver(Arc::new(FailingBackend(LookupFailure::Transport(
        "connection refused".to_string(),
    ))));
    let mut controller = ViewController::new();
    controller.apply_address(Some(AddressRecord {
        city: "Pokhara".to_string(),
        state: "Gandaki Province".to_string(),
        country: "Nepal".to_string(),
        postcode: "33700".to_string(),
        ..Default::default()
    }));
    let mut queue = LookupQueue::new();

    queue.push(resolver.on_point_selected(&mut controller, LAKESIDE));
    settle(&mut queue, &mut controller).await;

    assert!(controller.record().address.is_empty());
    assert_eq!(
        controller.lookup_status().failure(),
        Some("request failed: connection refused")
    );

    controller.select_view(ViewMode::Info);
    for label in ["City", "State", "Country", "Postcode"] {
        assert_eq!(info_value(&controller, label), NOT_ENTERED);
    }
    // The marker stays where the user clicked
    assert_eq!(controller.marker(), Some(LAKESIDE));
}

#[tokio::test]
async fn malformed_body_is_a_failure() {
    let resolver = resolver(Arc::new(CannedBackend::new("<html>Too Many Requests</html>")));
    let mut controller = ViewController::new();
    let mut queue = LookupQueue::new();

    queue.push(resolver.on_point_selected(&mut controller, LAKESIDE));
    settle(&mut queue, &mut controller).await;

    assert!(matches!(
        controller.lookup_status(),
        LookupStatus::Failed(message) if message.starts_with("malformed response")
    ));
    assert!(controller.record().address.is_empty());
}

#[tokio::test]
async fn missing_address_member_gives_fully_populated_record() {
    let resolver = resolver(Arc::new(CannedBackend::new(
        r#"{"error": "Unable to geocode"}"#,
    )));

    let record = resolver.resolve(GeoPoint::new(0.0, -30.0)).await.unwrap();

    assert_eq!(record, AddressRecord::default());
    for value in [
        &record.road,
        &record.house_number,
        &record.neighbourhood,
        &record.city,
        &record.state,
        &record.country,
        &record.postcode,
    ] {
        assert_eq!(value, "");
    }
}

#[tokio::test]
async fn town_is_used_when_city_is_missing() {
    let resolver = resolver(Arc::new(CannedBackend::new(
        r#"{"address": {"town": "Lekhnath", "country": "Nepal"}}"#,
    )));

    let record = resolver.resolve(LAKESIDE).await.unwrap();

    assert_eq!(record.city, "Lekhnath");
    assert_eq!(record.country, "Nepal");
}

#[tokio::test]
async fn same_point_twice_is_idempotent() {
    let backend = Arc::new(CannedBackend::new(POKHARA_BODY));
    let resolver = resolver(backend.clone());
    let mut controller = ViewController::new();
    let mut queue = LookupQueue::new();

    queue.push(resolver.on_point_selected(&mut controller, LAKESIDE));
    settle(&mut queue, &mut controller).await;
    let first = controller.record().address.clone();

    queue.push(resolver.on_point_selected(&mut controller, LAKESIDE));
    settle(&mut queue, &mut controller).await;
    let second = controller.record().address.clone();

    assert_eq!(first, second);
    // No caching: both clicks went to the backend
    assert_eq!(backend.calls(), 2);
}

#[tokio::test]
async fn newest_click_wins_when_older_lookup_resolves_last() {
    let held = GeoPoint::new(1.0, 1.0);
    let backend = Arc::new(GatedBackend {
        held,
        release: Notify::new(),
    });
    let resolver = resolver(backend.clone());
    let mut controller = ViewController::new();
    let mut queue = LookupQueue::new();

    queue.push(resolver.on_point_selected(&mut controller, held));
    queue.push(resolver.on_point_selected(&mut controller, LAKESIDE));

    // Newer lookup completes first
    for _ in 0..50 {
        tokio::task::yield_now().await;
        queue.apply_completed(&mut controller);
        if queue.len() == 1 {
            break;
        }
    }
    assert_eq!(controller.record().address.city, "Fresh");

    // Older one finishes afterwards and is dropped
    backend.release.notify_one();
    settle(&mut queue, &mut controller).await;

    assert!(queue.is_empty());
    assert_eq!(controller.record().address.city, "Fresh");
    assert_eq!(controller.marker(), Some(LAKESIDE));
}

#[tokio::test]
async fn view_switches_keep_entered_details() {
    let resolver = resolver(Arc::new(CannedBackend::new(POKHARA_BODY)));
    let mut controller = ViewController::new();
    let mut queue = LookupQueue::new();

    assert_eq!(controller.view_mode(), ViewMode::Form);
    controller.update_field(UserField::Name, "Asha Gurung".to_string());
    controller.update_field(UserField::Phone, "+977 9800000000".to_string());

    controller.select_view(ViewMode::Address);
    queue.push(resolver.on_point_selected(&mut controller, LAKESIDE));
    settle(&mut queue, &mut controller).await;

    controller.select_view(ViewMode::Info);
    assert_eq!(info_value(&controller, "Name"), "Asha Gurung");
    assert_eq!(info_value(&controller, "Phone"), "+977 9800000000");
    assert_eq!(info_value(&controller, "City"), "Pokhara");
    assert_eq!(info_value(&controller, "Postcode"), "33700");

    controller.select_view(ViewMode::Form);
    assert_eq!(controller.record().name, "Asha Gurung");
    assert_eq!(controller.record().phone, "+977 9800000000");
}
