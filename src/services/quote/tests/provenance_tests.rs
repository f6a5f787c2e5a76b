use super::*;
use crate::test_utils::product;

#[test]
fn test_manual_edit_marks_user_inputted() {
    let mut p = product(1, "PED-3D", 4, 0.5, 0.1);
    edit_time_per_unit(&mut p, 0.75).unwrap();

    assert_eq!(p.time_per_unit, 0.75);
    assert_eq!(p.total_time, 3.0);
    assert!(p.is_manually_edited);
    assert_eq!(p.source, ProductSource::UserInputted);
}

#[test]
fn test_invalid_edit_leaves_product_untouched() {
    let mut p = product(1, "PED-3D", 4, 0.5, 0.1);
    let before = p.clone();

    assert!(edit_time_per_unit(&mut p, -1.0).is_err());
    assert!(edit_time_per_unit(&mut p, f64::INFINITY).is_err());
    assert_eq!(p, before);
}

#[test]
fn test_quantity_edit_keeps_provenance() {
    let mut p = product(1, "PED-3D", 4, 0.5, 0.1);
    edit_quantity(&mut p, 10);
    assert_eq!(p.total_time, 5.0);
    assert_eq!(p.source, ProductSource::Catalogue);
    assert!(!p.is_manually_edited);

    edit_time_per_unit(&mut p, 1.0).unwrap();
    edit_quantity(&mut p, 2);
    assert_eq!(p.total_time, 2.0);
    assert_eq!(p.source, ProductSource::UserInputted);
    assert!(p.is_manually_edited);
}

#[test]
fn test_catalogue_suggestion_resets_provenance() {
    let mut p = product(1, "PED-3D", 4, 0.5, 0.1);
    edit_time_per_unit(&mut p, 2.0).unwrap();

    let reference = ReferenceProduct::new("PED-3D", 0.5, 0.1, false);
    apply_catalogue_suggestion(&mut p, &reference);

    assert!(!p.is_manually_edited);
    assert_eq!(p.source, ProductSource::Catalogue);
    assert_eq!(p.time_per_unit, 0.5);
    assert_eq!(p.total_time, 2.0);
}

#[test]
fn test_learned_suggestion_keeps_learned_source() {
    let mut p = product(1, "DESK-1600", 1, 3.0, 0.0);
    let mut reference = ReferenceProduct::new("DESK-1600", 1.2, 0.3, false);
    reference.origin = CatalogueOrigin::Learned;

    apply_catalogue_suggestion(&mut p, &reference);
    assert_eq!(p.source, ProductSource::Learned);
}

#[test]
fn test_learned_product() {
    let mut p = product(1, "PED-3D", 4, 0.5, 0.1);
    assert!(learned_product(&p).is_none());

    edit_time_per_unit(&mut p, 0.8).unwrap();
    let learned = learned_product(&p).unwrap();
    assert_eq!(learned.code, "PED-3D");
    assert_eq!(learned.install_time_hours, 0.8);
    assert_eq!(learned.origin, CatalogueOrigin::Learned);
}

#[test]
fn test_edit_log_is_append_only() {
    let mut log = EditLog::new();
    let before = product(1, "PED-3D", 4, 0.5, 0.1);
    let mut after = before.clone();
    edit_quantity(&mut after, 6);

    log.record(1, EditKind::Quantity, Some(before.clone()), Some(after.clone()));
    log.record(2, EditKind::Quantity, None, None);
    log.record(1, EditKind::Revert, Some(after), Some(before));

    assert_eq!(log.len(), 3);
    let sequences: Vec<u64> = log.entries().iter().map(|e| e.sequence).collect();
    assert_eq!(sequences, vec![0, 1, 2]);

    let last = log.last_for(1).unwrap();
    assert_eq!(last.kind, EditKind::Revert);
    assert_eq!(last.sequence, 2);
    assert!(log.last_for(9).is_none());
}
