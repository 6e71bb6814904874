use cabinetkit_core::Zone;
use cabinetkit_designer::hardware_rules::{hinges, hinges_per_door, legs, slides};
use proptest::prelude::*;

proptest! {
    #[test]
    fn hinge_count_is_monotone(a in 0.0f64..3000.0, b in 0.0f64..3000.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(hinges_per_door(low) <= hinges_per_door(high));
    }

    #[test]
    fn hinge_total_scales_with_doors(height in 100.0f64..2500.0, doors in 0u32..8) {
        let rule = hinges(height, doors);
        prop_assert_eq!(rule.total, rule.per_door * doors);
    }
}

#[test]
fn only_base_units_get_legs() {
    for zone in [Zone::Wall, Zone::Tower] {
        assert!(legs(1000.0, zone).is_none());
    }
    let rule = legs(1000.0, Zone::Base).unwrap();
    assert_eq!(rule.quantity, 6);
    assert!(rule.reason.contains("3 pairs"));
    assert_eq!(slides(4).pairs, 4);
}
