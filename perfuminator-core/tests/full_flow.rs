//! End-to-end walkthroughs of the session flow against the shipped catalog.

use perfuminator_core::{Catalog, Screen, Session, SessionError};

const SHIPPED_DATA: &str = include_str!("../../perfuminator-app/assets/data/scent_data.json");

fn session() -> Session {
    Session::new(Catalog::from_json(SHIPPED_DATA).unwrap())
}

#[test]
fn preset_palette_journey_ends_in_a_named_perfume() {
    let mut session = session();
    session.browse_palettes().unwrap();
    session.choose_palette("candy").unwrap();

    session.select("Vanilla").unwrap();
    session.select("Caramel").unwrap();
    session.select("Honey").unwrap();

    let totals = session.current_totals().unwrap();
    assert_eq!(totals.sweet, 14);
    assert_eq!(totals.woody, 2);
    assert_eq!(totals.fruity, 0);

    let draft = session.request_checkout().unwrap();
    assert_eq!(draft.notes, ["Vanilla", "Caramel", "Honey"]);

    let order = session.finalize_name("Sugar Rush").unwrap();
    assert_eq!(order.name, "Sugar Rush");
    assert_eq!(order.totals.sweet, 14);
    assert_eq!(session.screen(), Screen::Checkout);
}

#[test]
fn free_reign_journey_can_mix_palettes() {
    let mut session = session();
    session.choose_free_reign().unwrap();

    // Notes from three different presets, reachable only via free reign.
    session.select("Strawberry").unwrap();
    session.select("Cedarwood").unwrap();
    session.select("Lemon").unwrap();

    let totals = session.current_totals().unwrap();
    assert_eq!(totals.fruity, 6);
    assert_eq!(totals.woody, 5);
    assert_eq!(totals.citrus, 5);
    assert_eq!(totals.sweet, 3);

    session.request_checkout().unwrap();
    let order = session.finalize_name("Wild Orchard").unwrap();
    assert_eq!(order.notes, ["Strawberry", "Cedarwood", "Lemon"]);
}

#[test]
fn declining_checkout_is_a_no_op() {
    // The front end asks for confirmation before calling request_checkout;
    // a declined confirmation simply never calls it. Picking continues.
    let mut session = session();
    session.choose_free_reign().unwrap();
    session.select("Peach").unwrap();
    assert_eq!(session.screen(), Screen::Picking);
    assert_eq!(session.current_selection().unwrap(), ["Peach"]);
}

#[test]
fn abandoning_checkout_allows_a_fresh_start() {
    let mut session = session();
    session.browse_palettes().unwrap();
    session.choose_palette("zesty").unwrap();
    session.select("Lemon").unwrap();
    session.request_checkout().unwrap();
    session.finalize_name("Zing").unwrap();

    session.go_back().unwrap();
    assert_eq!(session.screen(), Screen::MainMenu);
    assert!(session.final_order().is_none());

    session.choose_free_reign().unwrap();
    assert!(session.current_selection().unwrap().is_empty());
    assert!(session.current_totals().unwrap().is_zero());
}

#[test]
fn palette_gates_hold_across_the_whole_flow() {
    let mut session = session();
    session.browse_palettes().unwrap();

    let err = session.choose_palette("winter").unwrap_err();
    assert!(matches!(err, SessionError::UnknownPalette { .. }));
    assert_eq!(session.screen(), Screen::PaletteSelect);

    session.choose_palette("outdoors").unwrap();
    let err = session.select("Vanilla").unwrap_err();
    assert!(matches!(err, SessionError::InvalidNote { .. }));

    for note in ["Cedarwood", "Pine", "Oakmoss"] {
        session.select(note).unwrap();
    }
    assert!(matches!(
        session.select("Vetiver"),
        Err(SessionError::CapacityExceeded)
    ));
}
