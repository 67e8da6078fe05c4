use super::*;
use crate::products::catalog::Catalog;

fn stored_carts(store: &CartStore) -> usize {
    store.carts.read().unwrap().len()
}

fn has_cart(store: &CartStore, session: Uuid) -> bool {
    store.carts.read().unwrap().contains_key(&session)
}

fn seeded_store(capacity: usize) -> CartStore {
    let catalog = Catalog::sample();
    let mut seed = Cart::default();
    seed.add(catalog.find(1).unwrap(), 1).unwrap();
    CartStore::with_capacity(seed, capacity)
}

#[test]
fn new_session_sees_seed_cart() {
    let store = seeded_store(4);
    let cart = store.snapshot(Uuid::new_v4());

    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].id(), 1);
    assert_eq!(stored_carts(&store), 0, "snapshot must not create a cart");
}

#[test]
fn sessions_are_isolated() {
    let store = seeded_store(4);
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    store.with_cart(alice, |cart| cart.remove(1)).unwrap();

    assert!(store.snapshot(alice).items.is_empty());
    assert_eq!(store.snapshot(bob).items.len(), 1);
}

#[test]
fn changes_persist_within_a_session() {
    let store = seeded_store(4);
    let session = Uuid::new_v4();

    store.with_cart(session, |cart| cart.increment(1)).unwrap();
    store.with_cart(session, |cart| cart.increment(1)).unwrap();

    assert_eq!(store.snapshot(session).get(1).unwrap().quantity, 3);
}

#[test]
fn least_recently_touched_cart_is_evicted_at_capacity() {
    let store = seeded_store(2);
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    let third = Uuid::new_v4();

    store.with_cart(first, |_| ());
    std::thread::sleep(std::time::Duration::from_millis(2));
    store.with_cart(second, |_| ());
    std::thread::sleep(std::time::Duration::from_millis(2));
    store.with_cart(first, |_| ());
    std::thread::sleep(std::time::Duration::from_millis(2));
    store.with_cart(third, |_| ());

    assert_eq!(stored_carts(&store), 2);
    assert!(has_cart(&store, first));
    assert!(!has_cart(&store, second));
    assert!(has_cart(&store, third));
}

#[test]
fn flash_is_shown_once() {
    let store = seeded_store(4);
    let session = Uuid::new_v4();

    store.set_flash(session, Flash::new(Notice::success("Item removed from cart")));

    let flash = store.take_flash(session).expect("flash stored for the session");
    assert_eq!(flash.notice.message, "Item removed from cart");
    assert!(flash.promo_code.is_empty());
    assert_eq!(store.take_flash(session), None);
    assert_eq!(store.snapshot(session).items.len(), 1, "flash keeps the seeded cart");
}

#[test]
fn take_flash_does_not_create_a_cart() {
    let store = seeded_store(4);

    assert_eq!(store.take_flash(Uuid::new_v4()), None);
    assert_eq!(stored_carts(&store), 0);
}
