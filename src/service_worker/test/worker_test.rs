use crate::service_worker::interface::LifecycleEvent;
use crate::service_worker::test::fixture::Fixture;

#[test]
fn test_install_skips_waiting_exactly_once() {
    let f = Fixture::new();

    f.worker.handle_event(LifecycleEvent::Install).unwrap();

    assert_eq!(f.context.skip_waiting_count(), 1);
    assert_eq!(f.context.claim_clients_count(), 0);
}

#[test]
fn test_activate_claims_clients_exactly_once() {
    let f = Fixture::new();

    f.worker.handle_event(LifecycleEvent::Activate).unwrap();

    assert_eq!(f.context.claim_clients_count(), 1);
    assert_eq!(f.context.skip_waiting_count(), 0);
}

#[test]
fn test_install_then_activate_takes_each_action_once() {
    let f = Fixture::new();

    f.worker.handle_event(LifecycleEvent::Install).unwrap();
    f.worker.handle_event(LifecycleEvent::Activate).unwrap();

    assert_eq!(f.context.skip_waiting_count(), 1);
    assert_eq!(f.context.claim_clients_count(), 1);
}

#[test]
fn test_each_dispatch_acts_again() {
    let f = Fixture::new();

    f.worker.handle_event(LifecycleEvent::Install).unwrap();
    f.worker.handle_event(LifecycleEvent::Install).unwrap();

    assert_eq!(f.context.skip_waiting_count(), 2);
}
