//! End-to-end tests for message validation and thread-affine delivery.

use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};
use std::thread;

use pretty_assertions::assert_eq;

use gantry_ipc::{
    thread_affine, IpcError, MessageFilter, MessageHandler, MessageWhitelist, Peer, PeerId,
};
use gantry_tests::counting_peer;

#[test]
fn test_duplicate_whitelist_ids_are_rejected() {
    let err = MessageWhitelist::from_ids(&[1, 2, 1]).unwrap_err();
    assert_eq!(err, IpcError::DuplicateMessageId(1));
}

#[test]
fn test_filter_counts_every_violation_and_terminates_once() {
    let whitelist = MessageWhitelist::from_ids(&[0x10, 0x11]).unwrap();
    let filter = MessageFilter::new(whitelist);
    let (peer, terminations) = counting_peer(PeerId(3));

    assert!(filter.check(&peer, 0x10).is_ok());
    assert!(filter.check(&peer, 0x99).is_err());
    assert!(filter.check(&peer, 0x9a).is_err());

    assert_eq!(filter.violation_count(), 2);
    assert_eq!(terminations.load(Ordering::SeqCst), 1);
    assert!(peer.is_terminated());
}

#[test]
fn test_teardown_is_scoped_to_the_offending_peer() {
    let filter = MessageFilter::new(MessageWhitelist::from_ids(&[0x10]).unwrap());
    let (offender, offender_terminations) = counting_peer(PeerId(1));
    let (bystander, bystander_terminations) = counting_peer(PeerId(2));

    assert!(filter.check(&offender, 0xff).is_err());
    assert!(filter.check(&bystander, 0x10).is_ok());

    assert_eq!(offender_terminations.load(Ordering::SeqCst), 1);
    assert_eq!(bystander_terminations.load(Ordering::SeqCst), 0);
}

#[test]
fn test_concurrent_violations_terminate_at_most_once() {
    let filter = Arc::new(MessageFilter::new(
        MessageWhitelist::from_ids(&[0x10]).unwrap(),
    ));
    let (peer, terminations) = counting_peer(PeerId(5));
    let peer = Arc::new(peer);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let filter = Arc::clone(&filter);
            let peer = Arc::clone(&peer);
            thread::spawn(move || filter.check(peer.as_ref(), 0xff).is_err())
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }

    assert_eq!(filter.violation_count(), 8);
    assert_eq!(terminations.load(Ordering::SeqCst), 1);
}

struct Recorder {
    seen: Mutex<Vec<(u64, &'static str)>>,
}

impl MessageHandler<(u64, &'static str)> for Recorder {
    fn handle(&self, message: (u64, &'static str)) {
        self.seen.lock().unwrap().push(message);
    }
}

#[test]
fn test_cross_thread_sends_rendezvous_with_the_pump() {
    let recorder = Arc::new(Recorder {
        seen: Mutex::new(Vec::new()),
    });
    let (pump, sender) = thread_affine::<(u64, &'static str)>(recorder.clone());

    // Same thread: direct call, no pump involvement.
    assert!(sender.is_on_target_thread());
    sender.send((0, "local")).unwrap();
    assert_eq!(pump.poll(), 0);

    let worker = {
        let sender = sender.clone();
        thread::spawn(move || {
            assert!(!sender.is_on_target_thread());
            for id in 1..=3 {
                sender.send((id, "remote")).unwrap();
            }
        })
    };

    let mut handled = 0;
    while handled < 3 {
        handled += pump.poll();
    }
    worker.join().unwrap();

    let seen = recorder.seen.lock().unwrap();
    let ids: Vec<u64> = seen.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}

#[test]
fn test_send_to_dropped_pump_reports_disconnect() {
    let recorder = Arc::new(Recorder {
        seen: Mutex::new(Vec::new()),
    });
    let (pump, sender) = thread_affine::<(u64, &'static str)>(recorder);
    drop(pump);

    let worker = thread::spawn(move || sender.send((1, "remote")));
    assert_eq!(worker.join().unwrap(), Err(IpcError::Disconnected));
}

#[test]
fn test_guarded_peer_reports_its_id() {
    let (peer, _terminations) = counting_peer(PeerId(42));
    assert_eq!(peer.id(), PeerId(42));
    assert_eq!(peer.id().to_string(), "peer-42");
}
