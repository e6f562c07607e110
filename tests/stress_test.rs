//! Concurrency tests: readers racing repeated parses of a shared setting

mod common;

use envsettings::{InMemoryEnv, Setting, SettingKind, SettingValue};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_concurrent_get_during_parse() {
    common::init_logging();

    let env = Arc::new(InMemoryEnv::new());
    let setting = Arc::new(Setting::optional("STRESS_PORT", 1u16));
    let done = Arc::new(AtomicBool::new(false));
    let barrier = Arc::new(Barrier::new(9));
    let mut handles = vec![];

    {
        let env = Arc::clone(&env);
        let setting = Arc::clone(&setting);
        let done = Arc::clone(&done);
        let b = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            b.wait();
            // Cycle through valid, invalid and unset values
            for i in 0..2000u16 {
                match i % 3 {
                    0 => env.set("STRESS_PORT", i.to_string()),
                    1 => env.set("STRESS_PORT", "not-a-port"),
                    _ => {
                        env.remove("STRESS_PORT");
                    }
                }
                let _ = setting.parse_from(env.as_ref());
            }
            done.store(true, Ordering::SeqCst);
        }));
    }

    for _ in 0..8 {
        let setting = Arc::clone(&setting);
        let done = Arc::clone(&done);
        let b = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            b.wait();
            while !done.load(Ordering::SeqCst) {
                let value = setting.get().expect("optional setting is never empty");
                assert_eq!(value.kind(), SettingKind::Uint16);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(matches!(setting.get(), Some(SettingValue::Uint16(_))));
}

#[test]
fn test_concurrent_readers_see_single_value() {
    let env: InMemoryEnv = [("STRESS_NAME", "primary")].into_iter().collect();
    let setting = Arc::new(Setting::mandatory("STRESS_NAME", SettingKind::String));
    setting.parse_from(&env).unwrap();

    let barrier = Arc::new(Barrier::new(10));
    let handles: Vec<_> = (0..10)
        .map(|_| {
            let s = Arc::clone(&setting);
            let b = Arc::clone(&barrier);
            thread::spawn(move || {
                b.wait();
                s.get_as::<String>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("primary"));
    }
}
