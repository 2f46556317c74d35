#![no_main]

use libfuzzer_sys::fuzz_target;

use dynfib_core::{stats, DynFibonacci, FibError, FIB_TABLE, FIB_TABLE_LEN, MAX_FIB_INDEX};

const SLOTS: usize = 4;

// Each pair of bytes is one operation on one of four slots:
// opcode in the low bits of the first byte, operand in the second.
fuzz_target!(|data: &[u8]| {
    stats::reset();
    {
        let mut slots: [DynFibonacci; SLOTS] = Default::default();

        for pair in data.chunks_exact(2) {
            let slot = usize::from(pair[0] >> 4) % SLOTS;
            let arg = usize::from(pair[1]);

            match pair[0] % 6 {
                0 => {
                    if let Ok(fib) = DynFibonacci::new(arg % (FIB_TABLE_LEN + 16)) {
                        slots[slot].assign(fib);
                    }
                }
                1 => {
                    let fib = &mut slots[slot];
                    match fib.get(arg) {
                        Ok(value) => assert_eq!(value, FIB_TABLE[arg]),
                        Err(FibError::MovedFrom) => assert!(!fib.is_alive()),
                        Err(FibError::OutOfCapacity { capacity, .. }) => assert!(arg >= capacity),
                        Err(FibError::Overflow(index)) => assert!(index > MAX_FIB_INDEX),
                        Err(e) => panic!("unexpected error: {e}"),
                    }
                }
                2 => {
                    let other = (slot + 1 + arg % (SLOTS - 1)) % SLOTS;
                    let (a, b) = if slot < other {
                        let (lo, hi) = slots.split_at_mut(other);
                        (&mut lo[slot], &mut hi[0])
                    } else {
                        let (lo, hi) = slots.split_at_mut(slot);
                        (&mut hi[0], &mut lo[other])
                    };
                    a.assign_from(b);
                    assert!(!b.is_alive());
                }
                3 => {
                    let before = slots[slot].cached_values().to_vec();
                    let same = slots[slot].take();
                    slots[slot].assign(same);
                    assert_eq!(slots[slot].cached_values(), before.as_slice());
                }
                4 => {
                    drop(slots[slot].take());
                    assert!(!slots[slot].is_alive());
                }
                _ => {
                    let fib = &slots[slot];
                    assert_eq!(fib.peek(arg), fib.cached_values().get(arg).copied());
                    if let Some(value) = fib.peek(arg) {
                        assert_eq!(value, FIB_TABLE[arg]);
                    }
                }
            }

            let live = slots.iter().filter(|f| f.is_alive()).count() as u64;
            assert_eq!(stats::snapshot().live(), live);
        }
    }
    assert_eq!(stats::snapshot().live(), 0);
});
