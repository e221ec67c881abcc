//! A thin mutual-exclusion + condition-signaling primitive.
//!
//! [`Monitor`] insulates [`Buffer`](crate::buffer::Buffer) and other
//! coordination points in this crate from the platform threading
//! primitives directly. `enter`/`exit` are not separate calls here:
//! Rust's [`MutexGuard`] makes "exit on every path" structural, so
//! entering the section and holding the guard *is* the critical
//! section, and dropping the guard is the exit.

use std::sync::{Condvar, Mutex, MutexGuard};
use std::time::Duration;

/// Guards `state` with a single [`Mutex`] and offers named condition
/// variables for callers to wait and signal on.
///
/// A `Monitor` owns exactly one piece of shared state and zero or more
/// [`Condvar`]s; callers pick which condvar to wait/signal on for a
/// given wakeup reason (e.g. [`Buffer`](crate::buffer::Buffer) uses two,
/// "not full" and "not empty", sharing this one mutex).
pub struct Monitor<T> {
    state: Mutex<T>,
}

impl<T> Monitor<T> {
    /// Builds a monitor guarding `state`.
    pub fn new(state: T) -> Self {
        Monitor {
            state: Mutex::new(state),
        }
    }

    /// Enters the critical section, returning a guard.
    ///
    /// The guard must be held for the duration of any state mutation;
    /// dropping it is the `exit` half of the enter/exit pair.
    pub fn enter(&self) -> MutexGuard<'_, T> {
        // A poisoned mutex means some other thread holding it panicked.
        // Recovering the inner state rather than panicking here avoids
        // turning one stage's bug into a second, unrelated panic on
        // every other thread that shares this buffer.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Atomically releases `guard`, parks the caller on `condvar`, and
    /// reacquires the section before returning.
    ///
    /// Callers must always re-check their predicate after `wait`
    /// returns: spurious wakeups are permitted, and so is a wakeup
    /// whose condition another waiter already consumed.
    pub fn wait<'a>(
        &'a self,
        guard: MutexGuard<'a, T>,
        condvar: &Condvar,
    ) -> MutexGuard<'a, T> {
        condvar.wait(guard).unwrap_or_else(|e| e.into_inner())
    }

    /// Like [`Monitor::wait`], but gives up and returns after `timeout`
    /// even if nobody signaled. Not used by the core itself — the core
    /// has no timeout on any `push`/`pop` — but tests use it to assert
    /// that a blocked waiter is woken within a bounded time rather than
    /// relying on a fixed sleep.
    pub fn wait_timeout<'a>(
        &'a self,
        guard: MutexGuard<'a, T>,
        condvar: &Condvar,
        timeout: Duration,
    ) -> (MutexGuard<'a, T>, bool) {
        let (guard, result) = condvar
            .wait_timeout(guard, timeout)
            .unwrap_or_else(|e| e.into_inner());
        (guard, result.timed_out())
    }

    /// Wakes at most one thread waiting on `condvar`. A no-op if none
    /// are waiting. Must be called while the section is held, so the
    /// mutation that justifies the wakeup and the wakeup itself are
    /// seen atomically by the waiter.
    pub fn signal(&self, _guard: &MutexGuard<'_, T>, condvar: &Condvar) {
        condvar.notify_one();
    }

    /// Wakes every thread waiting on `condvar`.
    pub fn broadcast(&self, _guard: &MutexGuard<'_, T>, condvar: &Condvar) {
        condvar.notify_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn wait_timeout_reports_timed_out_when_never_signaled() {
        let monitor = Monitor::new(false);
        let condvar = Condvar::new();

        let guard = monitor.enter();
        let (_guard, timed_out) = monitor.wait_timeout(guard, &condvar, Duration::from_millis(20));
        assert!(timed_out);
    }

    #[test]
    fn signal_wakes_exactly_one_waiter() {
        let monitor = Arc::new(Monitor::new(0u32));
        let condvar = Arc::new(Condvar::new());

        let woken = Arc::new(Monitor::new(0u32));
        let mut handles = Vec::new();
        for _ in 0..2 {
            let monitor = Arc::clone(&monitor);
            let condvar = Arc::clone(&condvar);
            let woken = Arc::clone(&woken);
            handles.push(thread::spawn(move || {
                let mut guard = monitor.enter();
                while *guard == 0 {
                    guard = monitor.wait(guard, &condvar);
                }
                let mut count = woken.enter();
                *count += 1;
            }));
        }

        // Give both threads a chance to park before signaling.
        thread::sleep(Duration::from_millis(20));
        {
            let mut guard = monitor.enter();
            *guard = 1;
            monitor.signal(&guard, &condvar);
        }
        thread::sleep(Duration::from_millis(20));
        assert_eq!(*woken.enter(), 1);

        // Release the still-parked waiter so the thread can join.
        {
            let mut guard = monitor.enter();
            *guard = 2;
            monitor.broadcast(&guard, &condvar);
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(*woken.enter(), 2);
    }
}
