use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

/// Coalesces rapid repeated calls into one trailing call after `delay_ms`
/// of quiescence. Each call cancels the previously scheduled one, so the
/// underlying function runs with the arguments of the last invocation.
pub fn debounce<T: 'static>(delay_ms: u32, f: impl Fn(T) + 'static) -> impl Fn(T) {
    let f = Rc::new(f);
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    move |arg: T| {
        if let Some(scheduled) = pending.borrow_mut().take() {
            scheduled.cancel();
        }
        let f = f.clone();
        let pending_slot = pending.clone();
        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || {
            pending_slot.borrow_mut().take();
            f(arg);
        }));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::debounce;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn coalesces_rapid_calls_into_one_trailing_call() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let debounced = debounce(50, {
            let calls = calls.clone();
            move |value: u32| calls.borrow_mut().push(value)
        });

        for value in 1..=5 {
            debounced(value);
        }
        TimeoutFuture::new(200).await;

        assert_eq!(*calls.borrow(), vec![5]);
    }

    #[wasm_bindgen_test]
    async fn a_call_after_the_window_schedules_again() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let debounced = debounce(50, {
            let calls = calls.clone();
            move |value: u32| calls.borrow_mut().push(value)
        });

        debounced(1);
        TimeoutFuture::new(100).await;
        debounced(2);
        TimeoutFuture::new(100).await;

        assert_eq!(*calls.borrow(), vec![1, 2]);
    }
}
