//! Panic hook installation.

use std::backtrace::Backtrace;
use std::panic;
use std::sync::Arc;

use crate::crash::observer::{FatalEvent, FatalEventObserver};

/// Report every panic to `observer`, then run the previously installed hook.
///
/// Installing twice chains both observers.
pub fn install_panic_hook(observer: Arc<dyn FatalEventObserver>) {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let backtrace = Backtrace::force_capture();
        observer.on_fatal(&FatalEvent::from_panic(info, &backtrace));
        previous(info);
    }));
}
