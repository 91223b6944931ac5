use std::cell::RefCell;
use std::rc::Rc;

use leptos::{create_effect, create_signal, on_cleanup, ReadSignal, SignalSet};

use crate::dom::{attach, WebHost};
use crate::error::TipError;
use crate::tooltip::{TipConfig, TipOptions};

/// Hook that attaches tooltips to `selector` once the view is mounted
///
/// Hover listeners are removed when the owning component is cleaned up. The
/// returned signal holds the error of the last attach attempt, if any.
#[must_use]
pub fn use_tipsta(selector: &'static str, options: TipOptions) -> ReadSignal<Option<TipError>> {
    let (error, set_error) = create_signal(None);
    let config = TipConfig::from(options);
    let attached: Rc<RefCell<Option<WebHost>>> = Rc::new(RefCell::new(None));

    {
        let attached = Rc::clone(&attached);
        create_effect(move |_| match attach(selector, config.clone()) {
            Ok(host) => {
                if let Some(mut previous) = attached.borrow_mut().replace(host) {
                    previous.detach();
                }
                set_error.set(None);
            }
            Err(err) => set_error.set(Some(err)),
        });
    }

    on_cleanup(move || {
        if let Some(mut host) = attached.borrow_mut().take() {
            host.detach();
        }
    });

    error
}
