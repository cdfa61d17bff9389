//! Reactive binding - re-clamp when signals change.
//!
//! Wires a clamp-value signal and a content signal to a shared [`Clamp`]
//! through one effect. The effect runs once on creation and again whenever
//! either signal changes; each run is one call to
//! [`Clamp::on_inputs_changed`]. Runs that find the clamp borrowed are
//! deferred and can be replayed with [`ClampBinding::flush`].
//!
//! # Example
//!
//! ```ignore
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use spark_signals::signal;
//!
//! let clamp = Rc::new(RefCell::new(Clamp::new(element, oracle, ClampOptions::default())?));
//! let lines = signal(2u32);
//! let content = signal(Some("Long text. More text".to_string()));
//!
//! let binding = bind(clamp.clone(), lines.clone(), content.clone());
//! lines.set(3); // re-clamps immediately
//! binding.stop();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{effect, Signal};
use tracing::{debug, warn};

use crate::controller::Clamp;
use crate::layout::{LayoutOracle, TextElement};
use crate::types::FitReport;

/// Inputs of a pass that found the clamp borrowed.
type DeferredPass = (u32, Option<String>);

/// A live binding between signals and a [`Clamp`].
///
/// Dropping the binding stops the effect.
pub struct ClampBinding {
    last_report: Rc<RefCell<Option<FitReport>>>,
    deferred: Rc<RefCell<Option<DeferredPass>>>,
    run: Rc<dyn Fn(u32, Option<String>)>,
    stop: Option<Box<dyn FnOnce()>>,
}

impl ClampBinding {
    /// Report from the most recent pass run by the binding.
    pub fn last_report(&self) -> Option<FitReport> {
        self.last_report.borrow().clone()
    }

    /// True while a pass skipped on a borrowed clamp is waiting for
    /// [`ClampBinding::flush`].
    pub fn has_deferred(&self) -> bool {
        self.deferred.borrow().is_some()
    }

    /// Run the most recently deferred pass, if any.
    ///
    /// Returns `true` when a deferred pass ran. If the clamp is still
    /// borrowed the pass stays deferred and `false` is returned.
    pub fn flush(&self) -> bool {
        let deferred = self.deferred.borrow_mut().take();
        let Some((clamp_lines, content)) = deferred else {
            return false;
        };
        (self.run)(clamp_lines, content);
        !self.has_deferred()
    }

    /// Stop re-clamping on signal changes.
    pub fn stop(mut self) {
        self.dispose();
    }

    fn dispose(&mut self) {
        if let Some(stop) = self.stop.take() {
            stop();
        }
        self.deferred.borrow_mut().take();
    }
}

impl Drop for ClampBinding {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Re-clamp `clamp` whenever `lines` or `content` changes.
///
/// A `None` content value re-fits the clamp's current source text. A change
/// that arrives while the caller holds a borrow of `clamp` is deferred: the
/// latest such inputs are kept until [`ClampBinding::flush`] or the next
/// signal change runs a pass.
pub fn bind<E, O>(
    clamp: Rc<RefCell<Clamp<E, O>>>,
    lines: Signal<u32>,
    content: Signal<Option<String>>,
) -> ClampBinding
where
    E: TextElement + 'static,
    O: LayoutOracle<E> + 'static,
{
    let last_report = Rc::new(RefCell::new(None));
    let deferred = Rc::new(RefCell::new(None));

    let report_slot = last_report.clone();
    let deferred_slot = deferred.clone();
    let pass = move |clamp_lines: u32, new_content: Option<String>| {
        let Ok(mut clamp) = clamp.try_borrow_mut() else {
            warn!(clamp_lines, "clamp target is borrowed, deferring pass");
            *deferred_slot.borrow_mut() = Some((clamp_lines, new_content));
            return;
        };
        if deferred_slot.borrow_mut().take().is_some() {
            debug!(clamp_lines, "deferred pass superseded");
        }
        let report = clamp.on_inputs_changed(clamp_lines, new_content);
        *report_slot.borrow_mut() = Some(report);
    };
    let run: Rc<dyn Fn(u32, Option<String>)> = Rc::new(pass);

    let runner = run.clone();
    let stop = effect(move || runner(lines.get(), content.get()));

    ClampBinding {
        last_report,
        deferred,
        run,
        stop: Some(Box::new(stop)),
    }
}
