//! Master spinner gate.
//!
//! The spinner itself is an opaque child component; the engine only decides
//! whether it should be shown. The decision is a quorum check over the
//! slide-image load counters: the spinner stays up until every subscribed
//! image has reported success or error, and also during the initial window
//! before any image has subscribed at all.

use std::rc::Rc;

use carousel_core::SpinnerTelemetry;

/// Returns whether the master spinner should be displayed.
pub fn should_show_spinner(enabled: bool, telemetry: SpinnerTelemetry) -> bool {
    if !enabled {
        return false;
    }
    let outcomes_reached =
        telemetry.error_count + telemetry.success_count == telemetry.subscription_count;
    !outcomes_reached || telemetry.subscription_count == 0
}

/// Spinner gate with an optional notification hook.
///
/// The hook fires on every evaluation where the gate is open, mirroring the
/// original widget's behavior of invoking its callback on each render that
/// shows the spinner.
pub struct MasterSpinnerGate {
    enabled: bool,
    on_master_spinner: Option<Rc<dyn Fn()>>,
}

impl MasterSpinnerGate {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            on_master_spinner: None,
        }
    }

    /// Installs the notification hook.
    pub fn set_notification(&mut self, callback: Rc<dyn Fn()>) {
        self.on_master_spinner = Some(callback);
    }

    /// Evaluates the gate, firing the notification if it is open.
    pub fn evaluate(&self, telemetry: SpinnerTelemetry) -> bool {
        let show = should_show_spinner(self.enabled, telemetry);
        if show {
            if let Some(callback) = &self.on_master_spinner {
                callback();
            }
        }
        show
    }
}
